use crate::formatting::ChangeKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which color a rising quote is drawn in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorMode {
    #[default]
    GreenUpRedDown,
    RedUpGreenDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Red,
    Muted,
}

impl ColorMode {
    pub const ALL: [Self; 2] = [Self::GreenUpRedDown, Self::RedUpGreenDown];

    pub const fn label(self) -> &'static str {
        match self {
            Self::GreenUpRedDown => "Green Up / Red Down",
            Self::RedUpGreenDown => "Red Up / Green Down",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::GreenUpRedDown => "GREEN_UP_RED_DOWN",
            Self::RedUpGreenDown => "RED_UP_GREEN_DOWN",
        }
    }

    pub const fn tone_for(self, kind: ChangeKind) -> Tone {
        match (self, kind) {
            (_, ChangeKind::Neutral) => Tone::Muted,
            (Self::GreenUpRedDown, ChangeKind::Positive)
            | (Self::RedUpGreenDown, ChangeKind::Negative) => Tone::Green,
            (Self::GreenUpRedDown, ChangeKind::Negative)
            | (Self::RedUpGreenDown, ChangeKind::Positive) => Tone::Red,
        }
    }
}

/// User preferences for quote display. Lives for one process; nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    stock_color_mode: ColorMode,
}

impl Settings {
    pub const fn new(stock_color_mode: ColorMode) -> Self {
        Self { stock_color_mode }
    }

    pub const fn stock_color_mode(&self) -> ColorMode {
        self.stock_color_mode
    }

    pub const fn set_stock_color_mode(&mut self, mode: ColorMode) {
        self.stock_color_mode = mode;
    }
}
