use assert_cmd::Command;
use std::io::Write;
use tempfile::NamedTempFile;

fn quotefmt() -> Command {
    let mut cmd = Command::cargo_bin("quotefmt").unwrap();
    cmd.env_remove("QUOTEFMT_COLOR_MODE").arg("--no-color");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn price_command_prints_symbol_and_digits() {
    let out = stdout_of(quotefmt().args(["price", "1234.5", "--currency", "USD"]));
    assert_eq!(out, "$1234.50\n");

    let out = stdout_of(quotefmt().args(["price", "1234.567", "--currency", "EUR", "--decimals", "1"]));
    assert_eq!(out, "€1234.6\n");
}

#[test]
fn change_command_handles_absent_zero_and_signed_values() {
    assert_eq!(stdout_of(quotefmt().args(["change", "--suffix", "%"])), "N/A\n");
    assert_eq!(stdout_of(quotefmt().args(["change", "0", "--suffix", "%"])), "0.00%\n");
    assert_eq!(
        stdout_of(quotefmt().args(["change", "3.456", "--suffix", "%", "--decimals", "1"])),
        "+3.5%\n"
    );
    assert_eq!(stdout_of(quotefmt().args(["change", "-2", "--suffix", "%"])), "-2.00%\n");
    assert_eq!(stdout_of(quotefmt().args(["change", "3", "--decimals", "0"])), "+3\n");
}

#[test]
fn classify_command_prints_kind() {
    assert_eq!(stdout_of(quotefmt().arg("classify")), "neutral\n");
    assert_eq!(stdout_of(quotefmt().args(["classify", "0"])), "neutral\n");
    assert_eq!(stdout_of(quotefmt().args(["classify", "5"])), "positive\n");
    assert_eq!(stdout_of(quotefmt().args(["classify", "-5"])), "negative\n");
}

#[test]
fn quotes_command_emits_json_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol,price,currency,change,change_percent").unwrap();
    writeln!(file, "AAPL,189.5,USD,2.25,1.2").unwrap();
    writeln!(file, "NEWCO,12,KRW,,").unwrap();

    let out = stdout_of(quotefmt().arg("quotes").arg(file.path()).arg("--json"));
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(rows[0]["price"], "$189.50");
    assert_eq!(rows[0]["change"], "+2.25");
    assert_eq!(rows[0]["change_percent"], "+1.20%");
    assert_eq!(rows[0]["kind"], "positive");
    assert_eq!(rows[1]["price"], "₩12.00");
    assert_eq!(rows[1]["change_percent"], "N/A");
    assert_eq!(rows[1]["kind"], "neutral");
}

#[test]
fn quotes_table_lists_every_symbol() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "symbol,price,currency,change,change_percent").unwrap();
    writeln!(file, "SAP,120,EUR,-1.5,-1.23").unwrap();

    let out = stdout_of(
        quotefmt()
            .args(["--color-mode", "RED_UP_GREEN_DOWN", "quotes"])
            .arg(file.path()),
    );
    assert!(out.contains("SAP"));
    assert!(out.contains("€120.00"));
    assert!(out.contains("-1.23%"));
    assert!(out.contains("Red Up / Green Down"));
}

#[test]
fn missing_quotes_file_fails() {
    quotefmt()
        .args(["quotes", "does/not/exist.csv"])
        .assert()
        .failure();
}

#[test]
fn settings_marks_selected_mode() {
    let out = stdout_of(quotefmt().args(["--color-mode", "RED_UP_GREEN_DOWN", "settings"]));
    assert!(out.contains("( ) Green Up / Red Down"));
    assert!(out.contains("(*) Red Up / Green Down"));
}

#[test]
fn color_mode_is_read_from_environment() {
    let mut cmd = Command::cargo_bin("quotefmt").unwrap();
    cmd.env("QUOTEFMT_COLOR_MODE", "RED_UP_GREEN_DOWN")
        .args(["--no-color", "settings"]);
    let out = stdout_of(&mut cmd);
    assert!(out.contains("(*) Red Up / Green Down"));
}

#[test]
fn currencies_lists_table() {
    let out = stdout_of(quotefmt().arg("currencies"));
    assert!(out.contains("HKD  | HK$"));
    assert!(out.contains("KRW  | ₩"));
}

#[test]
fn decimals_above_limit_are_rejected() {
    quotefmt()
        .args(["price", "1", "--decimals", "70000"])
        .assert()
        .failure();
    quotefmt()
        .args(["change", "1", "--decimals", "101"])
        .assert()
        .failure();

    let out = stdout_of(quotefmt().args(["price", "1", "--decimals", "100"]));
    assert_eq!(out.trim_end().len(), "$1.".len() + 100);
}

#[test]
fn non_finite_values_use_native_rendering() {
    assert_eq!(stdout_of(quotefmt().args(["price", "NaN"])), "$NaN\n");
    assert_eq!(
        stdout_of(quotefmt().args(["change", "inf", "--suffix", "%"])),
        "inf%\n"
    );
}

#[test]
fn completions_are_written_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = stdout_of(
        quotefmt()
            .args(["completions", "bash", "--output-dir"])
            .arg(dir.path()),
    );
    assert!(out.starts_with("Installed Bash completions to"));

    let script = std::fs::read_to_string(dir.path().join("quotefmt.bash")).unwrap();
    assert!(script.contains("quotefmt"));
    assert!(script.contains("--color-mode"));
}

#[test]
fn completions_print_to_stdout_without_target() {
    let out = stdout_of(quotefmt().args(["completions", "zsh"]));
    assert!(out.contains("#compdef quotefmt"));
}
