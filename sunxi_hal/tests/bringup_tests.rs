//! Board bring-up tests.
//!
//! End-to-end: board.toml on disk, fake sysfs gpio tree, built-in and
//! override function tables.

use std::fs;
use std::path::Path;

use sunxi_common::config::BoardConfig;
use sunxi_hal::board::{Board, BringupError};
use sunxi_hal::driver_registry::DriverRegistry;
use sunxi_hal::registrar::RegistrationError;
use tempfile::TempDir;

/// Create a gpiochip directory in a fake sysfs tree.
fn write_chip(root: &Path, base: u32, ngpio: u32) {
    let dir = root.join(format!("gpiochip{base}"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("base"), format!("{base}\n")).unwrap();
    fs::write(dir.join("ngpio"), format!("{ngpio}\n")).unwrap();
    fs::write(dir.join("label"), "pinctrl\n").unwrap();
}

/// Create board.toml pointing at the fake sysfs tree.
fn write_board_toml(dir: &Path, chip: &str, extra: &str) -> std::path::PathBuf {
    let path = dir.join("board.toml");
    fs::write(
        &path,
        format!(
            r#"
[shared]
service_name = "test-board"

[board]
chip = "{chip}"
driver = "sysfs"
sysfs_root = "{}"
{extra}
"#,
            dir.join("sys").display()
        ),
    )
    .unwrap();
    path
}

fn bring_up(path: &Path) -> Result<Board, BringupError> {
    let config = BoardConfig::load_validated(path).unwrap();
    Board::bring_up(config, path.parent().unwrap(), &DriverRegistry::with_builtin())
}

#[test]
fn h3_on_sysfs() {
    let tmp = TempDir::new().unwrap();
    let sys = tmp.path().join("sys");
    write_chip(&sys, 0, 224);
    write_chip(&sys, 352, 32);
    let path = write_board_toml(tmp.path(), "h3", "");

    let board = bring_up(&path).unwrap();
    let pa18 = board.pins().get_by_str("PA18").unwrap();
    assert!(pa18.is_available());
    assert!(pa18.supports_edge());
    assert_eq!(pa18.os_pin().unwrap().label(), "gpio18");

    let pl4 = board.pins().get_by_str("PL4").unwrap();
    assert_eq!(pl4.os_pin().unwrap().number(), 356);
    assert_eq!(board.summary().table, "h3");
}

#[test]
fn sysfs_gap_reports_missing_line() {
    let tmp = TempDir::new().unwrap();
    let sys = tmp.path().join("sys");
    // R_PIO controller (bank L) absent.
    write_chip(&sys, 0, 224);
    let path = write_board_toml(tmp.path(), "h3", "");

    let err = bring_up(&path).err().unwrap();
    assert!(matches!(
        err,
        BringupError::Registration(RegistrationError::MissingOsPin { number: 352, .. })
    ));
}

#[test]
fn override_table_relative_to_config_dir() {
    let tmp = TempDir::new().unwrap();
    let sys = tmp.path().join("sys");
    write_chip(&sys, 0, 224);
    fs::create_dir_all(tmp.path().join("tables")).unwrap();
    fs::write(
        tmp.path().join("tables/custom.toml"),
        r#"
name = "custom"

[pins]
PA6 = ["SIM_PWREN", "", "", "", "PA_EINT6"]
PC4 = ["NAND_CE0"]
PD14 = [""]
"#,
    )
    .unwrap();
    let path = write_board_toml(tmp.path(), "h3", "table = \"tables/custom.toml\"");

    let board = bring_up(&path).unwrap();
    assert_eq!(board.summary().table, "custom");
    assert_eq!(board.summary().configured, 3);
    assert_eq!(board.summary().edge_capable, 1);
    assert!(board.pins().get_by_str("PA18").unwrap().os_pin().is_none());
}

#[test]
fn override_table_unknown_pin_fails() {
    let tmp = TempDir::new().unwrap();
    let sys = tmp.path().join("sys");
    write_chip(&sys, 0, 224);
    fs::write(
        tmp.path().join("bad.toml"),
        "name = \"bad\"\n[pins]\nPA30 = [\"X\"]\n",
    )
    .unwrap();
    let path = write_board_toml(tmp.path(), "h3", "table = \"bad.toml\"");

    let err = bring_up(&path).err().unwrap();
    assert!(matches!(
        err,
        BringupError::Registration(RegistrationError::UnknownPin { .. })
    ));
}

#[test]
fn missing_table_file_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let sys = tmp.path().join("sys");
    write_chip(&sys, 0, 224);
    let path = write_board_toml(tmp.path(), "h3", "table = \"absent.toml\"");

    let err = bring_up(&path).err().unwrap();
    assert!(matches!(err, BringupError::Config(_)));
}

#[test]
fn simulated_a64_with_hidden_line() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("board.toml");
    fs::write(
        &path,
        r#"
[board]
chip = "a64"
driver = "simulation"
simulated_missing = [32]
"#,
    )
    .unwrap();

    // PB0 is gpio 32.
    let err = bring_up(&path).err().unwrap();
    assert!(matches!(
        err,
        BringupError::Registration(RegistrationError::MissingOsPin { number: 32, .. })
    ));
}

#[test]
fn sysfs_root_missing_fails_driver_init() {
    let tmp = TempDir::new().unwrap();
    let path = write_board_toml(tmp.path(), "a20", "");
    let err = bring_up(&path).err().unwrap();
    assert!(matches!(err, BringupError::Driver(_)));
}
