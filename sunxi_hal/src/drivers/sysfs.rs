//! sysfs driver.
//!
//! Enumerates the kernel's gpio chips under the sysfs gpio class directory
//! (`/sys/class/gpio` by default). Each `gpiochipN` directory publishes
//! `base` and `ngpio`; every number in `base..base + ngpio` gets a handle.
//! Lines are not exported here; handles only record where the line lives.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sunxi_common::config::BoardConfig;
use sunxi_common::gpio::driver::{GpioDriver, HalError, OsPin};
use tracing::{debug, info, warn};

/// Registered driver name.
pub const DRIVER_NAME: &str = "sysfs";

/// A gpio line published through sysfs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsPin {
    number: u32,
    chip: String,
    path: PathBuf,
}

impl SysfsPin {
    /// Label of the owning gpio chip.
    pub fn chip(&self) -> &str {
        &self.chip
    }

    /// Directory the line appears under once exported.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OsPin for SysfsPin {
    fn number(&self) -> u32 {
        self.number
    }

    fn label(&self) -> String {
        format!("gpio{}", self.number)
    }
}

/// One `gpiochipN` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GpioChip {
    label: String,
    base: u32,
    ngpio: u32,
}

/// sysfs driver implementing the GpioDriver trait.
#[derive(Debug, Default)]
pub struct SysfsDriver {
    root: PathBuf,
    chips: Vec<GpioChip>,
    lines: BTreeMap<u32, Arc<SysfsPin>>,
    initialized: bool,
}

impl SysfsDriver {
    /// Create an uninitialized driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// sysfs directory scanned by `init()`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of gpio chips found.
    pub fn chip_count(&self) -> usize {
        self.chips.len()
    }

    fn scan(root: &Path) -> Result<Vec<GpioChip>, HalError> {
        let entries = fs::read_dir(root).map_err(|e| {
            HalError::InitFailed(format!("cannot read {}: {}", root.display(), e))
        })?;

        let mut chips = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                HalError::InitFailed(format!("cannot read {}: {}", root.display(), e))
            })?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !name.starts_with("gpiochip") {
                continue;
            }

            let dir = entry.path();
            let base = read_u32(&dir.join("base"))?;
            let ngpio = read_u32(&dir.join("ngpio"))?;
            let label = fs::read_to_string(dir.join("label"))
                .map(|s| s.trim().to_string())
                .unwrap_or_else(|_| name.to_string());

            debug!("Found {}: label={}, base={}, ngpio={}", name, label, base, ngpio);
            chips.push(GpioChip { label, base, ngpio });
        }

        chips.sort_by_key(|c| c.base);
        Ok(chips)
    }
}

fn read_u32(path: &Path) -> Result<u32, HalError> {
    let content = fs::read_to_string(path)
        .map_err(|e| HalError::InitFailed(format!("cannot read {}: {}", path.display(), e)))?;
    content.trim().parse().map_err(|e| {
        HalError::InitFailed(format!(
            "invalid number '{}' in {}: {}",
            content.trim(),
            path.display(),
            e
        ))
    })
}

impl GpioDriver for SysfsDriver {
    fn name(&self) -> &'static str {
        DRIVER_NAME
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn init(&mut self, config: &BoardConfig) -> Result<(), HalError> {
        let root = config.board.sysfs_root.clone();
        let chips = Self::scan(&root)?;
        if chips.is_empty() {
            return Err(HalError::InitFailed(format!(
                "no gpiochip found under {}",
                root.display()
            )));
        }

        let mut lines = BTreeMap::new();
        for chip in &chips {
            for number in chip.base..chip.base.saturating_add(chip.ngpio) {
                let line = Arc::new(SysfsPin {
                    number,
                    chip: chip.label.clone(),
                    path: root.join(format!("gpio{number}")),
                });
                if lines.insert(number, line).is_some() {
                    warn!("gpio{} claimed by more than one chip, keeping {}", number, chip.label);
                }
            }
        }

        info!(
            "sysfs driver initialized: {} chips, {} lines under {}",
            chips.len(),
            lines.len(),
            root.display()
        );

        self.root = root;
        self.chips = chips;
        self.lines = lines;
        self.initialized = true;
        Ok(())
    }

    fn pin(&self, number: u32) -> Option<Arc<dyn OsPin>> {
        if !self.initialized {
            return None;
        }
        self.lines
            .get(&number)
            .map(|line| Arc::clone(line) as Arc<dyn OsPin>)
    }

    fn pin_count(&self) -> usize {
        self.lines.len()
    }
}

/// Factory function to create a sysfs driver instance.
pub fn create_driver() -> Box<dyn GpioDriver> {
    Box::new(SysfsDriver::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunxi_common::table::ChipVariant;
    use tempfile::TempDir;

    fn write_chip(root: &Path, name: &str, label: &str, base: u32, ngpio: u32) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("base"), format!("{base}\n")).unwrap();
        fs::write(dir.join("ngpio"), format!("{ngpio}\n")).unwrap();
        fs::write(dir.join("label"), format!("{label}\n")).unwrap();
    }

    fn config_for(root: &Path) -> BoardConfig {
        let mut config = BoardConfig::for_chip(ChipVariant::H3);
        config.board.sysfs_root = root.to_path_buf();
        config
    }

    #[test]
    fn enumerates_chip_ranges() {
        let tmp = TempDir::new().unwrap();
        write_chip(tmp.path(), "gpiochip0", "1c20800.pinctrl", 0, 224);
        write_chip(tmp.path(), "gpiochip352", "1f02c00.pinctrl", 352, 32);
        fs::write(tmp.path().join("export"), "").unwrap();

        let mut driver = SysfsDriver::new();
        driver.init(&config_for(tmp.path())).unwrap();

        assert_eq!(driver.chip_count(), 2);
        assert_eq!(driver.pin_count(), 256);
        assert!(driver.pin(223).is_some());
        assert!(driver.pin(224).is_none());
        assert!(driver.pin(353).is_some());

        let line = driver.pin(68).unwrap();
        assert_eq!(line.number(), 68);
        assert_eq!(line.label(), "gpio68");
        assert_eq!(driver.root(), tmp.path());

        let r_pio = &driver.lines[&353];
        assert_eq!(r_pio.chip(), "1f02c00.pinctrl");
        assert_eq!(r_pio.path(), tmp.path().join("gpio353"));
        assert_eq!(driver.lines[&0].chip(), "1c20800.pinctrl");
    }

    #[test]
    fn missing_root_fails_init() {
        let tmp = TempDir::new().unwrap();
        let mut driver = SysfsDriver::new();
        let err = driver
            .init(&config_for(&tmp.path().join("nope")))
            .unwrap_err();
        assert!(matches!(err, HalError::InitFailed(_)));
    }

    #[test]
    fn empty_root_fails_init() {
        let tmp = TempDir::new().unwrap();
        let mut driver = SysfsDriver::new();
        let err = driver.init(&config_for(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("no gpiochip"));
    }

    #[test]
    fn malformed_base_fails_init() {
        let tmp = TempDir::new().unwrap();
        write_chip(tmp.path(), "gpiochip0", "x", 0, 8);
        fs::write(tmp.path().join("gpiochip0").join("base"), "zero\n").unwrap();
        let mut driver = SysfsDriver::new();
        assert!(driver.init(&config_for(tmp.path())).is_err());
    }

    #[test]
    fn label_defaults_to_directory_name() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("gpiochip0");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("base"), "0").unwrap();
        fs::write(dir.join("ngpio"), "4").unwrap();

        let mut driver = SysfsDriver::new();
        driver.init(&config_for(tmp.path())).unwrap();
        assert_eq!(driver.chips[0].label, "gpiochip0");
    }
}
