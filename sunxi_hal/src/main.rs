//! # sunxi HAL Binary
//!
//! Board gpio bring-up: registers the chip's alternate-function table onto
//! the pin registry and binds every listed pin to its OS gpio line.
//!
//! # Usage
//!
//! ```bash
//! # Bring up with the board configuration
//! sunxi_hal --config /etc/sunxi/board.toml
//!
//! # No board file: pick the chip and simulate the OS side
//! sunxi_hal --chip a64 --simulate
//!
//! # Print configured pins as JSON
//! sunxi_hal --config board.toml --dump
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use sunxi_common::config::{BoardConfig, ConfigError};
use sunxi_common::consts::DEFAULT_CONFIG_PATH;
use sunxi_common::table::ChipVariant;
use sunxi_hal::board::Board;
use sunxi_hal::driver_registry::DriverRegistry;
use sunxi_hal::drivers::simulation;
use sunxi_hal::registry::LogicalPin;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// sunxi HAL - gpio pin capability registration
#[derive(Parser, Debug)]
#[command(name = "sunxi_hal")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Registers sunxi pin alternate functions and binds OS gpio lines")]
#[command(long_about = None)]
struct Args {
    /// Path to the board configuration file (board.toml).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Chip variant, overriding the configuration (h3, a20, a64).
    #[arg(long)]
    chip: Option<ChipVariant>,

    /// Function table file, overriding the built-in table.
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,

    /// Force simulation driver (exclusive - ignores --driver)
    #[arg(short = 's', long)]
    simulate: bool,

    /// OS gpio driver, overriding the configuration
    #[arg(short, long)]
    driver: Option<String>,

    /// Print configured pins as JSON on stdout
    #[arg(long)]
    dump: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("gpio bring-up failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load before logging starts so the configured level applies.
    let loaded = BoardConfig::load_validated(&args.config);
    let level = match &loaded {
        _ if args.verbose => Level::DEBUG,
        Ok(config) => config.shared.log_level.as_tracing(),
        Err(_) => Level::INFO,
    };
    setup_tracing(level, args.json);

    info!("sunxi HAL v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = match (loaded, args.chip) {
        (Ok(config), _) => {
            info!("Loaded board config from {:?}", args.config);
            config
        }
        (Err(ConfigError::FileNotFound(path)), Some(chip)) => {
            info!("No board config at {:?}, using {} defaults", path, chip);
            BoardConfig::for_chip(chip)
        }
        (Err(e), _) => return Err(e.into()),
    };
    apply_overrides(&mut config, &args);
    config.validate()?;

    let config_dir = args
        .config
        .parent()
        .unwrap_or(Path::new("."))
        .to_path_buf();
    let drivers = DriverRegistry::with_builtin();
    let board = Board::bring_up(config, &config_dir, &drivers)?;

    let summary = board.summary();
    info!(
        "gpio ready: chip={}, table={}, {} pins configured ({} edge-capable)",
        board.config().board.chip,
        summary.table,
        summary.configured,
        summary.edge_capable
    );

    if args.dump {
        let report: Vec<_> = board.pins().configured().map(LogicalPin::report).collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    info!("sunxi HAL bring-up complete");
    Ok(())
}

/// Apply command-line overrides to the loaded configuration.
fn apply_overrides(config: &mut BoardConfig, args: &Args) {
    if let Some(chip) = args.chip {
        if chip != config.board.chip {
            info!("Chip override: {} -> {}", config.board.chip, chip);
            config.board.chip = chip;
        }
    }
    if let Some(table) = &args.table {
        // CLI paths are relative to the working directory, not the config.
        config.board.table = Some(std::path::absolute(table).unwrap_or_else(|_| table.clone()));
    }
    if args.simulate {
        info!("Simulation mode enabled (exclusive)");
        config.board.driver = simulation::DRIVER_NAME.to_string();
    } else if let Some(driver) = &args.driver {
        info!("Driver from CLI: {}", driver);
        config.board.driver = driver.clone();
    }
}

/// Setup tracing subscriber.
fn setup_tracing(level: Level, json: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
