//! Core type aliases, thresholds, and runtime utilities for the GTO learner.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by every other crate in the workspace.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, pot sizes, and bet amounts in big blinds.
pub type Chips = f32;
/// Reference-solution frequency, in percent of the time an action is taken.
pub type Frequency = f32;
/// Scenario identifier as it appears on the wire (`question_id`).
pub type QuestionId = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats at the table (six-max).
pub const N: usize = 6;

// ============================================================================
// FREQUENCY TIERS
// Percentage weights are bucketed once, at ingestion:
// [HIGH, 100] → tier 1, [MEDIUM, HIGH) → tier 2, (0, MEDIUM) → tier 3.
// ============================================================================
/// Lowest frequency that still counts as a dominant (tier 1) action.
pub const TIER_HIGH_FLOOR: Frequency = 50.0;
/// Lowest frequency that still counts as a mixed-in (tier 2) action.
pub const TIER_MEDIUM_FLOOR: Frequency = 30.0;
/// Percentage-encoded solutions must sum to this total.
pub const PERCENT_TOTAL: Frequency = 100.0;
/// Rounding slack allowed on the percentage total.
pub const PERCENT_TOLERANCE: Frequency = 0.5;

// ============================================================================
// SERVER DEFAULTS
// ============================================================================
/// Address the HTTP server binds when neither flag nor BIND_ADDR is given.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
/// actix-web worker threads.
pub const DEFAULT_WORKERS: usize = 4;
/// Seed for random scenario selection when none is configured.
pub const DEFAULT_SEED: u64 = 0x5EED;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// Must be called from within a tokio runtime.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
