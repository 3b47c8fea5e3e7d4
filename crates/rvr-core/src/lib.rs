//! Core type aliases, traits, and constants for range-vs-range training.
//!
//! Every other crate in the workspace speaks in these units: chips for stacks
//! and bets, positions for seats, integer weights for range membership, and
//! probabilities for the running likelihood of the realized game line.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, contributions, and bet totals.
pub type Chips = i32;
/// Seat index around the table, in action order.
pub type Position = usize;
/// Multiplicity of a combo within a range. Always positive.
pub type Weight = u32;
/// Branch ratios and the running likelihood of the realized line.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BETTING STRUCTURE
// ============================================================================
/// Aggressive actions per round after which a fixed-limit round is capped.
pub const LIMIT_BET_CAP: usize = 4;
/// Deepest stack a seat may start with. Keeps every pot and raise total
/// well inside `Chips` for any realistic number of seats.
pub const MAX_STACK: Chips = 1 << 24;
/// Weight given to a combo when a range term carries no explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;

// ============================================================================
// LIKELIHOOD BOOKKEEPING
// ============================================================================
/// Likelihood of the realized line at the start of every hand.
pub const STARTING_FACTOR: Probability = 1.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory for timestamped log files.
pub const LOG_DIR: &str = "logs";
/// Environment variable overriding the terminal log level.
pub const LOG_ENV: &str = "RVR_LOG";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `logs/<unix>.log` and INFO (or `$RVR_LOG`) to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all(LOG_DIR).expect("create logs directory");
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
        std::fs::File::create(format!("{}/{}.log", LOG_DIR, time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level(),
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Terminal log level from `$RVR_LOG`, falling back to INFO.
#[cfg(feature = "server")]
fn level() -> log::LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info)
}
