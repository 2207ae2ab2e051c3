use crate::error::{Error, ErrorType, Result};

use clap::Args;

use std::sync::OnceLock;

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Print more information
    #[arg(short, long)]
    pub verbose: bool,
    /// Number of trailing points used to smooth the speed of a point
    #[arg(long, default_value_t = 10)]
    pub speed_window: usize,
    /// Time gap in seconds above which a new run may start
    #[arg(long, default_value_t = 1.0)]
    pub split_time_gap: f64,
    /// Distance jump in meters above which a new run may start
    #[arg(long, default_value_t = 100.0)]
    pub split_distance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            speed_window: 10,
            split_time_gap: 1.0,
            split_distance: 100.0,
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn get_config() -> &'static Config {
    let ret: &Config = CONFIG.get().unwrap();
    ret
}

pub fn set_config(config: Config) -> Result<()> {
    CONFIG.set(config).or(Err(Error::new_s(
        ErrorType::LogicError,
        "config already set",
    )))
}
