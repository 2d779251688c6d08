//! Command line configuration

use crate::input::{self, InputError};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;

/// Random array size used when none is given
pub const DEFAULT_RANDOM_COUNT: usize = 10;

#[derive(Debug, Parser, Clone)]
#[command(name = "heapstep")]
#[command(about = "Step through heap sort one comparison at a time")]
pub struct Cli {
    /// Values to sort, e.g. `heapstep 5 3 8 1` or `heapstep "5,3,8,1"`
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Start with COUNT random values between 1 and 100
    #[arg(short, long, value_name = "COUNT", conflicts_with = "values")]
    pub random: Option<usize>,

    /// Seed for random arrays
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds between auto-play steps
    #[arg(short, long, default_value_t = 0.5)]
    pub pacing: f64,

    /// Print every step to stdout instead of starting the UI
    #[arg(long)]
    pub dump: bool,

    /// Write logs to this file (the UI owns the terminal)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn pacing(&self) -> Result<Duration, InputError> {
        match Duration::try_from_secs_f64(self.pacing) {
            Ok(pacing) if !pacing.is_zero() => Ok(pacing),
            _ => Err(InputError::InvalidPacing(self.pacing.to_string())),
        }
    }

    /// Random generator for this session, seeded when `--seed` is given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// The array to start with, if any was requested
    pub fn initial_values(&self, rng: &mut StdRng) -> Result<Option<Vec<i32>>, InputError> {
        if let Some(count) = self.random {
            return input::random_values_with(rng, count).map(Some);
        }
        if self.values.is_empty() {
            return Ok(None);
        }
        input::parse_values(&self.values.join(" ")).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_values() {
        let cli = Cli::parse_from(["heapstep", "5", "-3", "8"]);
        let mut rng = cli.rng();
        assert_eq!(cli.initial_values(&mut rng).unwrap(), Some(vec![5, -3, 8]));
    }

    #[test]
    fn test_pacing_validation() {
        let cli = Cli::parse_from(["heapstep", "--pacing", "0.25"]);
        assert_eq!(cli.pacing().unwrap(), Duration::from_millis(250));

        let cli = Cli::parse_from(["heapstep", "--pacing", "0"]);
        assert!(cli.pacing().is_err());
    }

    #[test]
    fn test_seeded_random() {
        let cli = Cli::parse_from(["heapstep", "--random", "6", "--seed", "9"]);
        let first = cli.initial_values(&mut cli.rng()).unwrap();
        let second = cli.initial_values(&mut cli.rng()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.map(|v| v.len()), Some(6));
    }

    #[test]
    fn test_no_values() {
        let cli = Cli::parse_from(["heapstep"]);
        assert_eq!(cli.initial_values(&mut cli.rng()).unwrap(), None);
    }
}
