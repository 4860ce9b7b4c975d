//! Configuration for dicestats.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from dicestats.toml)
//! - User overrides (./dicestats.toml or ~/.config/dicestats/dicestats.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use dicestats_error::{ConfigError, DicestatsResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Bounds on statistics requests.
///
/// Combining a pool costs the product of the operand support sizes at every
/// fold step. `max_work` caps the estimated total of those products, which is
/// what actually keeps a single request from running away; the count and
/// side limits only reject absurd inputs early.
///
/// ```toml
/// [dice]
/// max_count = 100
/// max_sides = 1000
/// max_work = 1_000_000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct DiceLimits {
    /// Maximum number of dice in one pool
    #[serde(default = "default_max_count")]
    max_count: usize,

    /// Maximum number of sides per die
    #[serde(default = "default_max_sides")]
    max_sides: u32,

    /// Maximum estimated pair combinations for one request
    #[serde(default = "default_max_work")]
    max_work: u64,
}

fn default_max_count() -> usize {
    100
}

fn default_max_sides() -> u32 {
    1000
}

fn default_max_work() -> u64 {
    1_000_000
}

impl Default for DiceLimits {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            max_sides: default_max_sides(),
            max_work: default_max_work(),
        }
    }
}

/// Text chart settings.
///
/// ```toml
/// [chart]
/// bar_width = 40
/// precision = 4
/// default_title = "Distribution"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ChartConfig {
    /// Width in characters of the longest bar
    #[serde(default = "default_bar_width")]
    bar_width: usize,

    /// Decimal places for percentages
    #[serde(default = "default_precision")]
    precision: usize,

    /// Title used when a request supplies none
    #[serde(default = "default_title")]
    #[setters(into)]
    default_title: String,
}

fn default_bar_width() -> usize {
    40
}

fn default_precision() -> usize {
    4
}

fn default_title() -> String {
    "Distribution".to_string()
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            precision: default_precision(),
            default_title: default_title(),
        }
    }
}

/// Top-level dicestats configuration.
///
/// # Example
///
/// ```no_run
/// use dicestats::DicestatsConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DicestatsConfig::load()?;
/// println!("Largest pool: {}", config.dice.max_count());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DicestatsConfig {
    /// Request limits
    #[serde(default)]
    pub dice: DiceLimits,

    /// Text chart settings
    #[serde(default)]
    pub chart: ChartConfig,
}

impl DicestatsConfig {
    /// Load configuration from a specific file path.
    ///
    /// Sections and fields missing from the file take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> DicestatsResult<Self> {
        debug!("Loading configuration from file");

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (dicestats.toml shipped with the crate)
    /// 2. User config in home directory (~/.config/dicestats/dicestats.toml)
    /// 3. User config in current directory (./dicestats.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> DicestatsResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../dicestats.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/dicestats/dicestats.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("dicestats").required(false));

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Validates that every limit is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if a limit or the bar width is zero.
    pub fn validate(&self) -> DicestatsResult<()> {
        if self.dice.max_count == 0 {
            return Err(ConfigError::new("dice.max_count must be at least 1").into());
        }
        if self.dice.max_sides == 0 {
            return Err(ConfigError::new("dice.max_sides must be at least 1").into());
        }
        if self.dice.max_work == 0 {
            return Err(ConfigError::new("dice.max_work must be at least 1").into());
        }
        if self.chart.bar_width == 0 {
            return Err(ConfigError::new("chart.bar_width must be at least 1").into());
        }
        Ok(())
    }
}
