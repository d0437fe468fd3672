//! # Configuration
//!
//! Settings live in `config.json` inside the data directory. A missing file
//! means all defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page-size` | `30` | Books revealed per page when listing or browsing |
//! | `rating-precision` | `1` | Decimal places shown for average ratings (0–3) |

use crate::engine::DEFAULT_PAGE_SIZE;
use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RATING_PRECISION: usize = 1;
const MAX_RATING_PRECISION: usize = 3;

pub const KEYS: [&str; 2] = ["page-size", "rating-precision"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ShelfConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_rating_precision")]
    pub rating_precision: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_rating_precision() -> usize {
    DEFAULT_RATING_PRECISION
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            rating_precision: DEFAULT_RATING_PRECISION,
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "rating-precision" => Some(self.rating_precision.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("page-size must be a positive integer, got '{}'", value))?;
                if size == 0 {
                    return Err("page-size must be at least 1".to_string());
                }
                self.page_size = size;
                Ok(())
            }
            "rating-precision" => {
                let precision: usize = value.trim().parse().map_err(|_| {
                    format!("rating-precision must be an integer, got '{}'", value)
                })?;
                if precision > MAX_RATING_PRECISION {
                    return Err(format!(
                        "rating-precision must be between 0 and {}",
                        MAX_RATING_PRECISION
                    ));
                }
                self.rating_precision = precision;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    /// Page size as the engine consumes it; a hand-edited zero becomes one.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Average rating formatted with the configured precision.
    pub fn format_rating(&self, rating: f64) -> String {
        format!(
            "{:.*}",
            self.rating_precision.min(MAX_RATING_PRECISION),
            rating
        )
    }
}
