//! Data loading seams and app configuration
use crate::layout::DEFAULT_NARROW_BREAKPOINT_PX;
use crate::price::CurrencyFormat;
use crate::seating::EventSeating;
use serde::{Deserialize, Serialize};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the event and its seating chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the seating data cannot be loaded or parsed.
    fn load_event_seating(&self) -> Result<EventSeating, Self::Error>;

    /// Load configuration data for a specific system
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Presentation settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    pub currency: CurrencyFormat,
    pub narrow_breakpoint_px: f64,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
        }
    }
}
