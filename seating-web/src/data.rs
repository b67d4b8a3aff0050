//! Bundled data: the demo event's seating chart and the presentation config.
use seating_core::{DataLoader, EventSeating, SeatingConfig, SeatingError};
use serde::de::DeserializeOwned;
use std::rc::Rc;

const SEATING_JSON: &str = include_str!("../static/data/seating.json");
const CONFIG_JSON: &str = include_str!("../static/data/config.json");

/// Data loader reading files embedded at compile time.
pub struct EmbeddedDataLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Unknown config: {0}")]
    UnknownConfig(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Seating(#[from] SeatingError),
}

impl DataLoader for EmbeddedDataLoader {
    type Error = WebDataError;

    fn load_event_seating(&self) -> Result<EventSeating, Self::Error> {
        Ok(EventSeating::from_json(SEATING_JSON)?)
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = match config_name {
            "seating" => CONFIG_JSON,
            _ => return Err(WebDataError::UnknownConfig(config_name.to_string())),
        };
        Ok(serde_json::from_str(json)?)
    }
}

thread_local! {
    static CONFIG: Rc<SeatingConfig> = Rc::new(
        EmbeddedDataLoader
            .load_config("seating")
            .unwrap_or_else(|err: WebDataError| {
                crate::dom::console_error(&format!("Failed to load seating config: {err}"));
                SeatingConfig::default()
            }),
    );
}

/// Presentation config, parsed once per thread.
#[must_use]
pub fn seating_config() -> Rc<SeatingConfig> {
    CONFIG.with(Rc::clone)
}
