//! One-time loading of the bundled event and chart.
use crate::data::{EmbeddedDataLoader, WebDataError};
use seating_core::{DataLoader, Event, SeatingChart};
use std::rc::Rc;

/// Shared, read-only inputs of the seating page.
#[derive(Debug, Clone)]
pub struct AppData {
    pub event: Rc<Event>,
    pub chart: Rc<SeatingChart>,
}

impl PartialEq for AppData {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.event, &other.event) && Rc::ptr_eq(&self.chart, &other.chart)
    }
}

/// # Errors
///
/// Returns an error if the bundled seating data is malformed.
pub fn load_app_data(loader: &impl DataLoader<Error = WebDataError>) -> Result<AppData, WebDataError> {
    let bundled = loader.load_event_seating()?;
    log::debug!(
        "loaded {} seat(s) for event {}",
        bundled.seating.seat_count(),
        bundled.event.event_id
    );
    Ok(AppData {
        event: Rc::new(bundled.event),
        chart: Rc::new(bundled.seating),
    })
}

/// Load with the embedded loader, reporting failures to the console.
#[must_use]
pub fn load_bundled() -> Option<AppData> {
    load_app_data(&EmbeddedDataLoader)
        .inspect_err(|err| {
            crate::dom::console_error(&format!("Failed to load seating data: {err}"));
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seating_core::EventSeating;
    use serde::de::DeserializeOwned;

    struct BrokenLoader;

    impl DataLoader for BrokenLoader {
        type Error = WebDataError;

        fn load_event_seating(&self) -> Result<EventSeating, Self::Error> {
            Ok(serde_json::from_str::<EventSeating>("{")?)
        }

        fn load_config<T: DeserializeOwned>(&self, name: &str) -> Result<T, Self::Error> {
            Err(WebDataError::UnknownConfig(name.to_string()))
        }
    }

    #[test]
    fn bundled_data_loads() {
        let data = load_bundled().expect("bundled data");
        assert_eq!(data.event.name_pub, "Autumn Gala Night");
        assert_eq!(data.chart.seat_count(), 48);
    }

    #[test]
    fn malformed_data_is_reported() {
        assert!(matches!(
            load_app_data(&BrokenLoader),
            Err(WebDataError::Json(_))
        ));
    }

    #[test]
    fn app_data_compares_by_pointer() {
        let data = load_bundled().expect("bundled data");
        assert!(data == data.clone());
        let copy = AppData {
            event: Rc::new((*data.event).clone()),
            chart: Rc::clone(&data.chart),
        };
        assert!(data != copy);
    }
}
