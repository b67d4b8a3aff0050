//! Seats, rows and the chart an event is sold from.
use crate::error::SeatingError;
use crate::ticket::{TicketCatalog, TicketType, TicketTypeId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(pub String);

impl SeatId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SeatId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One physical seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_id: SeatId,
    /// Position within the row, starting at 1.
    pub place: u32,
    pub ticket_type_id: TicketTypeId,
}

impl Seat {
    #[must_use]
    pub fn new(seat_id: impl Into<SeatId>, place: u32, ticket_type_id: u32) -> Self {
        Self {
            seat_id: seat_id.into(),
            place,
            ticket_type_id: TicketTypeId(ticket_type_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRow {
    #[serde(default)]
    pub seats: Vec<Seat>,
}

/// Complete chart for one event: rows in display order plus the ticket types they reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingChart {
    #[serde(default)]
    pub seat_rows: Vec<SeatRow>,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
}

impl SeatingChart {
    /// Parse a chart from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::Parse`] if the JSON does not describe a chart.
    pub fn from_json(json: &str) -> Result<Self, SeatingError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn catalog(&self) -> TicketCatalog {
        TicketCatalog::from_types(self.ticket_types.iter().cloned())
    }

    /// Rows paired with their 1-based row number.
    pub fn numbered_rows(&self) -> impl Iterator<Item = (u32, &SeatRow)> {
        (1_u32..).zip(self.seat_rows.iter())
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seat_rows.iter().map(|row| row.seats.len()).sum()
    }
}

/// Event plus chart as bundled in a single data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSeating {
    pub event: crate::event::Event,
    pub seating: SeatingChart,
}

impl EventSeating {
    /// # Errors
    ///
    /// Returns [`SeatingError::Parse`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, SeatingError> {
        Ok(serde_json::from_str(json)?)
    }
}
