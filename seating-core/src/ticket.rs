//! Ticket types and the keyed catalog seats resolve against.
use crate::error::SeatingError;
use crate::seating::Seat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketTypeId(pub u32);

impl fmt::Display for TicketTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasable ticket category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    /// Unit price in cents to avoid floating-point issues
    #[serde(rename = "price", with = "crate::price::amount_serde")]
    pub price_cents: i64,
}

impl TicketType {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, price_cents: i64) -> Self {
        Self {
            id: TicketTypeId(id),
            name: name.into(),
            price_cents,
        }
    }

    #[must_use]
    pub fn category(&self) -> TicketCategory {
        TicketCategory::from_name(&self.name)
    }
}

/// Colour family a ticket type is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketCategory {
    Vip,
    Regular,
}

impl TicketCategory {
    /// Anything whose name mentions "VIP" (any case) is VIP; the rest is regular seating.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.to_ascii_lowercase().contains("vip") {
            Self::Vip
        } else {
            Self::Regular
        }
    }

    #[must_use]
    pub const fn bg_class(self) -> &'static str {
        match self {
            Self::Vip => "bg-vipTicket-100",
            Self::Regular => "bg-regularTicket-100",
        }
    }
}

/// Ticket types keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketCatalog {
    types: BTreeMap<TicketTypeId, TicketType>,
}

impl TicketCatalog {
    /// Build a catalog from an ordered list. When an identifier repeats, the first entry wins.
    #[must_use]
    pub fn from_types(types: impl IntoIterator<Item = TicketType>) -> Self {
        let mut map = BTreeMap::new();
        for ticket_type in types {
            map.entry(ticket_type.id).or_insert(ticket_type);
        }
        Self { types: map }
    }

    #[must_use]
    pub fn get(&self, id: TicketTypeId) -> Option<&TicketType> {
        self.types.get(&id)
    }

    /// Resolve the ticket type a seat is sold as.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::UnknownTicketType`] when the seat's ticket type is not in the catalog.
    pub fn resolve(&self, seat: &Seat) -> Result<&TicketType, SeatingError> {
        self.get(seat.ticket_type_id)
            .ok_or_else(|| SeatingError::UnknownTicketType {
                seat_id: seat.seat_id.clone(),
                ticket_type_id: seat.ticket_type_id,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TicketType> {
        self.types.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TicketType> for TicketCatalog {
    fn from_iter<I: IntoIterator<Item = TicketType>>(iter: I) -> Self {
        Self::from_types(iter)
    }
}
