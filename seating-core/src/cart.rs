//! Ticket cart and the store abstraction seats mutate it through
use crate::error::CartError;
use crate::event::{Event, EventId};
use crate::seating::{Seat, SeatId};
use crate::ticket::{TicketType, TicketTypeId};
use serde::{Deserialize, Serialize};

/// Ticket descriptor embedded in a cart item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTicket {
    /// Display name of the ticket type at the time it was added.
    pub ticket_type: String,
    /// Price in cents
    #[serde(rename = "price", with = "crate::price::amount_serde")]
    pub price_cents: i64,
    pub seat_id: SeatId,
    pub ticket_type_id: TicketTypeId,
}

/// A reserved ticket pending purchase, tied to exactly one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub event_id: EventId,
    pub event_name: String,
    pub tickets: CartTicket,
}

impl CartItem {
    /// Build the cart entry for `seat`, priced and named after `ticket_type`.
    #[must_use]
    pub fn for_seat(event: &Event, seat: &Seat, ticket_type: &TicketType) -> Self {
        Self {
            event_id: event.event_id.clone(),
            event_name: event.name_pub.clone(),
            tickets: CartTicket {
                ticket_type: ticket_type.name.clone(),
                price_cents: ticket_type.price_cents,
                seat_id: seat.seat_id.clone(),
                ticket_type_id: seat.ticket_type_id,
            },
        }
    }

    #[must_use]
    pub const fn seat_id(&self) -> &SeatId {
        &self.tickets.seat_id
    }
}

/// Shared cart collection a seat reads and mutates.
pub trait CartStore {
    fn items(&self) -> &[CartItem];

    /// Reserve a seat.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::AlreadyInCart`] if the item's seat is already reserved.
    fn add(&mut self, item: CartItem) -> Result<(), CartError>;

    /// Release a seat, returning the removed entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if the seat is not reserved.
    fn remove(&mut self, seat_id: &SeatId) -> Result<CartItem, CartError>;

    fn contains(&self, seat_id: &SeatId) -> bool {
        self.items().iter().any(|item| item.seat_id() == seat_id)
    }
}

/// Shopping cart keyed by seat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn find(&self, seat_id: &SeatId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.seat_id() == seat_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices in cents.
    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|item| item.tickets.price_cents).sum()
    }

    pub fn items_for_event<'a>(
        &'a self,
        event_id: &'a EventId,
    ) -> impl Iterator<Item = &'a CartItem> + 'a {
        self.items
            .iter()
            .filter(move |item| &item.event_id == event_id)
    }

    pub fn clear(&mut self) {
        log::debug!("clearing {} cart item(s)", self.items.len());
        self.items.clear();
    }
}

impl CartStore for Cart {
    fn items(&self) -> &[CartItem] {
        &self.items
    }

    fn contains(&self, seat_id: &SeatId) -> bool {
        self.find(seat_id).is_some()
    }

    fn add(&mut self, item: CartItem) -> Result<(), CartError> {
        if self.contains(item.seat_id()) {
            return Err(CartError::AlreadyInCart(item.seat_id().clone()));
        }
        log::debug!(
            "adding seat {} ({}) to cart",
            item.seat_id(),
            item.tickets.ticket_type
        );
        self.items.push(item);
        Ok(())
    }

    fn remove(&mut self, seat_id: &SeatId) -> Result<CartItem, CartError> {
        let idx = self
            .items
            .iter()
            .position(|item| item.seat_id() == seat_id)
            .ok_or_else(|| CartError::NotInCart(seat_id.clone()))?;
        log::debug!("removing seat {seat_id} from cart");
        Ok(self.items.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(event: &str, seat: &str, price_cents: i64) -> CartItem {
        let event = Event::new(event, "Gala");
        let seat = Seat::new(seat, 1, 2);
        CartItem::for_seat(&event, &seat, &TicketType::new(2, "Regular ticket", price_cents))
    }

    #[test]
    fn totals_and_event_filter() {
        let mut cart = Cart::new();
        cart.add(item("e1", "A1", 5_000)).unwrap();
        cart.add(item("e1", "A2", 5_000)).unwrap();
        cart.add(item("e2", "A1x", 2_500)).unwrap();
        assert_eq!(cart.total_cents(), 12_500);
        assert_eq!(cart.items_for_event(&EventId::from("e1")).count(), 2);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn serializes_with_original_field_names() {
        let json = serde_json::to_value(item("e1", "A1", 5_000)).unwrap();
        assert_eq!(json["eventId"], "e1");
        assert_eq!(json["eventName"], "Gala");
        assert_eq!(json["tickets"]["ticketType"], "Regular ticket");
        assert_eq!(json["tickets"]["price"], 50);
        assert_eq!(json["tickets"]["seatId"], "A1");
        assert_eq!(json["tickets"]["ticketTypeId"], 2);
    }

    #[test]
    fn fractional_price_survives_round_trip() {
        let original = item("e1", "A1", 1_250);
        let json = serde_json::to_value(&original).unwrap();
        assert_eq!(json["tickets"]["price"], 12.5);
        let back: CartItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn find_returns_entry_by_seat() {
        let mut cart = Cart::new();
        cart.add(item("e1", "A1", 5_000)).unwrap();
        assert!(cart.find(&SeatId::from("A1")).is_some());
        assert!(cart.find(&SeatId::from("A2")).is_none());
    }
}
