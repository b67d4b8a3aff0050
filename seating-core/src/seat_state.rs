//! Per-seat derived state: reservation, resolved ticket type and the cart entry a seat would add.
use crate::cart::{CartItem, CartStore};
use crate::error::{CartError, SeatingError};
use crate::event::Event;
use crate::seating::{Seat, SeatId};
use crate::ticket::{TicketCatalog, TicketType};

/// Glyph background for seats already in the cart.
pub const RESERVED_BG_CLASS: &str = "bg-info";

/// `"{row}-{place}"`, the label shown in a seat's popup.
#[must_use]
pub fn position_label(row_number: u32, place: u32) -> String {
    format!("{row_number}-{place}")
}

/// Everything a seat renders from, computed once per change of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatState {
    pub seat_id: SeatId,
    pub is_reserved: bool,
    pub ticket_type: TicketType,
    pub cart_payload: CartItem,
    pub position_label: String,
}

impl SeatState {
    /// # Errors
    ///
    /// Returns [`SeatingError::UnknownTicketType`] if the seat's ticket type is missing from `catalog`.
    pub fn derive(
        cart: &impl CartStore,
        event: &Event,
        seat: &Seat,
        row_number: u32,
        catalog: &TicketCatalog,
    ) -> Result<Self, SeatingError> {
        let ticket_type = catalog.resolve(seat)?;
        Ok(Self {
            seat_id: seat.seat_id.clone(),
            is_reserved: cart.contains(&seat.seat_id),
            cart_payload: CartItem::for_seat(event, seat, ticket_type),
            ticket_type: ticket_type.clone(),
            position_label: position_label(row_number, seat.place),
        })
    }

    /// The single action the popup offers.
    #[must_use]
    pub fn action(&self) -> SeatAction {
        if self.is_reserved {
            SeatAction::Remove(self.seat_id.clone())
        } else {
            SeatAction::Add(self.cart_payload.clone())
        }
    }

    #[must_use]
    pub fn glyph_bg_class(&self) -> &'static str {
        if self.is_reserved {
            RESERVED_BG_CLASS
        } else {
            self.ticket_type.category().bg_class()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatAction {
    Add(CartItem),
    Remove(SeatId),
}

impl SeatAction {
    /// i18n key of the button label.
    #[must_use]
    pub const fn label_key(&self) -> &'static str {
        match self {
            Self::Add(_) => "seat.add_to_cart",
            Self::Remove(_) => "seat.remove_from_cart",
        }
    }

    /// # Errors
    ///
    /// Propagates the store's rejection of a duplicate add or an unknown remove.
    pub fn apply(self, store: &mut impl CartStore) -> Result<(), CartError> {
        match self {
            Self::Add(item) => store.add(item),
            Self::Remove(seat_id) => store.remove(&seat_id).map(|_| ()),
        }
    }
}
