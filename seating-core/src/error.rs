use crate::seating::SeatId;
use crate::ticket::TicketTypeId;
use thiserror::Error;

/// Rejections raised by a [`crate::CartStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("seat {0} is already in the cart")]
    AlreadyInCart(SeatId),
    #[error("seat {0} is not in the cart")]
    NotInCart(SeatId),
}

#[derive(Debug, Error)]
pub enum SeatingError {
    #[error("seat {seat_id} references unknown ticket type {ticket_type_id}")]
    UnknownTicketType {
        seat_id: SeatId,
        ticket_type_id: TicketTypeId,
    },
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Cart(#[from] CartError),
}
