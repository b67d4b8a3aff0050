//! Seating Core
//!
//! Platform-agnostic logic behind an event seating chart: seats, ticket types,
//! the ticket cart and the per-seat state a UI renders from. No browser or UI
//! dependencies.

pub mod cart;
pub mod data;
pub mod error;
pub mod event;
pub mod layout;
pub mod price;
pub mod seat_state;
pub mod seating;
pub mod ticket;

pub use cart::{Cart, CartItem, CartStore, CartTicket};
pub use data::{DataLoader, SeatingConfig};
pub use error::{CartError, SeatingError};
pub use event::{Event, EventId};
pub use layout::{DEFAULT_NARROW_BREAKPOINT_PX, PopupAnchor, SeatPresentation, Surface};
pub use price::{CurrencyFormat, PriceFormatter, SymbolPosition};
pub use seat_state::{RESERVED_BG_CLASS, SeatAction, SeatState, position_label};
pub use seating::{EventSeating, Seat, SeatId, SeatRow, SeatingChart};
pub use ticket::{TicketCatalog, TicketCategory, TicketType, TicketTypeId};
