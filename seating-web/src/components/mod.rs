pub mod button;
pub mod cart_summary;
pub mod daisy_ui;
pub mod header;
pub mod seat;
pub mod seating_card;
