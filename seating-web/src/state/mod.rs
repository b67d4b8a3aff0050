pub mod cart;
pub mod layout;
pub mod locale;

pub use cart::{CartAction, CartContext, CartProvider, CartState, use_cart};
pub use layout::{LayoutProvider, use_surface};
pub use locale::{LocaleContext, LocaleProvider, use_locale};
