//! Shared cart store: a `use_reducer` handle provided through context.
use seating_core::{Cart, CartItem, CartStore, SeatAction, SeatId};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(CartItem),
    Remove(SeatId),
    Clear,
}

impl From<SeatAction> for CartAction {
    fn from(action: SeatAction) -> Self {
        match action {
            SeatAction::Add(item) => Self::Add(item),
            SeatAction::Remove(seat_id) => Self::Remove(seat_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    pub cart: Rc<Cart>,
}

impl CartState {
    #[must_use]
    pub fn new(cart: Cart) -> Self {
        Self {
            cart: Rc::new(cart),
        }
    }
}

impl Reducible for CartState {
    type Action = CartAction;

    /// Rejected actions (duplicate add, unknown remove) hand back the current
    /// state untouched.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut cart = (*self.cart).clone();
        let outcome = match action {
            CartAction::Add(item) => cart.add(item),
            CartAction::Remove(seat_id) => cart.remove(&seat_id).map(|_| ()),
            CartAction::Clear if cart.is_empty() => return self,
            CartAction::Clear => {
                cart.clear();
                Ok(())
            }
        };
        match outcome {
            Ok(()) => Rc::new(Self::new(cart)),
            Err(err) => {
                log::warn!("cart action rejected: {err}");
                self
            }
        }
    }
}

pub type CartContext = UseReducerHandle<CartState>;

#[derive(Properties, PartialEq)]
pub struct CartProviderProps {
    /// Contents the cart starts with.
    #[prop_or_default]
    pub initial: Cart,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CartProvider)]
pub fn cart_provider(props: &CartProviderProps) -> Html {
    let initial = props.initial.clone();
    let cart = use_reducer(move || CartState::new(initial));
    html! {
        <ContextProvider<CartContext> context={cart}>
            { for props.children.iter() }
        </ContextProvider<CartContext>>
    }
}

/// The cart from the nearest [`CartProvider`], if any.
#[hook]
pub fn use_cart() -> Option<CartContext> {
    use_context::<CartContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seating_core::{Event, Seat, TicketType};

    fn item(seat: &str) -> CartItem {
        CartItem::for_seat(
            &Event::new("evt", "Gala"),
            &Seat::new(seat, 1, 1),
            &TicketType::new(1, "VIP ticket", 15_000),
        )
    }

    #[test]
    fn add_then_remove_round_trips_through_reducer() {
        let state = Rc::new(CartState::default());
        let state = state.reduce(CartAction::Add(item("A1")));
        assert_eq!(state.cart.len(), 1);
        let state = state.reduce(CartAction::Remove(SeatId::from("A1")));
        assert!(state.cart.is_empty());
    }

    #[test]
    fn rejected_actions_keep_the_same_state() {
        let state = Rc::new(CartState::default()).reduce(CartAction::Add(item("A1")));
        let dup = Rc::clone(&state).reduce(CartAction::Add(item("A1")));
        assert!(Rc::ptr_eq(&state, &dup));
        let missing = Rc::clone(&state).reduce(CartAction::Remove(SeatId::from("Z9")));
        assert!(Rc::ptr_eq(&state, &missing));
    }

    #[test]
    fn clear_empties_cart() {
        let state = Rc::new(CartState::default())
            .reduce(CartAction::Add(item("A1")))
            .reduce(CartAction::Add(item("A2")))
            .reduce(CartAction::Clear);
        assert!(state.cart.is_empty());
        let again = Rc::clone(&state).reduce(CartAction::Clear);
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn seat_actions_map_onto_cart_actions() {
        assert_eq!(
            CartAction::from(SeatAction::Remove(SeatId::from("B2"))),
            CartAction::Remove(SeatId::from("B2"))
        );
        assert_eq!(
            CartAction::from(SeatAction::Add(item("B3"))),
            CartAction::Add(item("B3"))
        );
    }
}
