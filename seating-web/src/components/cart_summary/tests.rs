use super::*;
use crate::state::CartProvider;
use futures::executor::block_on;
use seating_core::{Cart, Event, Seat, TicketType};
use yew::LocalServerRenderer;

#[derive(Properties, PartialEq)]
struct HarnessProps {
    cart: Cart,
}

#[function_component(Harness)]
fn harness(p: &HarnessProps) -> Html {
    html! {
        <CartProvider initial={p.cart.clone()}>
            <CartSummary />
        </CartProvider>
    }
}

fn cart_with(seats: &[(&str, u32)]) -> Cart {
    let event = Event::new("evt", "Autumn Gala");
    let vip = TicketType::new(1, "VIP ticket", 15_000);
    let regular = TicketType::new(2, "Regular ticket", 5_500);
    let mut cart = Cart::new();
    for (seat_id, type_id) in seats {
        let seat = Seat::new(*seat_id, 1, *type_id);
        let ticket_type = if *type_id == 1 { &vip } else { &regular };
        cart.add(CartItem::for_seat(&event, &seat, ticket_type)).unwrap();
    }
    cart
}

fn render(cart: Cart) -> String {
    crate::i18n::set_lang("en");
    block_on(LocalServerRenderer::<Harness>::with_props(HarnessProps { cart }).render())
}

#[test]
fn empty_cart_shows_empty_state() {
    let html = render(Cart::new());
    assert!(html.contains("Your cart is empty."), "{html}");
    assert!(!html.contains("cart-total"), "{html}");
}

#[test]
fn lines_count_and_total_render() {
    let html = render(cart_with(&[("A1", 1), ("B4", 2)]));
    assert!(html.contains("2 tickets"), "{html}");
    assert!(html.contains("data-seat-id=\"A1\""), "{html}");
    assert!(html.contains("data-seat-id=\"B4\""), "{html}");
    assert!(html.contains("$205.00"), "total: {html}");
    assert!(html.contains("Clear cart"), "{html}");
}

#[test]
fn count_label_uses_plural_forms() {
    crate::i18n::set_lang("en");
    assert_eq!(count_label(1), "1 ticket");
    assert_eq!(count_label(4), "4 tickets");
}

#[test]
fn summary_without_provider_renders_nothing() {
    let html = block_on(LocalServerRenderer::<CartSummary>::new().render());
    assert!(!html.contains("cart-summary"), "{html}");
}
