use futures::executor::block_on;
use seating_core::{Cart, CartItem, CartStore, Event, Seat, Surface, TicketType};
use seating_web::app::view::render_route;
use seating_web::app::{AppData, load_bundled};
use seating_web::components::header::{Header, Props as HeaderProps};
use seating_web::pages::not_found::{NotFound, Props as NotFoundProps};
use seating_web::pages::seating::{SeatingPage, SeatingPageProps};
use seating_web::router::Route;
use seating_web::state::{CartProvider, LayoutProvider};
use std::rc::Rc;
use yew::prelude::*;
use yew::LocalServerRenderer;

fn bundled() -> AppData {
    load_bundled().expect("bundled seating data")
}

fn cart_with(seats: &[(&str, u32)]) -> Cart {
    let event = Event::new("evt-2026-autumn-gala", "Autumn Gala Night");
    let vip = TicketType::new(1, "VIP ticket", 15_000);
    let mut cart = Cart::new();
    for (seat_id, place) in seats {
        cart.add(CartItem::for_seat(&event, &Seat::new(*seat_id, *place, 1), &vip))
            .expect("unique seat");
    }
    cart
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    cart: Cart,
    route: Route,
    data: Option<AppData>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    html! {
        <CartProvider initial={props.cart.clone()}>
            <LayoutProvider surface={Some(Surface::Wide)}>
                { render_route(&props.route, props.data.as_ref(), Callback::noop()) }
            </LayoutProvider>
        </CartProvider>
    }
}

fn render_shell(cart: Cart, route: Route, data: Option<AppData>) -> String {
    seating_web::i18n::set_lang("en");
    block_on(LocalServerRenderer::<Shell>::with_props(ShellProps { cart, route, data }).render())
}

#[test]
fn header_renders_navigation_and_cart_badge() {
    seating_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<Header>::with_props(HeaderProps {
            cart_count: 3,
            current_lang: "en".to_string(),
            on_lang_change: Callback::noop(),
            on_open_seating: Callback::noop(),
            on_open_cart: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("nav-seating"));
    assert!(html.contains("nav-cart"));
    assert!(html.contains("cart-count"));
    assert!(html.contains("lang-select"));
    assert!(html.contains("Deutsch"));
}

#[test]
fn not_found_page_offers_way_back() {
    seating_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<NotFound>::with_props(NotFoundProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to seating"));
}

#[test]
fn seating_route_renders_every_bundled_seat() {
    let data = bundled();
    let html = render_shell(Cart::new(), Route::Seating, Some(data));
    assert!(html.contains("Autumn Gala Night"));
    assert_eq!(html.matches("data-seat-id=").count(), 48);
    assert_eq!(html.matches("data-row=").count(), 6);
    assert!(!html.contains("dropdown-open"));
}

#[test]
fn seating_route_marks_cart_seats_reserved() {
    let data = bundled();
    let html = render_shell(cart_with(&[("A1", 1), ("A2", 2)]), Route::Seating, Some(data));
    assert_eq!(html.matches("data-reserved=\"true\"").count(), 2);
    // two reserved glyphs plus the legend swatch
    assert_eq!(html.matches("bg-info").count(), 3);
}

#[test]
fn seating_route_without_data_falls_back_to_not_found() {
    let html = render_shell(Cart::new(), Route::Seating, None);
    assert!(html.contains("Page not found"));
}

#[test]
fn cart_route_lists_reserved_tickets_and_total() {
    let html = render_shell(cart_with(&[("A1", 1), ("A2", 2)]), Route::Cart, None);
    assert!(html.contains("2 tickets"));
    assert!(html.contains("$300.00"));
    assert_eq!(html.matches("cart-line ").count(), 2);
}

#[test]
fn cart_route_shows_empty_message() {
    let html = render_shell(Cart::new(), Route::Cart, None);
    assert!(html.contains("Your cart is empty."));
}

#[test]
fn seating_page_renders_on_narrow_surface_without_place_labels() {
    #[function_component(NarrowPage)]
    fn narrow_page(props: &SeatingPageProps) -> Html {
        html! {
            <CartProvider>
                <LayoutProvider surface={Some(Surface::Narrow)}>
                    <SeatingPage ..props.clone() />
                </LayoutProvider>
            </CartProvider>
        }
    }

    seating_web::i18n::set_lang("en");
    let data = bundled();
    let html = block_on(
        LocalServerRenderer::<NarrowPage>::with_props(SeatingPageProps {
            event: Rc::clone(&data.event),
            chart: Rc::clone(&data.chart),
        })
        .render(),
    );
    assert!(html.contains("rounded-full"));
    assert!(!html.contains("rounded-xl"));
}
