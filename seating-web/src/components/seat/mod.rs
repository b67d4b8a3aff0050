//! A single seat of the chart: a coloured glyph plus a popup to add or remove its ticket.
//!
//! The popup is controlled by the parent through `open`, `on_toggle` and
//! `on_close`; the seat itself only derives what to show from the cart.

mod view;

use crate::a11y::set_status;
use crate::i18n;
use crate::state::{CartAction, use_cart, use_locale, use_surface};
use seating_core::{
    Cart, Event, Seat, SeatAction, SeatId, SeatPresentation, SeatState, TicketCatalog,
};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct SeatProps {
    pub event: Rc<Event>,
    pub seat: Seat,
    /// 1-based number of the row holding the seat.
    pub row_number: u32,
    pub ticket_types: Rc<TicketCatalog>,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub on_toggle: Callback<SeatId>,
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Forwarded to the glyph button.
    #[prop_or_default]
    pub glyph_ref: NodeRef,
}

impl PartialEq for SeatProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.event, &other.event)
            && Rc::ptr_eq(&self.ticket_types, &other.ticket_types)
            && self.seat == other.seat
            && self.row_number == other.row_number
            && self.open == other.open
            && self.on_toggle == other.on_toggle
            && self.on_close == other.on_close
            && self.id == other.id
            && self.class == other.class
            && self.glyph_ref == other.glyph_ref
    }
}

fn announcement(key: &str, position: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("position", position);
    i18n::tr(key, Some(&args))
}

#[function_component(SeatView)]
pub fn seat_view(props: &SeatProps) -> Html {
    let cart_ctx = use_cart();
    let surface = use_surface();
    // subscribes to language switches; labels below are translated at render
    let _lang = use_locale();

    let cart = cart_ctx
        .as_ref()
        .map_or_else(|| Rc::new(Cart::new()), |ctx| Rc::clone(&ctx.cart));
    let derived = use_memo(
        (
            cart,
            Rc::clone(&props.event),
            props.seat.clone(),
            props.row_number,
            Rc::clone(&props.ticket_types),
        ),
        |(cart, event, seat, row_number, catalog)| {
            let derived = SeatState::derive(&**cart, event, seat, *row_number, catalog);
            if let Err(err) = &derived {
                log::error!("cannot render seat: {err}");
            }
            derived
        },
    );
    let presentation = SeatPresentation::for_seat(surface, props.seat.place);

    let state: &SeatState = match &*derived {
        Ok(state) => state,
        Err(err) => return view::render_unavailable(props, &presentation, err),
    };

    let on_glyph_click = {
        let on_toggle = props.on_toggle.clone();
        let seat_id = props.seat.seat_id.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(seat_id.clone()))
    };

    let on_keydown = {
        let on_close = props.on_close.clone();
        let open = props.open;
        Callback::from(move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
                e.prevent_default();
            }
        })
    };

    let on_action = {
        let on_close = props.on_close.clone();
        let cart_ctx = cart_ctx.clone();
        let action = state.action();
        let position = state.position_label.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            let key = match action {
                SeatAction::Add(_) => "seat.added",
                SeatAction::Remove(_) => "seat.removed",
            };
            match &cart_ctx {
                Some(ctx) => {
                    ctx.dispatch(CartAction::from(action.clone()));
                    set_status(&announcement(key, &position));
                }
                None => log::warn!("seat {position} has no cart to update"),
            }
        })
    };

    let container_class = classes!(
        "dropdown",
        presentation.popup_anchor.class(),
        props.open.then_some("dropdown-open"),
        props.class.clone()
    );
    let glyph_class = classes!(
        "my-1",
        "text-white",
        "hover:cursor-pointer",
        presentation.glyph_class,
        state.glyph_bg_class()
    );
    let glyph_label = {
        let mut args = BTreeMap::new();
        args.insert("position", state.position_label.as_str());
        args.insert("ticket_type", state.ticket_type.name.as_str());
        i18n::tr("seat.glyph_label", Some(&args))
    };

    html! {
        <div id={props.id.clone()} class={container_class} onkeydown={on_keydown}>
            <button
                type="button"
                ref={props.glyph_ref.clone()}
                class={glyph_class}
                data-seat-id={props.seat.seat_id.to_string()}
                data-reserved={state.is_reserved.to_string()}
                aria-haspopup="dialog"
                aria-expanded={props.open.to_string()}
                aria-label={glyph_label}
                onclick={on_glyph_click}
            >
                <span class="text-xs font-medium">
                    { if presentation.show_place_label { props.seat.place.to_string() } else { String::new() } }
                </span>
            </button>
            if props.open {
                { view::render_popup(state, &presentation, on_action) }
            }
        </div>
    }
}
