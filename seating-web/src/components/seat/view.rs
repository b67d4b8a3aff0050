use super::SeatProps;
use crate::components::button::Button;
use crate::components::daisy_ui::DaisyColor;
use crate::i18n;
use seating_core::{SeatAction, SeatPresentation, SeatState, SeatingError};
use std::collections::BTreeMap;
use yew::prelude::*;

fn detail_line(icon: &'static str, label: String, value: String, value_class: &'static str) -> Html {
    html! {
        <div class="flex gap-2 text-sm font-medium">
            <span class={classes!("icon", icon)} aria-hidden="true"></span>
            <span class="sr-only">{ label }</span>
            <p class={value_class}>{ value }</p>
        </div>
    }
}

pub(super) fn render_popup(
    state: &SeatState,
    presentation: &SeatPresentation,
    on_action: Callback<MouseEvent>,
) -> Html {
    let action = state.action();
    let color = match action {
        SeatAction::Add(_) => DaisyColor::Success,
        SeatAction::Remove(_) => DaisyColor::Error,
    };
    let card_class = classes!(
        "card",
        "dropdown-content",
        "card-compact",
        "z-[1]",
        "bg-neutral",
        "p-2",
        "shadow",
        presentation.popup_width_class
    );

    html! {
        <div class={card_class} role="dialog" aria-label={state.position_label.clone()}>
            <div class="flex flex-col gap-2 pb-4 pt-2">
                <div class="flex gap-2 font-semibold">
                    <span class="icon icon-ticket" aria-hidden="true"></span>
                    <span class="sr-only">{ i18n::t("seat.ticket_type") }</span>
                    <p class="seat-ticket-type">{ state.ticket_type.name.clone() }</p>
                </div>
                { detail_line("icon-coins", i18n::t("seat.price"), i18n::fmt_currency(state.ticket_type.price_cents), "seat-price") }
                { detail_line("icon-map-pin", i18n::t("seat.position"), state.position_label.clone(), "seat-position") }
            </div>
            <div class="flex flex-col">
                <Button label={i18n::t(action.label_key())} {color} onclick={on_action} />
            </div>
        </div>
    }
}

/// Disabled glyph for a seat whose ticket type cannot be resolved.
pub(super) fn render_unavailable(
    props: &SeatProps,
    presentation: &SeatPresentation,
    err: &SeatingError,
) -> Html {
    log::debug!("seat {} unavailable: {err}", props.seat.seat_id);
    let seat = props.seat.seat_id.to_string();
    let label = {
        let mut args = BTreeMap::new();
        args.insert("seat", seat.as_str());
        i18n::tr("seat.unavailable", Some(&args))
    };
    html! {
        <div id={props.id.clone()} class={classes!("dropdown", props.class.clone())}>
            <button
                type="button"
                ref={props.glyph_ref.clone()}
                class={classes!("my-1", "bg-base-300", "cursor-not-allowed", presentation.glyph_class)}
                data-seat-id={seat.clone()}
                aria-label={label}
                disabled=true
            >
                <span class="text-xs font-medium">
                    { if presentation.show_place_label { props.seat.place.to_string() } else { String::new() } }
                </span>
            </button>
        </div>
    }
}
