//! Seating chart for one event. Owns which seat's popup is open.


use crate::components::cart_summary::count_label;
use crate::components::seat::SeatView;
use crate::i18n;
use crate::state::{use_cart, use_locale};
use seating_core::{Event, RESERVED_BG_CLASS, SeatId, SeatingChart, TicketCatalog};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct SeatingCardProps {
    pub event: Rc<Event>,
    pub chart: Rc<SeatingChart>,
}

impl PartialEq for SeatingCardProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.event, &other.event) && Rc::ptr_eq(&self.chart, &other.chart)
    }
}

/// Clicking the open seat closes it; clicking any other seat moves the popup there.
pub(crate) fn next_open_seat(current: Option<&SeatId>, clicked: SeatId) -> Option<SeatId> {
    if current == Some(&clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn render_legend(catalog: &TicketCatalog) -> Html {
    html! {
        <ul class="seat-legend flex flex-wrap gap-4 text-sm" aria-label={i18n::t("seating.legend")}>
            { for catalog.iter().map(|ticket_type| html! {
                <li key={ticket_type.id.to_string()} class="flex items-center gap-2">
                    <span class={classes!("inline-block", "size-3", "rounded-full", ticket_type.category().bg_class())} aria-hidden="true"></span>
                    <span>{ ticket_type.name.clone() }</span>
                    <span class="muted">{ i18n::fmt_currency(ticket_type.price_cents) }</span>
                </li>
            }) }
            <li class="flex items-center gap-2">
                <span class={classes!("inline-block", "size-3", "rounded-full", RESERVED_BG_CLASS)} aria-hidden="true"></span>
                <span>{ i18n::t("seating.in_cart") }</span>
            </li>
        </ul>
    }
}

#[function_component(SeatingCard)]
pub fn seating_card(props: &SeatingCardProps) -> Html {
    let lang = use_locale();
    let in_cart = use_cart().map_or(0, |cart| {
        cart.cart.items_for_event(&props.event.event_id).count()
    });
    let open_seat = use_state(|| None::<SeatId>);
    let catalog = use_memo(Rc::clone(&props.chart), |chart| chart.catalog());

    let on_toggle = {
        let open_seat = open_seat.clone();
        Callback::from(move |clicked: SeatId| {
            open_seat.set(next_open_seat((*open_seat).as_ref(), clicked));
        })
    };
    let on_close = {
        let open_seat = open_seat.clone();
        Callback::from(move |()| open_seat.set(None))
    };

    let rows = props.chart.numbered_rows().map(|(row_number, row)| {
        let row_label = {
            let number = row_number.to_string();
            let mut args = BTreeMap::new();
            args.insert("row", number.as_str());
            i18n::tr("seating.row", Some(&args))
        };
        html! {
            <div key={row_number} class="seat-row flex items-center gap-1" role="group" aria-label={row_label} data-row={row_number.to_string()}>
                <span class="row-number w-6 text-xs text-right" aria-hidden="true">{ row_number }</span>
                { for row.seats.iter().map(|seat| html! {
                    <SeatView
                        key={seat.seat_id.as_str()}
                        event={Rc::clone(&props.event)}
                        seat={seat.clone()}
                        {row_number}
                        ticket_types={Rc::clone(&catalog)}
                        open={(*open_seat).as_ref() == Some(&seat.seat_id)}
                        on_toggle={on_toggle.clone()}
                        on_close={on_close.clone()}
                    />
                }) }
            </div>
        }
    });

    html! {
        <section {lang} class="card bg-base-200 p-4 shadow seating-card" aria-label={i18n::t("seating.title")}>
            <h2 class="card-title">{ props.event.name_pub.clone() }</h2>
            <p class="muted">{ i18n::t("seating.title") }</p>
            if in_cart > 0 {
                <p class="seating-cart-count badge badge-info">{ count_label(in_cart) }</p>
            }
            <div class="seat-rows flex flex-col gap-1">
                { for rows }
            </div>
            { render_legend(&catalog) }
        </section>
    }
}
