//! Cart panel: one line per reserved ticket, count, total and clear.

#[cfg(test)]
mod tests;

use crate::a11y::set_status;
use crate::components::button::Button;
use crate::components::daisy_ui::{DaisyColor, DaisySize};
use crate::i18n;
use crate::state::{CartAction, CartContext, use_cart, use_locale};
use seating_core::{CartItem, CartStore};
use std::collections::BTreeMap;
use yew::prelude::*;

pub(crate) fn count_label(count: usize) -> String {
    let count = count.to_string();
    let mut args = BTreeMap::new();
    args.insert("count", count.as_str());
    i18n::tr("cart.count", Some(&args))
}

fn render_line(item: &CartItem, cart: &CartContext) -> Html {
    let on_remove = {
        let cart = cart.clone();
        let seat_id = item.seat_id().clone();
        Callback::from(move |_: MouseEvent| cart.dispatch(CartAction::Remove(seat_id.clone())))
    };
    html! {
        <li key={item.seat_id().as_str()} class="cart-line flex items-center justify-between gap-4" data-seat-id={item.seat_id().to_string()}>
            <div class="flex flex-col">
                <span class="font-semibold">{ item.event_name.clone() }</span>
                <span class="text-sm">{ format!("{} · {}", item.tickets.ticket_type, item.seat_id()) }</span>
            </div>
            <span class="cart-line-price">{ i18n::fmt_currency(item.tickets.price_cents) }</span>
            <Button label={i18n::t("cart.remove")} color={DaisyColor::Error} size={DaisySize::Xs} onclick={on_remove} />
        </li>
    }
}

#[function_component(CartSummary)]
pub fn cart_summary() -> Html {
    let lang = use_locale();
    let Some(cart) = use_cart() else {
        log::warn!("cart summary rendered without a cart provider");
        return Html::default();
    };

    if cart.cart.is_empty() {
        return html! {
            <section {lang} class="card bg-base-200 p-4 cart-summary" aria-label={i18n::t("cart.title")}>
                <h2 class="card-title">{ i18n::t("cart.title") }</h2>
                <p class="cart-empty">{ i18n::t("cart.empty") }</p>
            </section>
        };
    }

    let on_clear = {
        let cart = cart.clone();
        Callback::from(move |_: MouseEvent| {
            cart.dispatch(CartAction::Clear);
            set_status(&i18n::t("cart.cleared"));
        })
    };

    html! {
        <section {lang} class="card bg-base-200 p-4 cart-summary" aria-label={i18n::t("cart.title")}>
            <h2 class="card-title">{ i18n::t("cart.title") }</h2>
            <p class="cart-count">{ count_label(cart.cart.len()) }</p>
            <ul class="flex flex-col gap-2">
                { for cart.cart.items().iter().map(|item| render_line(item, &cart)) }
            </ul>
            <div class="flex items-center justify-between pt-4">
                <span class="font-semibold">{ i18n::t("cart.total") }</span>
                <span class="cart-total font-semibold">{ i18n::fmt_currency(cart.cart.total_cents()) }</span>
            </div>
            <Button label={i18n::t("cart.clear")} color={DaisyColor::Neutral} onclick={on_clear} class={classes!("mt-2")} />
        </section>
    }
}
