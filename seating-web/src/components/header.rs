use crate::i18n::{locales, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cart_count: usize,
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    pub on_open_seating: Callback<()>,
    pub on_open_cart: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(sel.value());
            }
        })
    };
    let open_seating = {
        let cb = p.on_open_seating.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_cart = {
        let cb = p.on_open_cart.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner" class="navbar bg-base-100">
            <a href="#main" class="sr-only">{ t("app.skip_to_content") }</a>
            <div class="navbar-start gap-2">
                <span class="text-xl font-bold">{ t("app.title") }</span>
                <button id="nav-seating" class="btn btn-ghost btn-sm" onclick={open_seating}>{ t("nav.seating") }</button>
            </div>
            <div class="navbar-end gap-2">
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <select id="lang-select" class="select select-sm" onchange={on_change} aria-label={t("nav.language")}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == p.current_lang}>{ meta.name }</option>
                    }) }
                </select>
                <button id="nav-cart" class="btn btn-primary btn-sm" onclick={open_cart}>
                    { t("nav.cart") }
                    <span class="badge badge-sm cart-count">{ p.cart_count }</span>
                </button>
            </div>
        </header>
    }
}
