#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod view;

pub use bootstrap::{AppData, load_app_data, load_bundled};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <crate::state::LocaleProvider>
                <crate::state::CartProvider>
                    <crate::state::LayoutProvider>
                        <AppInner />
                    </crate::state::LayoutProvider>
                </crate::state::CartProvider>
            </crate::state::LocaleProvider>
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let data = use_memo((), |()| load_bundled());
    let (current_lang, on_lang_change) = use_context::<crate::state::LocaleContext>()
        .map_or_else(
            || (crate::i18n::current_lang(), Callback::noop()),
            |ctx| (ctx.lang, ctx.set_lang),
        );
    let cart_count = crate::state::use_cart().map_or(0, |cart| cart.cart.len());
    let navigator = use_navigator();

    let go = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(nav) = &navigator {
                nav.push(&route);
            }
        })
    };

    let header = html! {
        <crate::components::header::Header
            {cart_count}
            {current_lang}
            {on_lang_change}
            on_open_seating={go(Route::Seating)}
            on_open_cart={go(Route::Cart)}
        />
    };
    let on_go_home = go(Route::Seating);
    let render = move |route: Route| view::render_route(&route, (*data).as_ref(), on_go_home.clone());

    html! {
        <>
            <style>{ crate::a11y::visible_focus_css() }</style>
            { header }
            <div id={crate::a11y::STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
            <Switch<Route> {render} />
        </>
    }
}
