use crate::app::AppData;
use crate::pages::cart::CartPage;
use crate::pages::not_found::NotFound;
use crate::pages::seating::SeatingPage;
use crate::router::Route;
use std::rc::Rc;
use yew::prelude::*;

/// Page for `route`. Without loaded data the seating page degrades to the not-found view.
pub fn render_route(route: &Route, data: Option<&AppData>, on_go_home: Callback<()>) -> Html {
    match (route, data) {
        (Route::Seating, Some(data)) => html! {
            <SeatingPage event={Rc::clone(&data.event)} chart={Rc::clone(&data.chart)} />
        },
        (Route::Cart, _) => html! { <CartPage /> },
        (Route::Seating, None) | (Route::NotFound, _) => html! { <NotFound {on_go_home} /> },
    }
}
