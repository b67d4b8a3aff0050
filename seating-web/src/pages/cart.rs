use crate::components::cart_summary::CartSummary;
use yew::prelude::*;

#[function_component(CartPage)]
pub fn cart_page() -> Html {
    html! {
        <main id="main" class="container mx-auto p-4">
            <CartSummary />
        </main>
    }
}
