use crate::components::seating_card::SeatingCard;
use seating_core::{Event, SeatingChart};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct SeatingPageProps {
    pub event: Rc<Event>,
    pub chart: Rc<SeatingChart>,
}

impl PartialEq for SeatingPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.event, &other.event) && Rc::ptr_eq(&self.chart, &other.chart)
    }
}

#[function_component(SeatingPage)]
pub fn seating_page(props: &SeatingPageProps) -> Html {
    html! {
        <main id="main" class="container mx-auto p-4">
            <SeatingCard event={Rc::clone(&props.event)} chart={Rc::clone(&props.chart)} />
        </main>
    }
}
