use seating_core::{Event, Seat, SeatingChart, TicketCatalog, TicketType};
use seating_web::components::seat::SeatProps;
use seating_web::components::seating_card::SeatingCardProps;
use seating_web::pages::seating::SeatingPageProps;
use std::rc::Rc;
use yew::{Callback, Classes, NodeRef};

fn event() -> Rc<Event> {
    Rc::new(Event::new("evt-1", "Autumn Gala"))
}

fn catalog() -> Rc<TicketCatalog> {
    Rc::new(TicketCatalog::from_types([TicketType::new(1, "VIP ticket", 15_000)]))
}

fn chart() -> Rc<SeatingChart> {
    Rc::new(SeatingChart::default())
}

#[test]
fn seat_props_compare_shared_inputs_by_pointer() {
    let on_toggle = Callback::noop();
    let on_close = Callback::noop();
    let base = SeatProps {
        event: event(),
        seat: Seat::new("A1", 1, 1),
        row_number: 1,
        ticket_types: catalog(),
        open: false,
        on_toggle: on_toggle.clone(),
        on_close: on_close.clone(),
        id: None,
        class: Classes::default(),
        glyph_ref: NodeRef::default(),
    };
    assert!(base == base.clone());

    let rebuilt_event = SeatProps {
        event: Rc::new((*base.event).clone()),
        ..base.clone()
    };
    assert!(base != rebuilt_event);

    let rebuilt_catalog = SeatProps {
        ticket_types: Rc::new((*base.ticket_types).clone()),
        ..base.clone()
    };
    assert!(base != rebuilt_catalog);

    let opened = SeatProps {
        open: true,
        ..base.clone()
    };
    assert!(base != opened);

    let other_seat = SeatProps {
        seat: Seat::new("A2", 2, 1),
        ..base.clone()
    };
    assert!(base != other_seat);
}

#[test]
fn seating_card_props_compare_by_pointer() {
    let props = SeatingCardProps {
        event: event(),
        chart: chart(),
    };
    assert!(props == props.clone());
    let rebuilt = SeatingCardProps {
        event: Rc::clone(&props.event),
        chart: Rc::new((*props.chart).clone()),
    };
    assert!(props != rebuilt);
}

#[test]
fn seating_page_props_compare_by_pointer() {
    let props = SeatingPageProps {
        event: event(),
        chart: chart(),
    };
    assert!(props == props.clone());
    let rebuilt = SeatingPageProps {
        event: Rc::new((*props.event).clone()),
        chart: Rc::clone(&props.chart),
    };
    assert!(props != rebuilt);
}
