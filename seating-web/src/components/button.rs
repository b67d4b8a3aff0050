use crate::components::daisy_ui::{DaisyColor, DaisySize, class_list};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub color: DaisyColor,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let mut class = class_list(&["btn"], &p.class);
    class.push(p.color.class("btn"));
    class.push(p.size.class("btn"));
    html! {
        <button type="button" {class} disabled={p.disabled} onclick={p.onclick.clone()}>
            { p.label.clone() }
        </button>
    }
}
