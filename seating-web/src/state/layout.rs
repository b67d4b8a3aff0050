//! Viewport width class, shared through context.
use seating_core::Surface;
use yew::prelude::*;

fn measure_surface(breakpoint_px: f64) -> Surface {
    crate::dom::viewport_width().map_or(Surface::Wide, |width| {
        Surface::from_width(width, breakpoint_px)
    })
}

#[derive(Properties, PartialEq)]
pub struct LayoutProviderProps {
    /// Pins the surface instead of measuring the viewport.
    #[prop_or_default]
    pub surface: Option<Surface>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LayoutProvider)]
pub fn layout_provider(props: &LayoutProviderProps) -> Html {
    let breakpoint_px = crate::data::seating_config().narrow_breakpoint_px;
    let measured = use_state(move || measure_surface(breakpoint_px));

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let measured = measured.clone();
        use_effect_with((), move |()| {
            let listener =
                Closure::<dyn Fn()>::new(move || measured.set(measure_surface(breakpoint_px)));
            let window = crate::dom::window();
            if let Some(win) = &window {
                if let Err(err) = win
                    .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                {
                    crate::dom::console_error(&format!(
                        "Failed to watch viewport width: {}",
                        crate::dom::js_error_message(&err)
                    ));
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let surface = props.surface.unwrap_or(*measured);
    html! {
        <ContextProvider<Surface> context={surface}>
            { for props.children.iter() }
        </ContextProvider<Surface>>
    }
}

/// Surface from the nearest [`LayoutProvider`]; wide when there is none.
#[hook]
pub fn use_surface() -> Surface {
    use_context::<Surface>().unwrap_or_default()
}
