//! Active UI language, shared through context so translated text re-renders on change.
use crate::i18n;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct LocaleContext {
    pub lang: String,
    /// Switch language; unsupported codes are ignored.
    pub set_lang: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    /// Language to start with instead of the saved one.
    #[prop_or_default]
    pub lang: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let initial = props.lang.clone();
    let lang = use_state(move || {
        if let Some(code) = initial {
            i18n::set_lang(&code);
        }
        i18n::current_lang()
    });

    let set_lang = use_callback(lang.setter(), |code: String, setter| {
        i18n::set_lang(&code);
        setter.set(i18n::current_lang());
    });
    let context = LocaleContext {
        lang: (*lang).clone(),
        set_lang,
    };
    html! {
        <ContextProvider<LocaleContext> {context}>
            { for props.children.iter() }
        </ContextProvider<LocaleContext>>
    }
}

/// Language from the nearest [`LocaleProvider`]. Subscribes the calling
/// component to language switches.
#[hook]
pub fn use_locale() -> String {
    use_context::<LocaleContext>().map_or_else(i18n::current_lang, |ctx| ctx.lang)
}
