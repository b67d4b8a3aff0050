use seating_core::PriceFormatter;
#[cfg(target_arch = "wasm32")]
use {
    crate::i18n::bundle::with_bundle,
    crate::i18n::locales::intl_tag,
    js_sys::{Intl, Object, Reflect},
    wasm_bindgen::JsValue,
};

/// Format a price in cents in the configured currency.
///
/// In the browser this goes through `Intl.NumberFormat` for the active
/// locale; elsewhere (and if `Intl` yields nothing) the configured
/// [`seating_core::CurrencyFormat`] is used.
#[must_use]
pub fn fmt_currency(cents: i64) -> String {
    let config = crate::data::seating_config();
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(text) = intl_currency(cents, &config.currency.code) {
            return text;
        }
    }
    config.currency.format(cents)
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::cast_precision_loss)]
fn intl_currency(cents: i64, code: &str) -> Option<String> {
    let amount = cents as f64 / 100.0;
    with_bundle(|bundle| {
        let locales = js_sys::Array::of1(&JsValue::from_str(intl_tag(&bundle.lang)));
        let opts = Object::new();
        Reflect::set(&opts, &"style".into(), &"currency".into()).ok()?;
        Reflect::set(&opts, &"currency".into(), &JsValue::from_str(code)).ok()?;
        let nf = Intl::NumberFormat::new(&locales, &opts);
        nf.format()
            .call1(&nf, &JsValue::from_f64(amount))
            .ok()
            .and_then(|v| v.as_string())
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_formatting_uses_configured_currency() {
        assert_eq!(fmt_currency(123_450), "$1,234.50");
        assert_eq!(fmt_currency(-99), "-$0.99");
    }
}
