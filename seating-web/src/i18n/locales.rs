use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    /// BCP 47 tag handed to `Intl` for number formatting.
    pub intl_tag: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        intl_tag: "en-US",
    },
    LocaleMeta {
        code: "de",
        name: "Deutsch",
        intl_tag: "de-DE",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("de", include_str!("../../i18n/de.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

#[must_use]
pub fn intl_tag(lang: &str) -> &'static str {
    LOCALE_META
        .iter()
        .find(|m| m.code == lang)
        .map_or("en-US", |m| m.intl_tag)
}

/// Parsed translations for `lang`; unknown languages get English.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_parses_and_has_seat_strings() {
        for meta in locales() {
            let value = load_translations(meta.code).expect("locale parses");
            assert!(
                value["seat"]["add_to_cart"].is_string(),
                "{} lacks seat.add_to_cart",
                meta.code
            );
        }
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        assert!(!is_supported("xx"));
        assert_eq!(intl_tag("xx"), "en-US");
        let value = load_translations("xx").unwrap();
        assert_eq!(value["seat"]["add_to_cart"], "Add to cart");
    }
}
