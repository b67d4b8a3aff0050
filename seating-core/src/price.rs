//! Price formatting
use serde::{Deserialize, Serialize};

/// Turns a price in cents into display text.
pub trait PriceFormatter {
    fn format(&self, cents: i64) -> String;
}

impl<F> PriceFormatter for F
where
    F: Fn(i64) -> String,
{
    fn format(&self, cents: i64) -> String {
        self(cents)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    #[default]
    Prefix,
    Suffix,
}

/// Locale-free currency formatting with configurable symbol and separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub code: String,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    pub decimal_separator: String,
    pub thousands_separator: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            symbol_position: SymbolPosition::Prefix,
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

impl CurrencyFormat {
    fn group_thousands(&self, whole: u64) -> String {
        let digits = whole.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                out.push_str(&self.thousands_separator);
            }
            out.push(ch);
        }
        out
    }
}

impl PriceFormatter for CurrencyFormat {
    fn format(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        let whole = self.group_thousands(abs / 100);
        let frac = abs % 100;
        let amount = format!("{whole}{sep}{frac:02}", sep = self.decimal_separator);
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{amount}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{amount} {}", self.symbol),
        }
    }
}

/// Serde adapter for `price` fields: an amount in currency units on the wire, cents in memory.
///
/// Whole amounts are written as integers (`150`), others as decimals (`12.5`).
pub mod amount_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if cents % 100 == 0 {
            (cents / 100).serialize(serializer)
        } else {
            #[allow(clippy::cast_precision_loss)]
            let amount = *cents as f64 / 100.0;
            amount.serialize(serializer)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        let cents = (amount * 100.0).round();
        #[allow(clippy::cast_precision_loss)]
        let in_range = cents.is_finite() && cents.abs() <= i64::MAX as f64;
        if !in_range {
            return Err(D::Error::custom(format!("price out of range: {amount}")));
        }
        #[allow(clippy::cast_possible_truncation)]
        let cents = cents as i64;
        Ok(cents)
    }
}
