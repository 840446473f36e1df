//! Core data types for the grocery ledger.
//!
//! The serialized shape of these types is a stable contract: stores written
//! by older clients use the same field names and currency codes, so renames
//! here are breaking changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MercadoError;

/// Item identifier, unique within one ledger.
///
/// Serialized as a plain JSON number. Older stores carry epoch-millisecond
/// identifiers; new ones are assigned from a counter. Uniqueness is the only
/// invariant.
pub type ItemId = u64;

/// One of the two supported price currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar, the primary currency (totals are denominated in it)
    Usd,
    /// Venezuelan bolívar, converted through the exchange rate
    Ves,
}

impl Currency {
    /// The persisted/display code for this currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ves => "VES",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MercadoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "VES" => Ok(Currency::Ves),
            other => Err(MercadoError::InvalidInput(format!(
                "Unknown currency '{}' (expected USD or VES)",
                other
            ))),
        }
    }
}

/// A single grocery list line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the ledger
    pub id: ItemId,

    /// Item name, non-empty after trimming
    pub name: String,

    /// How many units are on the list; never negative
    pub quantity: f64,

    /// Unit price, denominated in `currency`
    pub price: f64,

    /// Currency the unit price is quoted in
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Ves.code(), "VES");
        assert_eq!(Currency::Usd.to_string(), "USD");
    }

    #[test]
    fn test_currency_parses_case_insensitively() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" VES ".parse::<Currency>().unwrap(), Currency::Ves);
        assert_eq!("Ves".parse::<Currency>().unwrap(), Currency::Ves);
        assert!("EUR".parse::<Currency>().is_err());
        assert!("".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(serde_json::to_string(&Currency::Ves).unwrap(), "\"VES\"");
        let parsed: Currency = serde_json::from_str("\"VES\"").unwrap();
        assert_eq!(parsed, Currency::Ves);
    }

    #[test]
    fn test_item_json_field_names() {
        let item = Item {
            id: 7,
            name: "Milk".to_string(),
            quantity: 2.0,
            price: 1.5,
            currency: Currency::Usd,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Milk");
        assert_eq!(value["quantity"], 2.0);
        assert_eq!(value["price"], 1.5);
        assert_eq!(value["currency"], "USD");
    }

    #[test]
    fn test_item_parses_legacy_timestamp_ids() {
        // Records written by older clients carry Date.now() identifiers.
        let raw = r#"{"id":1714501123456,"name":"Harina","quantity":1,"price":35,"currency":"VES"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, 1_714_501_123_456);
        assert_eq!(item.currency, Currency::Ves);
        assert_eq!(item.quantity, 1.0);
    }
}
