//! Exchange rate handling.
//!
//! The rate is stored as the raw text the user entered (bolívars per one US
//! dollar) and round-trips through persistence byte-for-byte, blank included.
//! Only `value()` decides whether the text is usable for conversion, so a
//! store written with an unusable rate still loads and still displays what
//! the user typed.

use std::fmt;

use crate::error::{MercadoError, Result};

/// User-supplied exchange rate, VES per one USD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeRate {
    raw: String,
}

impl ExchangeRate {
    /// An unset rate (blank text).
    pub fn unset() -> Self {
        Self::default()
    }

    /// Adopt stored text verbatim, without validation.
    ///
    /// This is the hydration path: whatever a previous session persisted is
    /// preserved, usable or not.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Validate user-entered rate text.
    ///
    /// Blank text is accepted and yields an unset rate (clearing the rate is
    /// a legitimate edit). Anything else must parse as a finite number
    /// greater than zero.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::unset());
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            MercadoError::InvalidInput(format!("Exchange rate '{}' is not a number", trimmed))
        })?;
        if !value.is_finite() || value <= 0.0 {
            return Err(MercadoError::InvalidInput(format!(
                "Exchange rate must be a positive number, got '{}'",
                trimmed
            )));
        }
        Ok(Self::from_raw(text))
    }

    /// The raw text as entered/persisted.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The numeric rate, if the text is usable for conversion.
    ///
    /// Returns `None` for blank, non-numeric, zero, negative, and non-finite
    /// text. Callers convert `None` into [`MercadoError::RateUnavailable`].
    pub fn value(&self) -> Option<f64> {
        let value: f64 = self.raw.trim().parse().ok()?;
        if value.is_finite() && value > 0.0 {
            Some(value)
        } else {
            None
        }
    }

    /// Whether the rate is usable for conversion.
    pub fn is_set(&self) -> bool {
        self.value().is_some()
    }

    /// Whether the raw text is blank.
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
