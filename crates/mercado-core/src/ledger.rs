//! The grocery ledger: an insertion-ordered item list plus one exchange rate.
//!
//! A ledger is hydrated once from a [`KvStore`], mutated in place, and written
//! back in full with [`Ledger::save`] after every mutation. Totals are
//! denominated in USD; bolívar prices convert through the exchange rate, and
//! conversions without a usable rate come back as
//! [`MercadoError::RateUnavailable`] rather than a non-finite number.

use std::collections::HashSet;

use crate::error::{MercadoError, Result};
use crate::item::{Currency, Item, ItemId};
use crate::rate::ExchangeRate;
use crate::store::traits::{KvStore, ITEMS_KEY, RATE_KEY};

/// Mutable grocery list state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    items: Vec<Item>,
    rate: ExchangeRate,
}

impl Ledger {
    /// An empty ledger with no exchange rate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from the store.
    ///
    /// A missing item list yields an empty ledger. An unreadable item list is
    /// logged and discarded rather than failing startup; `check_store`
    /// reports the corruption explicitly when asked. Rate text is adopted
    /// verbatim, whether usable or not.
    pub fn load<S: KvStore + ?Sized>(store: &S) -> Result<Self> {
        let items = match store.get(ITEMS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Item>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(%err, "discarding unreadable item list, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let rate = match store.get(RATE_KEY)? {
            Some(raw) => ExchangeRate::from_raw(raw),
            None => ExchangeRate::unset(),
        };

        Ok(Self { items, rate })
    }

    /// Serialize the full state back to the store.
    ///
    /// Callers invoke this after each mutation; nothing persists implicitly.
    pub fn save<S: KvStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        let json = serde_json::to_string(&self.items)?;
        store.set(ITEMS_KEY, &json)?;
        store.set(RATE_KEY, self.rate.as_str())?;
        Ok(())
    }

    // --- Item operations ---

    /// Append a new item and return its id.
    ///
    /// # Errors
    ///
    /// Returns `MercadoError::InvalidInput` if the trimmed name is empty, the
    /// quantity is negative or not finite, or the price is not finite.
    pub fn add_item(
        &mut self,
        name: &str,
        quantity: f64,
        price: f64,
        currency: Currency,
    ) -> Result<ItemId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MercadoError::InvalidInput(
                "Item name cannot be empty".to_string(),
            ));
        }
        if !quantity.is_finite() {
            return Err(MercadoError::InvalidInput(
                "Quantity must be a finite number".to_string(),
            ));
        }
        if quantity < 0.0 {
            return Err(MercadoError::InvalidInput(
                "Quantity cannot be negative".to_string(),
            ));
        }
        if !price.is_finite() {
            return Err(MercadoError::InvalidInput(
                "Price must be a finite number".to_string(),
            ));
        }

        let id = self.next_id();
        self.items.push(Item {
            id,
            name: name.to_string(),
            quantity,
            price,
            currency,
        });
        Ok(id)
    }

    /// Remove the item with `id`. Returns `false` (and changes nothing) if
    /// the id is absent; removing twice is a no-op.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Set an item's quantity, clamped at zero.
    ///
    /// Returns `Ok(false)` if the id is absent.
    pub fn update_quantity(&mut self, id: ItemId, quantity: f64) -> Result<bool> {
        if !quantity.is_finite() {
            return Err(MercadoError::InvalidInput(
                "Quantity must be a finite number".to_string(),
            ));
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = quantity.max(0.0);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Step an item's quantity by `delta` (negative to decrement), clamped at
    /// zero. Returns `Ok(false)` if the id is absent.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: f64) -> Result<bool> {
        let current = match self.item(id) {
            Some(item) => item.quantity,
            None => return Ok(false),
        };
        self.update_quantity(id, current + delta)
    }

    // --- Exchange rate ---

    /// The current exchange rate, raw text included.
    pub fn exchange_rate(&self) -> &ExchangeRate {
        &self.rate
    }

    /// Install a new exchange rate. User input goes through
    /// [`ExchangeRate::parse`] first; hydrated text arrives via `from_raw`.
    pub fn set_exchange_rate(&mut self, rate: ExchangeRate) {
        self.rate = rate;
    }

    // --- Totals ---

    /// USD value of one line: unit price converted to USD, times quantity.
    ///
    /// # Errors
    ///
    /// Returns `MercadoError::RateUnavailable` for a VES-priced item when the
    /// exchange rate is unset or unusable.
    pub fn item_total(&self, item: &Item) -> Result<f64> {
        let unit_usd = match item.currency {
            Currency::Usd => item.price,
            Currency::Ves => {
                let rate = self.rate.value().ok_or(MercadoError::RateUnavailable)?;
                item.price / rate
            }
        };
        Ok(unit_usd * item.quantity)
    }

    /// Grand total in USD: full-precision sum of the item totals. Rounding
    /// happens once, at display time.
    pub fn grand_total_usd(&self) -> Result<f64> {
        let mut total = 0.0;
        for item in &self.items {
            total += self.item_total(item)?;
        }
        Ok(total)
    }

    /// Grand total converted to VES.
    ///
    /// # Errors
    ///
    /// Returns `MercadoError::RateUnavailable` when the rate is unset, even
    /// for an empty ledger; there is nothing to denominate in VES without it.
    pub fn grand_total_ves(&self) -> Result<f64> {
        let rate = self.rate.value().ok_or(MercadoError::RateUnavailable)?;
        Ok(self.grand_total_usd()? * rate)
    }

    // --- Accessors ---

    /// Items in insertion order (which is display order).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up one item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next fresh id: one past the largest id present, starting at 1.
    ///
    /// Ids loaded from older stores can be epoch milliseconds; the counter
    /// simply continues above them.
    fn next_id(&self) -> ItemId {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

/// Verify the raw persisted state without the tolerant hydration path.
///
/// Checks that the item list (when present) is valid JSON in the expected
/// shape with unique ids, non-empty names, non-negative finite quantities,
/// and finite prices, and that the rate text (when present) is blank or a
/// positive number. The first violation is reported as
/// `MercadoError::Corrupt`.
pub fn check_store<S: KvStore + ?Sized>(store: &S) -> Result<()> {
    if let Some(raw) = store.get(ITEMS_KEY)? {
        let items: Vec<Item> = serde_json::from_str(&raw)
            .map_err(|e| MercadoError::Corrupt(format!("Item list is not valid JSON: {}", e)))?;

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(MercadoError::Corrupt(format!(
                    "Duplicate item id {}",
                    item.id
                )));
            }
            if item.name.trim().is_empty() {
                return Err(MercadoError::Corrupt(format!(
                    "Item {} has an empty name",
                    item.id
                )));
            }
            if !item.quantity.is_finite() || item.quantity < 0.0 {
                return Err(MercadoError::Corrupt(format!(
                    "Item {} has an invalid quantity {}",
                    item.id, item.quantity
                )));
            }
            if !item.price.is_finite() {
                return Err(MercadoError::Corrupt(format!(
                    "Item {} has an invalid price {}",
                    item.id, item.price
                )));
            }
        }
    }

    if let Some(raw) = store.get(RATE_KEY)? {
        let rate = ExchangeRate::from_raw(raw);
        if !rate.is_blank() && rate.value().is_none() {
            return Err(MercadoError::Corrupt(format!(
                "Exchange rate text '{}' is not a positive number",
                rate.as_str()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn sample_ledger() -> Ledger {
        // The running example: milk priced in dollars, bread in bolívars,
        // 40 VES to the dollar.
        let mut ledger = Ledger::new();
        ledger.set_exchange_rate(ExchangeRate::parse("40").unwrap());
        ledger.add_item("Milk", 2.0, 1.5, Currency::Usd).unwrap();
        ledger.add_item("Bread", 1.0, 80.0, Currency::Ves).unwrap();
        ledger
    }

    #[test]
    fn test_add_assigns_distinct_increasing_ids() {
        let mut ledger = Ledger::new();
        let a = ledger.add_item("Rice", 1.0, 2.0, Currency::Usd).unwrap();
        let b = ledger.add_item("Beans", 1.0, 3.0, Currency::Usd).unwrap();
        let c = ledger.add_item("Coffee", 1.0, 7.0, Currency::Usd).unwrap();
        assert_eq!(ledger.len(), 3);
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_add_continues_above_legacy_ids() {
        let mut store = MemoryStore::new();
        store
            .set(
                ITEMS_KEY,
                r#"[{"id":1714501123456,"name":"Harina","quantity":1,"price":35,"currency":"VES"}]"#,
            )
            .unwrap();
        let mut ledger = Ledger::load(&store).unwrap();
        let id = ledger.add_item("Azúcar", 1.0, 1.0, Currency::Usd).unwrap();
        assert_eq!(id, 1_714_501_123_457);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut ledger = Ledger::new();
        assert!(ledger.add_item("", 1.0, 1.0, Currency::Usd).is_err());
        assert!(ledger.add_item("   ", 1.0, 1.0, Currency::Usd).is_err());
        assert!(ledger.add_item("Eggs", -1.0, 1.0, Currency::Usd).is_err());
        assert!(ledger
            .add_item("Eggs", f64::NAN, 1.0, Currency::Usd)
            .is_err());
        assert!(ledger
            .add_item("Eggs", 1.0, f64::INFINITY, Currency::Usd)
            .is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_trims_name() {
        let mut ledger = Ledger::new();
        let id = ledger.add_item("  Milk  ", 1.0, 1.0, Currency::Usd).unwrap();
        assert_eq!(ledger.item(id).unwrap().name, "Milk");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut ledger = sample_ledger();
        let id = ledger.items()[0].id;
        assert!(ledger.remove_item(id));
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.remove_item(id));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_update_quantity_clamps_negative_to_zero() {
        let mut ledger = sample_ledger();
        let id = ledger.items()[0].id;
        assert!(ledger.update_quantity(id, -5.0).unwrap());
        assert_eq!(ledger.item(id).unwrap().quantity, 0.0);
    }

    #[test]
    fn test_update_quantity_missing_id_is_noop() {
        let mut ledger = sample_ledger();
        assert!(!ledger.update_quantity(9999, 3.0).unwrap());
        assert_eq!(ledger.item(ledger.items()[0].id).unwrap().quantity, 2.0);
    }

    #[test]
    fn test_update_quantity_rejects_non_finite() {
        let mut ledger = sample_ledger();
        let id = ledger.items()[0].id;
        assert!(ledger.update_quantity(id, f64::NAN).is_err());
        assert_eq!(ledger.item(id).unwrap().quantity, 2.0);
    }

    #[test]
    fn test_adjust_quantity_steps_and_clamps() {
        let mut ledger = sample_ledger();
        let id = ledger.items()[1].id;
        assert!(ledger.adjust_quantity(id, 1.0).unwrap());
        assert_eq!(ledger.item(id).unwrap().quantity, 2.0);
        assert!(ledger.adjust_quantity(id, -5.0).unwrap());
        assert_eq!(ledger.item(id).unwrap().quantity, 0.0);
        assert!(!ledger.adjust_quantity(9999, 1.0).unwrap());
    }

    #[test]
    fn test_item_totals_convert_to_usd() {
        let ledger = sample_ledger();
        let milk = &ledger.items()[0];
        let bread = &ledger.items()[1];
        assert_eq!(ledger.item_total(milk).unwrap(), 3.0);
        assert_eq!(ledger.item_total(bread).unwrap(), 2.0);
    }

    #[test]
    fn test_grand_totals_for_sample() {
        let ledger = sample_ledger();
        assert_eq!(ledger.grand_total_usd().unwrap(), 5.0);
        assert_eq!(ledger.grand_total_ves().unwrap(), 200.0);
    }

    #[test]
    fn test_totals_without_rate_are_tagged_unavailable() {
        let mut ledger = Ledger::new();
        ledger.add_item("Bread", 1.0, 80.0, Currency::Ves).unwrap();
        let bread = &ledger.items()[0];
        assert!(matches!(
            ledger.item_total(bread),
            Err(MercadoError::RateUnavailable)
        ));
        assert!(matches!(
            ledger.grand_total_usd(),
            Err(MercadoError::RateUnavailable)
        ));
        assert!(matches!(
            ledger.grand_total_ves(),
            Err(MercadoError::RateUnavailable)
        ));
    }

    #[test]
    fn test_usd_totals_work_without_rate() {
        let mut ledger = Ledger::new();
        ledger.add_item("Milk", 2.0, 1.5, Currency::Usd).unwrap();
        assert_eq!(ledger.grand_total_usd().unwrap(), 3.0);
        assert!(ledger.grand_total_ves().is_err());
    }

    #[test]
    fn test_empty_ledger_totals() {
        let ledger = Ledger::new();
        assert_eq!(ledger.grand_total_usd().unwrap(), 0.0);
        assert!(matches!(
            ledger.grand_total_ves(),
            Err(MercadoError::RateUnavailable)
        ));

        let mut with_rate = Ledger::new();
        with_rate.set_exchange_rate(ExchangeRate::parse("40").unwrap());
        assert_eq!(with_rate.grand_total_ves().unwrap(), 0.0);
    }

    #[test]
    fn test_grand_total_sums_full_precision() {
        // Three lines whose two-decimal renderings are all "0.00"; a sum of
        // rendered values would be zero. The real sum rounds to 0.01.
        let mut ledger = Ledger::new();
        for name in ["a", "b", "c"] {
            ledger.add_item(name, 1.0, 0.004, Currency::Usd).unwrap();
        }
        let total = ledger.grand_total_usd().unwrap();
        assert!((total - 0.012).abs() < 1e-12);
        assert_eq!(format!("{:.2}", total), "0.01");
    }

    #[test]
    fn test_save_writes_contract_keys() {
        let mut store = MemoryStore::new();
        let ledger = sample_ledger();
        ledger.save(&mut store).unwrap();

        let raw_items = store.get(ITEMS_KEY).unwrap().unwrap();
        let parsed: Vec<Item> = serde_json::from_str(&raw_items).unwrap();
        assert_eq!(parsed, ledger.items());
        assert_eq!(store.get(RATE_KEY).unwrap().as_deref(), Some("40"));
    }

    #[test]
    fn test_round_trip_preserves_state() {
        let mut store = MemoryStore::new();
        let ledger = sample_ledger();
        ledger.save(&mut store).unwrap();

        let reloaded = Ledger::load(&store).unwrap();
        assert_eq!(reloaded, ledger);
    }

    #[test]
    fn test_round_trip_preserves_blank_rate() {
        let mut store = MemoryStore::new();
        let mut ledger = Ledger::new();
        ledger.add_item("Milk", 1.0, 1.0, Currency::Usd).unwrap();
        ledger.save(&mut store).unwrap();

        let reloaded = Ledger::load(&store).unwrap();
        assert!(reloaded.exchange_rate().is_blank());
        assert_eq!(reloaded.exchange_rate().as_str(), "");
    }

    #[test]
    fn test_load_tolerates_garbage_items() {
        let mut store = MemoryStore::new();
        store.set(ITEMS_KEY, "not json at all").unwrap();
        store.set(RATE_KEY, "36.5").unwrap();

        let ledger = Ledger::load(&store).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.exchange_rate().value(), Some(36.5));
    }

    #[test]
    fn test_load_from_empty_store() {
        let store = MemoryStore::new();
        let ledger = Ledger::load(&store).unwrap();
        assert!(ledger.is_empty());
        assert!(ledger.exchange_rate().is_blank());
    }

    #[test]
    fn test_check_store_passes_clean_state() {
        let mut store = MemoryStore::new();
        sample_ledger().save(&mut store).unwrap();
        assert!(check_store(&store).is_ok());
        // A store that has never been written is also fine.
        assert!(check_store(&MemoryStore::new()).is_ok());
    }

    #[test]
    fn test_check_store_reports_garbage_items() {
        let mut store = MemoryStore::new();
        store.set(ITEMS_KEY, "not json at all").unwrap();
        assert!(matches!(
            check_store(&store),
            Err(MercadoError::Corrupt(_))
        ));
    }

    #[test]
    fn test_check_store_reports_duplicate_ids() {
        let mut store = MemoryStore::new();
        store
            .set(
                ITEMS_KEY,
                r#"[{"id":1,"name":"a","quantity":1,"price":1,"currency":"USD"},
                    {"id":1,"name":"b","quantity":1,"price":1,"currency":"USD"}]"#,
            )
            .unwrap();
        assert!(matches!(
            check_store(&store),
            Err(MercadoError::Corrupt(_))
        ));
    }

    #[test]
    fn test_check_store_reports_bad_rate_text() {
        let mut store = MemoryStore::new();
        store.set(RATE_KEY, "forty").unwrap();
        assert!(matches!(
            check_store(&store),
            Err(MercadoError::Corrupt(_))
        ));

        store.set(RATE_KEY, "").unwrap();
        assert!(check_store(&store).is_ok());
    }
}
