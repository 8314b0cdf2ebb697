use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StorageLocation {
    Fridge,
    Freezer,
    #[default]
    Pantry,
    SpiceRack,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct PantryItem {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub location: StorageLocation,
    #[serde(default)]
    pub expiry_date: Option<Date>,
    #[serde(default)]
    pub category: String,
}

impl PantryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit: String::new(),
            location: StorageLocation::default(),
            expiry_date: None,
            category: String::new(),
        }
    }

    /// Quantity usable for matching. Negative or NaN stock counts as nothing.
    pub fn available_quantity(&self) -> f64 {
        self.quantity.max(0.0)
    }
}

/// Freshness bucket of a pantry item, carrying the day distance to its expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "days", rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// Days since expiry.
    Expired(i64),
    Expiring(i64),
    Soon(i64),
    Fresh(i64),
}

impl ExpiryStatus {
    pub fn classify(expiry: Date, today: Date) -> Self {
        let days = (expiry - today).whole_days();

        match days {
            d if d < 0 => ExpiryStatus::Expired(-d),
            d if d <= 3 => ExpiryStatus::Expiring(d),
            d if d <= 7 => ExpiryStatus::Soon(d),
            d => ExpiryStatus::Fresh(d),
        }
    }
}

/// Items expiring within `days` of `today`, already expired ones included,
/// ordered by expiry date. Items without an expiry date are skipped.
pub fn expiring_within(
    items: &[PantryItem],
    days: i64,
    today: Date,
) -> Vec<(&PantryItem, ExpiryStatus)> {
    let mut expiring: Vec<(&PantryItem, Date)> = items
        .iter()
        .filter_map(|item| item.expiry_date.map(|date| (item, date)))
        .filter(|(_, date)| (*date - today).whole_days() <= days)
        .collect();

    expiring.sort_by_key(|(_, date)| *date);

    expiring
        .into_iter()
        .map(|(item, date)| (item, ExpiryStatus::classify(date, today)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn item(id: &str, expiry: Option<Date>) -> PantryItem {
        PantryItem {
            expiry_date: expiry,
            ..PantryItem::new(id, format!("item {id}"), 1.0)
        }
    }

    #[test]
    fn test_available_quantity_clamps_negative() {
        assert_eq!(PantryItem::new("1", "rice", -2.0).available_quantity(), 0.0);
        assert_eq!(PantryItem::new("2", "rice", f64::NAN).available_quantity(), 0.0);
        assert_eq!(PantryItem::new("3", "rice", 2.5).available_quantity(), 2.5);
    }

    #[test]
    fn test_classify_buckets() {
        let today = date!(2024 - 01 - 10);

        assert_eq!(
            ExpiryStatus::classify(date!(2024 - 01 - 08), today),
            ExpiryStatus::Expired(2)
        );
        assert_eq!(
            ExpiryStatus::classify(date!(2024 - 01 - 10), today),
            ExpiryStatus::Expiring(0)
        );
        assert_eq!(
            ExpiryStatus::classify(date!(2024 - 01 - 13), today),
            ExpiryStatus::Expiring(3)
        );
        assert_eq!(
            ExpiryStatus::classify(date!(2024 - 01 - 17), today),
            ExpiryStatus::Soon(7)
        );
        assert_eq!(
            ExpiryStatus::classify(date!(2024 - 01 - 18), today),
            ExpiryStatus::Fresh(8)
        );
    }

    #[test]
    fn test_expiring_within_sorts_and_skips_undated() {
        let today = date!(2024 - 01 - 10);
        let items = vec![
            item("basil", Some(date!(2024 - 01 - 11))),
            item("flour", None),
            item("rice", Some(date!(2025 - 08 - 01))),
            item("milk", Some(date!(2024 - 01 - 09))),
            item("peppers", Some(date!(2024 - 01 - 12))),
        ];

        let expiring = expiring_within(&items, 3, today);
        let ids: Vec<&str> = expiring.iter().map(|(i, _)| i.id.as_str()).collect();

        assert_eq!(ids, vec!["milk", "basil", "peppers"]);
        assert_eq!(expiring[0].1, ExpiryStatus::Expired(1));
    }

    #[test]
    fn test_deserialize_item_with_expiry() {
        let item: PantryItem = serde_json::from_str(
            r#"{
                "id": "9",
                "name": "Basil",
                "quantity": 1,
                "unit": "bunch",
                "location": "spice-rack",
                "expiry_date": "2024-01-11"
            }"#,
        )
        .unwrap();

        assert_eq!(item.location, StorageLocation::SpiceRack);
        assert_eq!(item.expiry_date, Some(date!(2024 - 01 - 11)));
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_status_serializes_with_days() {
        let json = serde_json::to_string(&ExpiryStatus::Soon(5)).unwrap();
        assert_eq!(json, r#"{"status":"soon","days":5}"#);
    }
}
