use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::time::parse_month;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Classic,
    Supreme,
    Veggie,
    Chicken,
    Other(String),
}

impl Category {
    /// Display order of the category chart axis.
    pub const FIXED: [Category; 4] = [
        Category::Classic,
        Category::Supreme,
        Category::Veggie,
        Category::Chicken,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Classic" => Category::Classic,
            "Supreme" => Category::Supreme,
            "Veggie" => Category::Veggie,
            "Chicken" => Category::Chicken,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Classic => "Classic",
            Category::Supreme => "Supreme",
            Category::Veggie => "Veggie",
            Category::Chicken => "Chicken",
            Category::Other(label) => label,
        }
    }

    /// Slot on the fixed axis, `None` for categories outside the known four.
    pub fn axis_index(&self) -> Option<usize> {
        Self::FIXED.iter().position(|c| c == self)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line item as it appears in the dataset document.
///
/// Quantity and price are held as text until validation; the exported dataset
/// encodes them as strings, hand-written fixtures often as numbers.
#[derive(Deserialize, Debug, Clone)]
pub struct RawRecord {
    pub date: String,
    #[serde(alias = "pizzaTypeId")]
    pub pizza_type_id: String,
    pub name: String,
    pub size: String,
    pub category: String,
    #[serde(deserialize_with = "number_or_string")]
    pub quantity: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: String,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(s) => s,
        Field::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordDefect {
    Quantity(String),
    Price(String),
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::Quantity(v) => write!(f, "quantity '{}' is not a non-negative integer", v),
            RecordDefect::Price(v) => write!(f, "price '{}' is not a non-negative decimal", v),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: String,
    pub month: Option<u32>,
    pub pizza_type_id: String,
    pub name: String,
    pub size: String,
    pub category: Category,
    pub quantity: u32,
    pub price: f64,
}

impl SalesRecord {
    pub fn new(
        date: &str,
        pizza_type_id: &str,
        name: &str,
        size: &str,
        category: Category,
        quantity: u32,
        price: f64,
    ) -> Self {
        Self {
            date: date.to_string(),
            month: parse_month(date),
            pizza_type_id: pizza_type_id.to_string(),
            name: name.to_string(),
            size: size.to_string(),
            category,
            quantity,
            price,
        }
    }

    pub fn revenue(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

impl TryFrom<RawRecord> for SalesRecord {
    type Error = RecordDefect;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let quantity = raw
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| RecordDefect::Quantity(raw.quantity.clone()))?;

        let price = raw
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| RecordDefect::Price(raw.price.clone()))?;

        Ok(Self {
            month: parse_month(&raw.date),
            date: raw.date,
            pizza_type_id: raw.pizza_type_id,
            name: raw.name,
            size: raw.size,
            category: Category::parse(&raw.category),
            quantity,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(quantity: &str, price: &str) -> RawRecord {
        RawRecord {
            date: "1/5/2023".to_string(),
            pizza_type_id: "classic_small".to_string(),
            name: "Classic".to_string(),
            size: "S".to_string(),
            category: "Classic".to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_decode_string_encoded_numbers() {
        let json = r#"{"date":"1/5/2023","pizza_type_id":"classic_small","name":"Classic",
            "size":"S","category":"Classic","quantity":"2","price":"9.50","order_id":"1"}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        let record = SalesRecord::try_from(raw).unwrap();
        assert_eq!(record.quantity, 2);
        assert_eq!(record.price, 9.5);
        assert_eq!(record.month, Some(1));
        assert_eq!(record.category, Category::Classic);
    }

    #[test]
    fn test_decode_numeric_fields_and_camel_case_id() {
        let json = r#"{"date":"2/1/2023","pizzaTypeId":"veggie_large","name":"Veggie Deluxe",
            "size":"L","category":"Veggie","quantity":1,"price":15.0}"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        let record = SalesRecord::try_from(raw).unwrap();
        assert_eq!(record.pizza_type_id, "veggie_large");
        assert_eq!(record.quantity, 1);
        assert_eq!(record.price, 15.0);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert_eq!(
            SalesRecord::try_from(raw("-1", "9.50")),
            Err(RecordDefect::Quantity("-1".to_string()))
        );
        assert_eq!(
            SalesRecord::try_from(raw("1", "abc")),
            Err(RecordDefect::Price("abc".to_string()))
        );
        assert!(SalesRecord::try_from(raw("1", "-2")).is_err());
        assert!(SalesRecord::try_from(raw("1", "NaN")).is_err());
    }

    #[test]
    fn test_malformed_date_is_kept_without_month() {
        let mut r = raw("1", "1.00");
        r.date = "not-a-date".to_string();
        let record = SalesRecord::try_from(r).unwrap();
        assert_eq!(record.month, None);
    }

    #[test]
    fn test_unknown_category_passes_through() {
        let category = Category::parse("Dessert");
        assert_eq!(category, Category::Other("Dessert".to_string()));
        assert_eq!(category.axis_index(), None);
        assert_eq!(Category::Veggie.axis_index(), Some(2));
    }
}
