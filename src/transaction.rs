//! The transaction record fetched from the remote transactions endpoint.
//!
//! The remote source imposes no schema on its records, so all coercion of
//! ill-formed data happens here at the deserialization boundary: a missing
//! amount contributes zero, a missing category is grouped under
//! [UNCATEGORISED_LABEL]. The aggregation code downstream only ever sees
//! well-formed records.

use serde::Deserialize;

/// The category label assigned to transactions that arrive without one.
pub const UNCATEGORISED_LABEL: &str = "Uncategorised";

/// Whether a transaction adds to or subtracts from the user's funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TransactionType {
    /// Money received, e.g. salary.
    Income,
    /// Money spent, e.g. rent.
    Expense,
    /// Any other type tag the source may emit. These records are ignored by
    /// the income and expense views.
    #[serde(other)]
    Other,
}

/// A single financial record with a category, an amount, and a type tag.
///
/// Only the fields needed for charting are kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The free-form label used as the grouping key for aggregation.
    #[serde(default = "uncategorised", deserialize_with = "category_or_sentinel")]
    pub category: String,
    /// The transaction amount. Signs are taken as-is, no normalization by
    /// type is applied.
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: f64,
    /// The type tag, `Income` or `Expense` (other values are possible
    /// upstream).
    #[serde(rename = "type", default = "other_type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a transaction. Mostly useful for tests and examples.
    pub fn new(category: &str, amount: f64, transaction_type: TransactionType) -> Self {
        Self {
            category: category.to_owned(),
            amount,
            transaction_type,
        }
    }
}

fn uncategorised() -> String {
    UNCATEGORISED_LABEL.to_owned()
}

fn other_type() -> TransactionType {
    TransactionType::Other
}

/// Treat an explicit `null` category the same as an absent one.
fn category_or_sentinel<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let category: Option<String> = Option::deserialize(deserializer)?;
    Ok(category.unwrap_or_else(uncategorised))
}

/// Treat an explicit `null` amount the same as an absent one.
fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let amount: Option<f64> = Option::deserialize(deserializer)?;
    Ok(amount.unwrap_or(0.0))
}

#[cfg(test)]
mod transaction_tests {
    use super::{Transaction, TransactionType, UNCATEGORISED_LABEL};

    #[test]
    fn deserializes_well_formed_record() {
        let json = r#"{"category": "Salary", "amount": 1000.5, "type": "Income"}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.category, "Salary");
        assert_eq!(transaction.amount, 1000.5);
        assert_eq!(transaction.transaction_type, TransactionType::Income);
    }

    #[test]
    fn missing_amount_defaults_to_zero() {
        let json = r#"{"category": "Misc", "type": "Income"}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.amount, 0.0);
    }

    #[test]
    fn null_amount_defaults_to_zero() {
        let json = r#"{"category": "Misc", "amount": null, "type": "Income"}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.amount, 0.0);
    }

    #[test]
    fn missing_category_uses_sentinel_label() {
        let json = r#"{"amount": 12.0, "type": "Expense"}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.category, UNCATEGORISED_LABEL);
    }

    #[test]
    fn null_category_uses_sentinel_label() {
        let json = r#"{"category": null, "amount": 12.0, "type": "Expense"}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.category, UNCATEGORISED_LABEL);
    }

    #[test]
    fn unknown_type_maps_to_other() {
        let json = r#"{"category": "Savings", "amount": 50.0, "type": "Transfer"}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.transaction_type, TransactionType::Other);
    }

    #[test]
    fn missing_type_maps_to_other() {
        let json = r#"{"category": "Savings", "amount": 50.0}"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.transaction_type, TransactionType::Other);
    }

    #[test]
    fn deserializes_array_of_records() {
        let json = r#"[
            {"category": "Salary", "amount": 1000, "type": "Income"},
            {"category": "Rent", "amount": 1200, "type": "Expense"}
        ]"#;

        let transactions: Vec<Transaction> = serde_json::from_str(json).unwrap();

        assert_eq!(
            transactions,
            vec![
                Transaction::new("Salary", 1000.0, TransactionType::Income),
                Transaction::new("Rent", 1200.0, TransactionType::Expense),
            ]
        );
    }
}
