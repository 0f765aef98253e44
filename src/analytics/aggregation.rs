//! Category aggregation for the analytics charts.
//!
//! The one real data transformation in the app: a single linear pass over a
//! transaction sequence producing a running total per category. The output
//! preserves the first-occurrence order of each category so that chart labels
//! are stable and floating-point accumulation is reproducible for a given
//! input sequence.

use std::collections::HashMap;

use crate::transaction::Transaction;

/// An insertion-ordered mapping from category name to accumulated amount.
///
/// Iterating the mapping yields categories in the order they were first seen
/// in the input, which is the order chart labels and values are emitted in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryTotals {
    /// Category/total pairs in first-occurrence order.
    entries: Vec<(String, f64)>,
    /// Maps a category to its slot in `entries`.
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    /// Add `amount` to the running total for `category`, inserting the
    /// category at the end of the ordering if it has not been seen before.
    fn add(&mut self, category: &str, amount: f64) {
        match self.index.get(category) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(category.to_owned(), self.entries.len());
                self.entries.push((category.to_owned(), amount));
            }
        }
    }

    /// The accumulated total for `category`, or `None` if no transaction with
    /// that category was seen.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|&slot| self.entries[slot].1)
    }

    /// The number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categories were seen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(category, total)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
    }

    /// Split the mapping into parallel label and value vectors, preserving
    /// first-occurrence order. This is the shape chart renderers consume.
    pub fn labels_and_values(&self) -> (Vec<String>, Vec<f64>) {
        self.entries.iter().cloned().unzip()
    }
}

/// Sums transaction amounts by category.
///
/// A pure, total function: any finite sequence of transactions, including an
/// empty one, produces a mapping with one entry per distinct category and no
/// side effects. Amounts are accumulated in input order and taken as-is, with
/// no sign normalization and no deduplication of repeated records.
///
/// Callers are expected to pre-filter by transaction type; this function
/// sums whatever it is given.
pub fn aggregate<'a, I>(transactions: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = CategoryTotals::default();

    for transaction in transactions {
        totals.add(&transaction.category, transaction.amount);
    }

    totals
}
