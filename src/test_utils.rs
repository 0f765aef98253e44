#![allow(missing_docs)]
//! Helpers shared between test modules.

use async_trait::async_trait;

use crate::{Error, source::TransactionSource, transaction::Transaction};

/// A transaction source that always returns an empty collection, for tests
/// that do not care about chart data.
pub(crate) struct DummySource;

#[async_trait]
impl TransactionSource for DummySource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, Error> {
        Ok(Vec::new())
    }
}
