//! Data-fetch adapter for the remote transactions endpoint.
//!
//! The source is deliberately dumb: one unauthenticated GET of the whole
//! collection, no pagination, no filtering parameters, no retry. Filtering by
//! transaction type happens after the fetch, in the analytics handler.

use async_trait::async_trait;

use crate::{Error, transaction::Transaction};

/// Supplies the transaction records the analytics page charts.
///
/// Implemented by [HttpTransactionSource] in production and by in-process
/// stubs in handler tests.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch the full transaction collection.
    ///
    /// # Errors
    /// Returns [Error::TransactionFetch] if the collection could not be
    /// retrieved or decoded. The error is a single undifferentiated class;
    /// callers are expected to log it and carry on with empty data.
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, Error>;
}

/// Fetches transactions from a remote HTTP endpoint returning a JSON array.
#[derive(Debug, Clone)]
pub struct HttpTransactionSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransactionSource {
    /// Create a source that GETs `endpoint`, e.g.
    /// `https://example.com/transactions`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_owned(),
        }
    }
}

#[async_trait]
impl TransactionSource for HttpTransactionSource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|error| Error::TransactionFetch(error.to_string()))?
            .error_for_status()
            .map_err(|error| Error::TransactionFetch(error.to_string()))?;

        response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|error| Error::TransactionFetch(error.to_string()))
    }
}
