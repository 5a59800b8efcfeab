//! Paging through a dataset's items.

use log::debug;

use super::client::ApifyClient;
use crate::config::DATASET_PAGE_LIMIT;
use crate::error_handling::ApifyError;
use crate::models::BusinessRecord;

/// Lazy, forward-only sequence of dataset items.
///
/// Each call to [`next_page`](Self::next_page) fetches the next slice of
/// the dataset. The sequence ends at the first page shorter than the page
/// limit. It cannot be rewound; ask the client for a new pager instead.
pub struct DatasetItems<'a> {
    client: &'a ApifyClient,
    dataset_id: String,
    offset: usize,
    limit: usize,
    exhausted: bool,
}

impl<'a> DatasetItems<'a> {
    pub(crate) fn new(client: &'a ApifyClient, dataset_id: &str) -> Self {
        Self {
            client,
            dataset_id: dataset_id.to_string(),
            offset: 0,
            limit: DATASET_PAGE_LIMIT,
            exhausted: false,
        }
    }

    /// Overrides the number of items requested per page.
    pub fn page_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Items read so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Fetches the next page, or `None` once the dataset is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<BusinessRecord>>, ApifyError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut url = self
            .client
            .endpoint(&["v2", "datasets", self.dataset_id.as_str(), "items"]);
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("offset", &self.offset.to_string())
            .append_pair("limit", &self.limit.to_string());

        let items: Vec<BusinessRecord> = self.client.get_json(url).await?;
        debug!(
            "Fetched {} items from dataset {} at offset {}",
            items.len(),
            self.dataset_id,
            self.offset
        );

        self.offset += items.len();
        if items.len() < self.limit {
            self.exhausted = true;
        }
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(items))
    }
}
