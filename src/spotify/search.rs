use tracing::debug;

use crate::{
    entity::{SearchResults, SearchType},
    error::{Error, Result},
    mapper,
    spotify::Client,
    types::SearchResponse,
    utils,
};

impl Client {
    /// Searches the catalog.
    ///
    /// Only the categories in `types` are present in the result; the others
    /// are `None`, not empty pages. The query is percent-encoded, spaces as
    /// `%20`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty query, an empty `types` set or a
    /// `limit` outside 1..=50, before any request is made.
    pub async fn search(
        &self,
        query: &str,
        types: SearchType,
        limit: u32,
        offset: u32,
    ) -> Result<SearchResults> {
        if query.trim().is_empty() {
            return Err(Error::InvalidArgument("query must not be empty".to_string()));
        }
        if types.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one search type is required".to_string(),
            ));
        }
        utils::validate_limit(limit)?;

        debug!("Searching '{}' in {} (limit={}, offset={})", query, types, limit, offset);
        let response: SearchResponse = self
            .get(
                "search",
                &[
                    ("q", query.to_string()),
                    ("type", types.as_param()),
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await?;

        Ok(mapper::search(response, types, &self.fetcher()))
    }
}
