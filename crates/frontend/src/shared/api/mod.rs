//! Gateway to the tender API.
//!
//! Nothing outside this module talks to the network. One attempt per call:
//! no retries, timeouts or cancellation at this layer.

pub mod error;
pub mod http;

pub use error::ApiError;
pub use http::HttpTenderApi;

use async_trait::async_trait;
use contracts::dashboards::d400_market_stats::StatsSummary;
use contracts::domain::a001_lot::request::{
    BudgetSearchRequest, LotListQuery, MarginSearchRequest, SearchRequest,
};
use contracts::domain::a001_lot::response::SearchResponse;
use contracts::domain::a001_lot::Lot;

#[async_trait(?Send)]
pub trait TenderApi {
    /// `GET /lots`
    async fn list_lots(&self, query: &LotListQuery) -> Result<Vec<Lot>, ApiError>;

    /// `GET /lots/{id}`; a 404 is reported as [`ApiError::NotFound`]
    async fn get_lot(&self, id: i64) -> Result<Lot, ApiError>;

    /// `POST /lots/search`
    async fn search_lots(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError>;

    /// `POST /lots/search-by-budget`
    async fn search_by_budget(
        &self,
        request: &BudgetSearchRequest,
    ) -> Result<SearchResponse, ApiError>;

    /// `POST /lots/search-by-margin`
    async fn search_by_margin(
        &self,
        request: &MarginSearchRequest,
    ) -> Result<SearchResponse, ApiError>;

    /// `GET /stats`
    async fn get_stats(&self) -> Result<StatsSummary, ApiError>;

    /// `GET /categories`, canonical shape is a plain `string[]`
    async fn get_categories(&self) -> Result<Vec<String>, ApiError>;
}
