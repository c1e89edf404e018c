use super::{ApiError, TenderApi};
use crate::shared::api_utils::{api_url, with_query};
use crate::shared::config::AuthMode;
use async_trait::async_trait;
use contracts::dashboards::d400_market_stats::StatsSummary;
use contracts::domain::a001_lot::request::{
    BudgetSearchRequest, LotListQuery, MarginSearchRequest, SearchRequest,
};
use contracts::domain::a001_lot::response::{LotListResponse, SearchResponse};
use contracts::domain::a001_lot::Lot;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// [`TenderApi`] over browser `fetch`
#[derive(Debug, Clone)]
pub struct HttpTenderApi {
    base_url: String,
    credentials: RequestCredentials,
}

impl HttpTenderApi {
    pub fn new(base_url: impl Into<String>, auth_mode: AuthMode) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: session_credentials(auth_mode),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = api_url(&self.base_url, path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .credentials(self.credentials)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = api_url(&self.base_url, path);
        log::debug!("POST {}", url);

        // .json() also sets Content-Type: application/json
        let response = Request::post(&url)
            .credentials(self.credentials)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }
}

/// Data calls carry the login cookie when the server owns the session
pub fn session_credentials(mode: AuthMode) -> RequestCredentials {
    match mode {
        AuthMode::Server => RequestCredentials::Include,
        AuthMode::Demo => RequestCredentials::SameOrigin,
    }
}

/// Any non-2xx is a failure; the error body is never parsed as a payload.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Path with the listing filter encoded; unset fields are left out entirely
pub fn lots_path(query: &LotListQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(with_query("/lots", &qs))
}

#[async_trait(?Send)]
impl TenderApi for HttpTenderApi {
    async fn list_lots(&self, query: &LotListQuery) -> Result<Vec<Lot>, ApiError> {
        let path = lots_path(query)?;
        let listing: LotListResponse = self.get_json(&path).await?;
        Ok(listing.into_lots())
    }

    async fn get_lot(&self, id: i64) -> Result<Lot, ApiError> {
        match self.get_json(&format!("/lots/{}", id)).await {
            Err(ApiError::Http { status: 404 }) => Err(ApiError::NotFound(id.to_string())),
            other => other,
        }
    }

    async fn search_lots(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        self.post_json("/lots/search", request).await
    }

    async fn search_by_budget(
        &self,
        request: &BudgetSearchRequest,
    ) -> Result<SearchResponse, ApiError> {
        self.post_json("/lots/search-by-budget", request).await
    }

    async fn search_by_margin(
        &self,
        request: &MarginSearchRequest,
    ) -> Result<SearchResponse, ApiError> {
        self.post_json("/lots/search-by-margin", request).await
    }

    async fn get_stats(&self) -> Result<StatsSummary, ApiError> {
        self.get_json("/stats").await
    }

    async fn get_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/categories").await
    }
}
