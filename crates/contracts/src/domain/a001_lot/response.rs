use super::aggregate::Lot;
use serde::{Deserialize, Serialize};

/// Ответ `GET /lots`.
///
/// Канонический вид `{ "results": [...] }`, но сервер отдаёт и голый массив.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LotListResponse {
    Wrapped { results: Vec<Lot> },
    Bare(Vec<Lot>),
}

impl LotListResponse {
    pub fn into_lots(self) -> Vec<Lot> {
        match self {
            LotListResponse::Wrapped { results } => results,
            LotListResponse::Bare(results) => results,
        }
    }
}

/// Ответ поисковых эндпоинтов (`/lots/search*`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Lot>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl SearchResponse {
    /// Сервер может вернуть меньше лотов, чем нашёл (ограничение 50)
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.results.len() as u64)
    }
}
