use serde::{Deserialize, Serialize};

/// Служебное значение фильтра категорий "все категории"
pub const ALL_CATEGORIES: &str = "all";

/// Пустая строка и `"all"` означают отсутствие фильтра
pub fn is_wildcard_category(category: &str) -> bool {
    let c = category.trim();
    c.is_empty() || c == ALL_CATEGORIES
}

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

/// Параметры `GET /lots`. Незаданные поля в query string не попадают.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl LotListQuery {
    pub fn new(limit: Option<u32>, category: &str, search: &str) -> Self {
        Self {
            limit,
            category: if is_wildcard_category(category) {
                None
            } else {
                non_empty(category)
            },
            search: non_empty(search),
        }
    }
}

/// Порядок сортировки расширенного поиска
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    /// Сначала новые. Для этого порядка достаточно `GET /lots`.
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "priceDesc")]
    PriceDesc,
    #[serde(rename = "margin")]
    Margin,
    #[serde(rename = "profit")]
    Profit,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::Price => "price",
            SortBy::PriceDesc => "priceDesc",
            SortBy::Margin => "margin",
            SortBy::Profit => "profit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Newest => "Сначала новые",
            SortBy::Price => "Дешевле",
            SortBy::PriceDesc => "Дороже",
            SortBy::Margin => "По марже",
            SortBy::Profit => "По прибыли",
        }
    }

    /// Unknown names fall back to newest first
    pub fn parse(s: &str) -> Self {
        match s {
            "price" => SortBy::Price,
            "priceDesc" => SortBy::PriceDesc,
            "margin" => SortBy::Margin,
            "profit" => SortBy::Profit,
            _ => SortBy::Newest,
        }
    }

    pub fn all() -> [SortBy; 5] {
        [
            SortBy::Newest,
            SortBy::Price,
            SortBy::PriceDesc,
            SortBy::Margin,
            SortBy::Profit,
        ]
    }
}

/// Тело `POST /lots/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchRequest {
    pub fn new(limit: Option<u32>, category: &str, search: &str, sort_by: SortBy) -> Self {
        let listing = LotListQuery::new(limit, category, search);
        Self {
            query: listing.search,
            category: listing.category,
            min_price: None,
            max_price: None,
            sort_by: Some(sort_by),
            limit,
        }
    }
}

/// Тело `POST /lots/search-by-budget`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSearchRequest {
    pub budget: f64,
    /// Процент на доставку; сервер по умолчанию берёт 15
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_percent: Option<f64>,
}

/// Тело `POST /lots/search-by-margin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginSearchRequest {
    pub target_margin: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_percent: Option<f64>,
}
