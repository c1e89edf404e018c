use serde::{Deserialize, Serialize};

/// Ответ `GET /stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total_lots: u64,
    /// Сумма тендерных цен по всем лотам
    #[serde(default)]
    pub total_sum: f64,
    /// Средняя маржа, %
    #[serde(default)]
    pub avg_margin: f64,
    #[serde(default)]
    pub hot_deals: u64,
    #[serde(default)]
    pub new_today: Option<u64>,
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
}

impl StatsSummary {
    /// Пустая сводка (нет лотов) не показывается
    pub fn has_data(&self) -> bool {
        self.total_lots > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_payload() {
        let stats: StatsSummary = serde_json::from_str(
            r#"{"total_lots": 42, "total_sum": 5000000, "avg_margin": 35, "hot_deals": 3,
                "new_today": 1, "categories": [{"category": "Оргтехника", "count": 10}, {"category": null, "count": 2}]}"#,
        )
        .unwrap();
        assert!(stats.has_data());
        assert_eq!(stats.total_sum, 5_000_000.0);
        assert_eq!(stats.categories.len(), 2);
        assert_eq!(stats.categories[1].category, None);
    }

    #[test]
    fn test_empty_stats_has_no_data() {
        let stats: StatsSummary = serde_json::from_str("{}").unwrap();
        assert!(!stats.has_data());
    }
}
