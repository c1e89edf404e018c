use serde::{Deserialize, Serialize};

/// Метка для лотов без категории
pub const UNCATEGORIZED: &str = "Разное";

/// Порог маржи (в процентах), начиная с которого лот считается "горячим"
pub const HOT_DEAL_MARGIN_PERCENT: f64 = 100.0;

/// Тендерный лот в том виде, в котором его отдаёт API.
///
/// Клиент лот никогда не изменяет, только отображает.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: i64,
    #[serde(default)]
    pub lot_number: String,
    #[serde(default)]
    pub original_name: String,
    /// Упрощённое название, если есть, показывается вместо оригинального
    #[serde(default)]
    pub simplified_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub tender_price: f64,
    #[serde(default)]
    pub customer: Option<String>,

    #[serde(default)]
    pub announce_id: Option<String>,
    #[serde(default)]
    pub chinese_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// "YYYY-MM-DD HH:MM:SS" или ISO 8601, как пришло с сервера
    #[serde(default)]
    pub created_at: Option<String>,
    /// 0/1 на стороне сервера
    #[serde(default)]
    pub is_service: Option<i64>,

    /// Аналитика прибыльности, рассчитанная сервером
    #[serde(default)]
    pub stats: Option<LotStats>,
}

/// Показатели прибыльности лота. Клиент их только округляет для вывода.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotStats {
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub delivery_cost: f64,
    #[serde(default)]
    pub total_expense: f64,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub profit: f64,
    /// ROI, %
    #[serde(default)]
    pub roi: f64,
    /// Маржа, %
    #[serde(default)]
    pub margin_percent: f64,
    #[serde(default)]
    pub best_price: Option<f64>,
}

impl Lot {
    /// Название для отображения: упрощённое, если оно непустое
    pub fn display_name(&self) -> &str {
        match self.simplified_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.original_name,
        }
    }

    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }

    pub fn is_hot(&self) -> bool {
        self.stats
            .as_ref()
            .map(|s| s.margin_percent >= HOT_DEAL_MARGIN_PERCENT)
            .unwrap_or(false)
    }

    pub fn is_service(&self) -> bool {
        self.is_service.unwrap_or(0) != 0
    }

    /// Прибыль есть только у лотов, для которых сервер посчитал аналитику
    pub fn has_profit(&self) -> bool {
        self.stats.as_ref().map(|s| s.profit != 0.0).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Lot {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_lot_uses_defaults() {
        let lot = parse(r#"{"id": 7, "original_name": "Бумага А4"}"#);
        assert_eq!(lot.id, 7);
        assert_eq!(lot.display_name(), "Бумага А4");
        assert_eq!(lot.category_label(), UNCATEGORIZED);
        assert!(lot.stats.is_none());
        assert!(!lot.is_hot());
        assert!(!lot.is_service());
    }

    #[test]
    fn test_simplified_name_overrides_original() {
        let lot = parse(r#"{"id": 1, "original_name": "Бумага офисная формата А4", "simplified_name": "Бумага А4"}"#);
        assert_eq!(lot.display_name(), "Бумага А4");

        let blank = parse(r#"{"id": 1, "original_name": "Бумага", "simplified_name": "  "}"#);
        assert_eq!(blank.display_name(), "Бумага");
    }

    #[test]
    fn test_hot_deal_threshold() {
        let hot = parse(r#"{"id": 1, "stats": {"margin_percent": 100}}"#);
        assert!(hot.is_hot());

        let warm = parse(r#"{"id": 2, "stats": {"margin_percent": 99.5}}"#);
        assert!(!warm.is_hot());
    }

    #[test]
    fn test_full_server_payload() {
        let lot = parse(
            r#"{
                "id": 42, "announce_id": "A-1", "lot_number": "L-0042",
                "original_name": "Картридж", "simplified_name": "Картридж HP",
                "chinese_name": null, "category": "Оргтехника",
                "tender_price": 12000.0, "quantity": 10, "unit": "шт",
                "customer": "Акимат", "is_service": 0,
                "created_at": "2024-03-15 10:00:00", "status": "active",
                "stats": {
                    "best_price": 4800.0, "total_cost": 48000.0, "delivery_cost": 7200,
                    "total_expense": 55200.0, "revenue": 120000.0, "profit": 64800.0,
                    "margin_percent": 150, "roi": 117
                }
            }"#,
        );
        assert_eq!(lot.category_label(), "Оргтехника");
        assert!(lot.is_hot());
        assert!(lot.has_profit());
        let stats = lot.stats.unwrap();
        assert_eq!(stats.best_price, Some(4800.0));
        assert_eq!(stats.roi, 117.0);
    }
}
