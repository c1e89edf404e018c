use crate::layout::global_context::use_app;
use crate::shared::format::{fmt, fmt_percent, fmt_short, CURRENCY};
use contracts::dashboards::d400_market_stats::StatsSummary;
use contracts::domain::a001_lot::UNCATEGORIZED;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub suffix: &'static str,
}

impl StatTile {
    fn new(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            suffix: "",
        }
    }
}

pub fn stats_tiles(stats: &StatsSummary) -> Vec<StatTile> {
    let mut tiles = vec![
        StatTile::new("Лотов", stats.total_lots.to_string()),
        StatTile {
            suffix: CURRENCY,
            ..StatTile::new("Сумма", fmt_short(stats.total_sum))
        },
        StatTile::new("Маржа", fmt_percent(stats.avg_margin)),
    ];
    if stats.hot_deals > 0 {
        tiles.push(StatTile::new("🔥 Горячих", stats.hot_deals.to_string()));
    }
    if let Some(new_today) = stats.new_today {
        tiles.push(StatTile::new("Новых сегодня", fmt(new_today as f64)));
    }
    tiles
}

/// Largest categories first, at most `limit`
pub fn top_categories(stats: &StatsSummary, limit: usize) -> Vec<(String, u64)> {
    let mut counts: Vec<(String, u64)> = stats
        .categories
        .iter()
        .map(|c| {
            let name = c
                .category
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string());
            (name, c.count)
        })
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Headline figures under the hero search. Hidden until there is data.
#[component]
pub fn StatsBanner() -> impl IntoView {
    let app = use_app();
    let stats = Memo::new(move |_| {
        app.state
            .with(|s| s.stats.value.clone().filter(|v| v.has_data()))
    });
    let error = Memo::new(move |_| app.state.with(|s| s.stats.error.clone()));

    view! {
        {move || {
            stats.get().map(|stats| {
                let tiles = stats_tiles(&stats)
                    .into_iter()
                    .map(|t| {
                        view! {
                            <div class="stat-tile">
                                <div class="stat-tile__value">{t.value}{t.suffix}</div>
                                <div class="stat-tile__label">{t.label}</div>
                            </div>
                        }
                    })
                    .collect_view();
                let categories = top_categories(&stats, 5)
                    .into_iter()
                    .map(|(name, count)| {
                        view! { <span class="chip">{name}" · "{count}</span> }
                    })
                    .collect_view();
                view! {
                    <div class="stats-banner">{tiles}</div>
                    <div class="stats-banner__categories">{categories}</div>
                }
            })
        }}
        {move || error.get().map(|e| view! { <div class="error-box error-box--inverse">{e}</div> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_market_stats::CategoryCount;

    #[test]
    fn test_headline_tiles() {
        let stats = StatsSummary {
            total_lots: 42,
            total_sum: 5_000_000.0,
            avg_margin: 35.0,
            hot_deals: 3,
            ..Default::default()
        };
        let tiles = stats_tiles(&stats);
        assert_eq!(tiles[0].value, "42");
        assert_eq!(tiles[1].value, "5M");
        assert_eq!(tiles[1].suffix, "₸");
        assert_eq!(tiles[2].value, "35%");
        assert_eq!(tiles[3].value, "3");
        assert_eq!(tiles.len(), 4);
    }

    #[test]
    fn test_optional_tiles() {
        let stats = StatsSummary {
            total_lots: 1,
            new_today: Some(1500),
            ..Default::default()
        };
        let labels: Vec<_> = stats_tiles(&stats).iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Лотов", "Сумма", "Маржа", "Новых сегодня"]);
    }

    #[test]
    fn test_top_categories() {
        let stats = StatsSummary {
            categories: vec![
                CategoryCount { category: Some("Мебель".into()), count: 2 },
                CategoryCount { category: None, count: 7 },
                CategoryCount { category: Some("Канцелярия".into()), count: 5 },
            ],
            ..Default::default()
        };
        assert_eq!(
            top_categories(&stats, 2),
            vec![("Разное".to_string(), 7), ("Канцелярия".to_string(), 5)]
        );
    }
}
