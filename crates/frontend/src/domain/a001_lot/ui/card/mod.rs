use crate::layout::global_context::use_app;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::format::{fmt, fmt_money, fmt_signed_money, fmt_signed_percent, CURRENCY};
use crate::shared::icons::icon;
use crate::state::SearchMode;
use contracts::domain::a001_lot::Lot;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Accent,
    Positive,
    Warning,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Plain => "value",
            Tone::Accent => "value value--accent",
            Tone::Positive => "value value--positive",
            Tone::Warning => "value value--warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
    /// Drawn with a separator above
    pub divided: bool,
}

impl DetailRow {
    fn new(label: &'static str, value: String, tone: Tone) -> Self {
        Self {
            label,
            value,
            tone,
            divided: false,
        }
    }

    fn divided(mut self) -> Self {
        self.divided = true;
        self
    }
}

pub fn quantity_label(lot: &Lot) -> String {
    match lot.unit.as_deref().filter(|u| !u.is_empty()) {
        Some(unit) => format!("{} {}", fmt(lot.quantity), unit),
        None => fmt(lot.quantity),
    }
}

/// Analytics block of a card in calculator results.
///
/// Budget results lead with what the lot costs, margin results with what it earns.
pub fn detail_rows(lot: &Lot, mode: SearchMode) -> Vec<DetailRow> {
    let stats = lot.stats.clone().unwrap_or_default();
    let quantity = DetailRow::new("Кол-во:", quantity_label(lot), Tone::Plain);

    match mode {
        SearchMode::Budget => vec![
            quantity,
            DetailRow::new("💰 Себестоимость:", fmt_money(stats.total_expense), Tone::Accent),
            DetailRow::new("💵 Выручка:", fmt_money(stats.revenue), Tone::Plain),
            DetailRow::new("📈 Прибыль:", fmt_signed_money(stats.profit), Tone::Positive).divided(),
            DetailRow::new("🎯 ROI:", fmt_signed_percent(stats.roi), Tone::Warning),
        ],
        SearchMode::Margin => vec![
            quantity,
            DetailRow::new("📈 Ваша прибыль:", fmt_signed_money(stats.profit), Tone::Positive),
            DetailRow::new("🎯 Рентабельность:", fmt_signed_percent(stats.roi), Tone::Warning),
            DetailRow::new("💰 Вложения:", fmt_money(stats.total_expense), Tone::Accent).divided(),
            DetailRow::new("💵 Продажа:", fmt_money(stats.revenue), Tone::Plain),
        ],
    }
}

/// Price block of a catalog card
pub fn summary_rows(lot: &Lot) -> Vec<DetailRow> {
    let mut rows = vec![DetailRow::new("Тендер:", fmt_money(lot.tender_price), Tone::Plain)];
    if let Some(stats) = &lot.stats {
        if let Some(best) = stats.best_price {
            let margin_tone = if lot.is_hot() { Tone::Warning } else { Tone::Positive };
            rows.push(DetailRow::new("Лучшая:", format!("{}{}", fmt(best), CURRENCY), Tone::Positive));
            rows.push(DetailRow::new("Маржа:", fmt_signed_percent(stats.margin_percent), margin_tone).divided());
        }
    }
    rows
}

pub fn render_rows(rows: Vec<DetailRow>) -> impl IntoView {
    rows.into_iter()
        .map(|row| {
            let class = if row.divided { "row row--divided" } else { "row" };
            view! {
                <div class=class>
                    <span class="row__label">{row.label}</span>
                    <span class=row.tone.class()>{row.value}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn LotCard(
    lot: Lot,
    /// Set for calculator results: shows the analytics block labelled for that search
    #[prop(optional)]
    mode: Option<SearchMode>,
) -> impl IntoView {
    let app = use_app();
    let id = lot.id;
    let hot = lot.is_hot();
    let show_favorite = app.flavor().has_accounts();
    let is_favorite = Memo::new(move |_| app.state.with(|s| s.is_favorite(id)));

    let rows = match mode {
        Some(mode) => view! { <div class="card__analytics">{render_rows(detail_rows(&lot, mode))}</div> }.into_any(),
        None => view! { <div class="card__prices">{render_rows(summary_rows(&lot))}</div> }.into_any(),
    };

    let title_lot = lot.clone();
    let button_lot = lot.clone();
    let lot_number = lot.lot_number.clone();

    view! {
        <div class=if hot { "card card--hot" } else { "card" }>
            <div class="card__top">
                <div class="card__badges">
                    <Show when=move || hot>
                        <Badge color="gradient">{icon("fire")}" HOT"</Badge>
                    </Show>
                </div>
                <Show when=move || show_favorite>
                    <button
                        class=move || if is_favorite.get() { "favorite favorite--on" } else { "favorite" }
                        on:click=move |ev| {
                            ev.stop_propagation();
                            app.toggle_favorite(id);
                        }
                    >
                        {move || icon(if is_favorite.get() { "heart" } else { "heartEmpty" })}
                    </button>
                </Show>
            </div>
            <Badge color="gray">{lot_number}</Badge>
            <h3 class="card__title" on:click=move |_| app.open_product(title_lot.clone())>
                {lot.display_name().to_string()}
            </h3>
            <div class="card__category">
                <Badge color="blue">{lot.category_label().to_string()}</Badge>
            </div>
            {rows}
            <Button class="button--wide" on_click=Callback::new(move |_| app.open_product(button_lot.clone()))>
                "Подробнее "{icon("arrow")}
            </Button>
        </div>
    }
}
