use super::card::{quantity_label, render_rows, DetailRow, Tone};
use crate::layout::global_context::use_app;
use crate::shared::components::ui::{Badge, Button, Spinner};
use crate::shared::date_utils::format_date;
use crate::shared::format::{fmt_money, fmt_signed_money, fmt_signed_percent};
use crate::shared::icons::icon;
use crate::state::ViewState;
use contracts::domain::a001_lot::{Lot, LotStats};
use leptos::prelude::*;

/// Lot shown on the product page. Nothing selected is an empty page, not an error.
pub fn product_view(state: &ViewState) -> Option<&Lot> {
    state.selected.value.as_ref()
}

/// "О тендере" block; empty fields are left out
pub fn about_rows(lot: &Lot) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(customer) = lot.customer.as_deref().filter(|c| !c.is_empty()) {
        rows.push(("Заказчик", customer.to_string()));
    }
    rows.push(("Категория", lot.category_label().to_string()));
    rows.push(("Количество", quantity_label(lot)));
    if lot.is_service() {
        rows.push(("Тип", "Услуга".to_string()));
    }
    if let Some(status) = lot.status.as_deref().filter(|s| !s.is_empty()) {
        rows.push(("Статус", status.to_string()));
    }
    if let Some(created) = lot.created_at.as_deref().filter(|s| !s.is_empty()) {
        rows.push(("Опубликован", format_date(created)));
    }
    rows
}

pub fn price_rows(lot: &Lot) -> Vec<DetailRow> {
    let mut rows = vec![DetailRow {
        label: "Тендер:",
        value: fmt_money(lot.tender_price),
        tone: Tone::Plain,
        divided: false,
    }];
    if let Some(stats) = &lot.stats {
        if let Some(best) = stats.best_price {
            rows.push(DetailRow {
                label: "Лучшая:",
                value: fmt_money(best),
                tone: Tone::Positive,
                divided: false,
            });
            rows.push(DetailRow {
                label: "Маржа:",
                value: fmt_signed_percent(stats.margin_percent),
                tone: Tone::Warning,
                divided: true,
            });
        }
    }
    rows
}

pub fn profit_rows(stats: &LotStats) -> Vec<DetailRow> {
    vec![
        DetailRow {
            label: "Себестоимость:",
            value: fmt_money(stats.total_expense),
            tone: Tone::Plain,
            divided: false,
        },
        DetailRow {
            label: "Выручка:",
            value: fmt_money(stats.revenue),
            tone: Tone::Plain,
            divided: false,
        },
        DetailRow {
            label: "📈 Прибыль:",
            value: fmt_signed_money(stats.profit),
            tone: Tone::Positive,
            divided: true,
        },
        DetailRow {
            label: "🎯 ROI:",
            value: fmt_signed_percent(stats.roi),
            tone: Tone::Warning,
            divided: false,
        },
    ]
}

#[component]
pub fn ProductPage() -> impl IntoView {
    let app = use_app();
    let lot = Memo::new(move |_| app.state.with(|s| product_view(s).cloned()));
    let loading = Memo::new(move |_| app.state.with(|s| s.selected.loading));
    let error = Memo::new(move |_| app.state.with(|s| s.selected.error.clone()));

    view! {
        <div class="page page--product">
            <Button variant="ghost" class="page__back" on_click=Callback::new(move |_| app.go_back())>
                {icon("arrowLeft")}" Назад"
            </Button>
            <Show when=move || loading.get()>
                <Spinner />
            </Show>
            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}
            {move || lot.get().map(|lot| view! { <ProductDetails lot=lot /> })}
        </div>
    }
}

#[component]
fn ProductDetails(lot: Lot) -> impl IntoView {
    let about = about_rows(&lot)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="row row--bordered">
                    <span class="row__label">{label}</span>
                    <span class="value">{value}</span>
                </div>
            }
        })
        .collect_view();

    let calculator = lot.stats.clone().filter(|_| lot.has_profit()).map(|stats| {
        view! {
            <div class="profit-calculator">
                <h3>{icon("chart")}" Калькулятор прибыли"</h3>
                <div class="profit-calculator__body">{render_rows(profit_rows(&stats))}</div>
            </div>
        }
    });

    let hot = lot.is_hot();
    let lot_number = lot.lot_number.clone();

    view! {
        <div class="card card--flat product">
            <div class="product__badges">
                <Badge color="gray">{lot_number}</Badge>
                <Show when=move || hot>
                    <Badge color="gradient">{icon("fire")}" HOT"</Badge>
                </Show>
            </div>
            <h1 class="product__title">{lot.display_name().to_string()}</h1>
            <div class="product__columns">
                <div>
                    <h3>{icon("box")}" О тендере"</h3>
                    {about}
                </div>
                <div class="product__prices">
                    <h3>"💰 Ценовая аналитика"</h3>
                    {render_rows(price_rows(&lot))}
                </div>
            </div>
        </div>
        {calculator}
    }
}
