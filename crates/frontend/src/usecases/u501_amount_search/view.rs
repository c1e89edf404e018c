use crate::domain::a001_lot::ui::card::LotCard;
use crate::layout::global_context::use_app;
use crate::shared::components::ui::Button;
use crate::shared::format::{fmt, fmt_money};
use crate::shared::icons::icon;
use crate::state::{Action, SearchMode};
use leptos::prelude::*;

pub struct CalculatorCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
}

pub fn calculator_copy(mode: SearchMode) -> CalculatorCopy {
    match mode {
        SearchMode::Budget => CalculatorCopy {
            title: "По бюджету",
            subtitle: "Лоты под вашу сумму",
            placeholder: "700 000",
        },
        SearchMode::Margin => CalculatorCopy {
            title: "По прибыли",
            subtitle: "Лоты с желаемой маржой",
            placeholder: "1 500 000",
        },
    }
}

/// Digits kept in state are shown grouped: "700000" -> "700 000"
pub fn display_amount(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }
    fmt(digits.parse::<f64>().ok())
}

/// Heading of a result set, e.g. "💰 Найдено 3 лотов"
pub fn results_heading(mode: SearchMode, shown: usize, total: u64) -> String {
    let glyph = match mode {
        SearchMode::Budget => "💰",
        SearchMode::Margin => "📈",
    };
    if total > shown as u64 {
        format!("{} Найдено {} лотов из {}", glyph, shown, total)
    } else {
        format!("{} Найдено {} лотов", glyph, shown)
    }
}

#[component]
pub fn CalculatorCard(mode: SearchMode) -> impl IntoView {
    let app = use_app();
    let copy = calculator_copy(mode);

    let input = Memo::new(move |_| app.state.with(|s| s.input(mode).to_string()));
    let loading = Memo::new(move |_| app.state.with(|s| s.is_calc_loading(mode)));
    let error = Memo::new(move |_| {
        app.state.with(|s| {
            if s.calc_mode == Some(mode) {
                s.calc.error.clone()
            } else {
                None
            }
        })
    });

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let action = match mode {
            SearchMode::Budget => Action::BudgetInputChanged(raw),
            SearchMode::Margin => Action::MarginInputChanged(raw),
        };
        app.dispatch(action);
    };

    view! {
        <div class={format!("calculator calculator--{}", mode.as_str())}>
            <div class="calculator__head">
                <div class="calculator__icon">{icon(mode.icon())}</div>
                <div>
                    <h3>{copy.title}</h3>
                    <p class="muted">{copy.subtitle}</p>
                </div>
            </div>
            <input
                type="text"
                inputmode="numeric"
                class="input input--amount"
                placeholder=copy.placeholder
                prop:value=move || display_amount(&input.get())
                on:input=on_input
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        app.submit_search(mode);
                    }
                }
            />
            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}
            <Button
                class="button--wide"
                loading=Signal::derive(move || loading.get())
                disabled=Signal::derive(move || input.get().is_empty())
                on_click=Callback::new(move |_| app.submit_search(mode))
            >
                {icon("search")}" Найти лоты"
            </Button>
        </div>
    }
}

#[component]
pub fn CalcResultsSection() -> impl IntoView {
    let app = use_app();
    let results = Memo::new(move |_| app.state.with(|s| s.calc.value.clone()));

    move || {
        results.get().map(|results| {
            let mode = results.mode;
            let heading = results_heading(mode, results.lots.len(), results.total);
            let query = fmt_money(results.query);
            let body = if results.lots.is_empty() {
                view! {
                    <div class="empty-state">
                        <div class="empty-state__icon">{icon("search")}</div>
                        <p>"Ничего не найдено"</p>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="lot-grid">
                        {results
                            .lots
                            .into_iter()
                            .map(|lot| view! { <LotCard lot=lot mode=mode /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            };

            view! {
                <div class="calc-results">
                    <div class="calc-results__head">
                        <div>
                            <h3>{heading}</h3>
                            <p class="muted">"Запрос: "{query}</p>
                        </div>
                        <Button variant="ghost" on_click=Callback::new(move |_| app.clear_results())>
                            {icon("x")}" Закрыть"
                        </Button>
                    </div>
                    {body}
                </div>
            }
        })
    }
}
