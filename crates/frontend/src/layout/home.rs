use crate::dashboards::d400_market_stats::ui::StatsBanner;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use crate::state::{Action, Page, SearchMode};
use crate::usecases::u501_amount_search::{CalcResultsSection, CalculatorCard};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app();
    let search_text = Memo::new(move |_| app.state.with(|s| s.filter.search.clone()));

    view! {
        <div class="page page--home">
            <section class="hero">
                <h1 class="hero__title">
                    "Найди товары для тендеров"
                    <span class="hero__accent">"по лучшим ценам"</span>
                </h1>
                <p class="hero__subtitle">"Сравниваем цены на маркетплейсах Казахстана и Китая"</p>
                <div class="hero__search">
                    <input
                        type="text"
                        class="input"
                        placeholder="Поиск..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| app.dispatch(Action::SearchTextChanged(event_target_value(&ev)))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                app.navigate(Page::Catalog);
                            }
                        }
                    />
                    <button class="hero__search-button" on:click=move |_| app.navigate(Page::Catalog)>
                        {icon("search")}" Найти"
                    </button>
                </div>
                <StatsBanner />
            </section>

            <section class="calculators">
                <div class="calculators__intro">
                    <h2>"🎯 Умный поиск лотов"</h2>
                    <p class="muted">"Найдите идеальные сделки под ваш бюджет или желаемую прибыль"</p>
                </div>
                <div class="calculators__grid">
                    <CalculatorCard mode=SearchMode::Budget />
                    <CalculatorCard mode=SearchMode::Margin />
                </div>
                <CalcResultsSection />
            </section>
        </div>
    }
}
