use super::card::LotCard;
use crate::layout::global_context::use_app;
use crate::shared::components::ui::{Button, Spinner};
use crate::shared::icons::icon;
use crate::state::{Action, Debounce};
use contracts::domain::a001_lot::request::{is_wildcard_category, SortBy};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// `(value, label)` pairs for the category select; the wildcard reads "Все"
pub fn category_options(categories: &[String]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|c| {
            let label = if is_wildcard_category(c) {
                "Все".to_string()
            } else {
                c.clone()
            };
            (c.clone(), label)
        })
        .collect()
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let app = use_app();
    let debounce_ms = app.debounce_ms();

    let search_text = Memo::new(move |_| app.state.with(|s| s.filter.search.clone()));
    let category = Memo::new(move |_| app.state.with(|s| s.filter.category.clone()));
    let sort = Memo::new(move |_| app.state.with(|s| s.filter.sort));
    let categories = Memo::new(move |_| app.state.with(|s| s.categories.value.clone()));
    let lots = Memo::new(move |_| app.state.with(|s| s.lots.value.clone()));
    let loading = Memo::new(move |_| app.state.with(|s| s.lots.loading));
    let error = Memo::new(move |_| app.state.with(|s| s.lots.error.clone()));

    // Typing reloads after a pause; each keystroke restarts the wait
    let debounce = StoredValue::new(Debounce::default());
    let pending = debounce.get_value();
    on_cleanup(move || pending.cancel());

    Effect::new(move |prev: Option<String>| {
        let text = search_text.get();
        // first run: page entry already loaded the listing
        if prev.is_some_and(|p| p != text) {
            let ticket = debounce.with_value(|d| d.schedule());
            spawn_local(async move {
                TimeoutFuture::new(debounce_ms).await;
                ticket.fire(|| app.reload_lots());
            });
        }
        text
    });

    let search_now = move || {
        debounce.with_value(|d| d.cancel());
        app.reload_lots();
    };

    let category_select = move || {
        let selected = category.get();
        category_options(&categories.get())
            .into_iter()
            .map(|(value, label)| {
                let is_selected = value == selected;
                view! { <option value=value selected=is_selected>{label}</option> }
            })
            .collect_view()
    };

    let sort_select = move || {
        let selected = sort.get();
        SortBy::all()
            .into_iter()
            .map(|s| {
                view! { <option value={s.as_str()} selected={s == selected}>{s.display_name()}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="page page--catalog">
            <h1 class="page__title">{icon("box")}" Каталог лотов"</h1>

            <div class="filter-panel">
                <input
                    type="text"
                    class="input filter-panel__search"
                    placeholder="Поиск..."
                    prop:value=move || search_text.get()
                    on:input=move |ev| app.dispatch(Action::SearchTextChanged(event_target_value(&ev)))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            search_now();
                        }
                    }
                />
                <select
                    class="select"
                    on:change=move |ev| {
                        app.dispatch(Action::CategoryChanged(event_target_value(&ev)));
                        search_now();
                    }
                >
                    {category_select}
                </select>
                <select
                    class="select"
                    on:change=move |ev| {
                        app.dispatch(Action::SortChanged(SortBy::parse(&event_target_value(&ev))));
                        search_now();
                    }
                >
                    {sort_select}
                </select>
                <Button loading=Signal::derive(move || loading.get()) on_click=Callback::new(move |_| search_now())>
                    {icon("search")}" Поиск"
                </Button>
            </div>

            {move || error.get().map(|e| view! { <div class="error-box">{e}</div> })}

            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let lots = lots.get();
                if lots.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <div class="empty-state__icon">{icon("search")}</div>
                            <p>"Ничего не найдено"</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="lot-grid">
                        {lots.into_iter().map(|lot| view! { <LotCard lot=lot /> }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
