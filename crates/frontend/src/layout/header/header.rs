use crate::layout::global_context::use_app;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::state::Page;
use leptos::prelude::*;

/// Pages listed in the top navigation for the current session
pub fn nav_pages(has_accounts: bool, signed_in: bool) -> Vec<Page> {
    let mut pages = vec![Page::Home, Page::Catalog];
    if has_accounts && signed_in {
        pages.push(Page::Profile);
    }
    pages
}

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();
    let has_accounts = app.flavor().has_accounts();
    let brand = app.flavor().theme().brand();

    let page = Memo::new(move |_| app.state.with(|s| s.page));
    let user_name = Memo::new(move |_| app.state.with(|s| s.user().map(|u| u.username.clone())));

    let nav = move || {
        nav_pages(has_accounts, user_name.get().is_some())
            .into_iter()
            .map(|p| {
                view! {
                    <button
                        class=move || if page.get() == p { "nav__item nav__item--active" } else { "nav__item" }
                        on:click=move |_| app.navigate(p)
                    >
                        {p.title()}
                    </button>
                }
            })
            .collect_view()
    };

    let account = move || {
        if !has_accounts {
            return ().into_any();
        }
        match user_name.get() {
            Some(name) => view! {
                <div class="header__user">
                    <span class="header__user-name">{name}</span>
                    <button class="button button--ghost" aria-label="Выйти" on:click=move |_| app.sign_out()>
                        {icon("logout")}
                    </button>
                </div>
            }
            .into_any(),
            None => view! {
                <Button on_click=Callback::new(move |_| app.navigate(Page::Auth))>"Войти"</Button>
            }
            .into_any(),
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <div class="header__logo" on:click=move |_| app.navigate(Page::Home)>
                    <span class="header__logo-mark">"T"</span>
                    <span class="header__title">{brand}</span>
                </div>
                <nav class="nav">{nav}</nav>
                <div class="header__actions">{account}</div>
            </div>
        </header>
    }
}
