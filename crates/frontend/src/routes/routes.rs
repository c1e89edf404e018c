use crate::domain::a001_lot::ui::details::ProductPage;
use crate::domain::a001_lot::ui::list::CatalogPage;
use crate::layout::global_context::use_app;
use crate::layout::home::HomePage;
use crate::state::Page;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::AuthPage;
use crate::system::pages::profile::ProfilePage;
use leptos::prelude::*;

/// Renders the current page. There is no URL routing: the page lives in the view state.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let app = use_app();
    let page = Memo::new(move |_| app.state.with(|s| s.page));

    move || match page.get() {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Catalog => view! { <CatalogPage /> }.into_any(),
        Page::Product => view! { <ProductPage /> }.into_any(),
        Page::Auth => view! { <AuthPage /> }.into_any(),
        Page::Profile => view! {
            <RequireAuth>
                <ProfilePage />
            </RequireAuth>
        }
        .into_any(),
    }
}
