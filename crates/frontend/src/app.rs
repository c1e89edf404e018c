use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::theme::apply_theme;
use crate::state::Page;
use leptos::prelude::*;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    apply_theme(config.app.flavor.theme());

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);

    // stats and categories for the landing page
    ctx.navigate(Page::Home);

    view! {
        <Header />
        <main class="app-main">
            <AppRoutes />
        </main>
    }
}
