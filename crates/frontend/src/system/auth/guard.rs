use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::state::Page;

/// Renders children only for a signed-in user, otherwise a link to the sign-in page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let app = use_app();
    let signed_in = Memo::new(move |_| app.state.with(|s| s.is_authenticated()));

    view! {
        <Show
            when=move || signed_in.get()
            fallback=move || view! {
                <div class="empty-state">
                    <p>"Войдите, чтобы открыть кабинет"</p>
                    <button class="button button--primary" on:click=move |_| app.navigate(Page::Auth)>
                        "Войти"
                    </button>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
