use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::system::auth::Credentials;

#[component]
pub fn AuthPage() -> impl IntoView {
    let app = use_app();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let is_loading = Memo::new(move |_| app.state.with(|s| s.session.loading));
    let session_error = Memo::new(move |_| app.state.with(|s| s.session.error.clone()));
    let error_message = move || local_error.get().or_else(|| session_error.get());
    let is_demo = app.auth_is_demo();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        // the demo provider accepts an empty form
        if !is_demo {
            if let Err(e) = credentials.validate() {
                set_local_error.set(Some(e.user_message()));
                return;
            }
        }
        set_local_error.set(None);
        app.sign_in(credentials);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>{app.flavor().theme().brand()}</h1>
                <h2>"Вход в систему"</h2>

                <Show when=move || error_message().is_some()>
                    <div class="error-message">
                        {move || error_message().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required={!is_demo}
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required={!is_demo}
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>

                <Show when=move || is_demo>
                    <div class="login-info">
                        <p>"Демо-режим: подойдёт любой логин, пароль не проверяется"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
