use crate::shared::api::HttpTenderApi;
use crate::shared::config::{AppConfig, Flavor};
use crate::state::{Action, ControllerSettings, FavoriteOutcome, Page, SearchMode, ViewController, ViewState};
use crate::system::auth::{AuthBackend, Credentials};
use contracts::domain::a001_lot::Lot;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, ScrollBehavior, ScrollToOptions};

pub type AppController = ViewController<HttpTenderApi, AuthBackend, RwSignal<ViewState>>;

/// App-wide handle: the view state signal plus the controller that feeds it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub state: RwSignal<ViewState>,
    controller: StoredValue<Arc<AppController>>,
    config: StoredValue<AppConfig>,
    auth_is_demo: bool,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        let state = RwSignal::new(ViewState::new(config.app.flavor));
        let auth = AuthBackend::from_config(&config);
        let auth_is_demo = auth.is_demo();
        let controller = ViewController::new(
            HttpTenderApi::new(config.api.base_url.clone(), config.auth.mode),
            auth,
            state,
            ControllerSettings::from_config(&config),
        );
        log::info!(
            "app started: flavor={:?} api={} demo_auth={}",
            config.app.flavor,
            config.api.base_url,
            auth_is_demo
        );

        Self {
            state,
            controller: StoredValue::new(Arc::new(controller)),
            config: StoredValue::new(config),
            auth_is_demo,
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.config.with_value(|c| c.app.flavor)
    }

    pub fn debounce_ms(&self) -> u32 {
        self.config.with_value(|c| c.catalog.debounce_ms)
    }

    pub fn auth_is_demo(&self) -> bool {
        self.auth_is_demo
    }

    pub fn dispatch(&self, action: Action) {
        self.controller.with_value(|c| c.dispatch(action));
    }

    fn run<F, Fut>(&self, f: F)
    where
        F: FnOnce(Arc<AppController>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(f(controller));
    }

    pub fn navigate(&self, page: Page) {
        scroll_to_top();
        self.run(move |c| async move { c.enter_page(page).await });
    }

    pub fn open_product(&self, lot: Lot) {
        scroll_to_top();
        self.run(move |c| async move { c.open_product(lot).await });
    }

    pub fn go_back(&self) {
        scroll_to_top();
        self.run(|c| async move { c.go_back().await });
    }

    pub fn reload_lots(&self) {
        self.run(|c| async move { c.load_lots().await });
    }

    pub fn submit_search(&self, mode: SearchMode) {
        self.run(move |c| async move { c.submit_search(mode).await });
    }

    pub fn clear_results(&self) {
        self.controller.with_value(|c| c.clear_results());
    }

    pub fn toggle_favorite(&self, id: i64) -> FavoriteOutcome {
        let outcome = self.controller.with_value(|c| c.toggle_favorite(id));
        if outcome == FavoriteOutcome::RedirectedToAuth {
            scroll_to_top();
        }
        outcome
    }

    pub fn sign_in(&self, credentials: Credentials) {
        self.run(move |c| async move { c.sign_in(credentials).await });
    }

    pub fn sign_out(&self) {
        scroll_to_top();
        self.run(|c| async move { c.sign_out().await });
    }
}

pub fn use_app() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn scroll_to_top() {
    if let Some(w) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&options);
    }
}
