//! Fetch orchestration for the storefront pages.
//!
//! The controller is the only place that calls the API. It dispatches a
//! `*Requested` action, remembers the slot's generation as its ticket, awaits
//! the gateway and dispatches the outcome with that ticket. The reducer drops
//! outcomes whose ticket is no longer current, so the last issued request
//! wins no matter in which order responses arrive.

use super::action::Action;
use super::input::normalize_amount;
use super::store::ViewStore;
use super::view_state::{CalcResults, Page, SearchMode};
use crate::shared::api::TenderApi;
use crate::shared::config::{AppConfig, ProductSource};
use crate::system::auth::{AuthProvider, Credentials};
use contracts::domain::a001_lot::request::{
    BudgetSearchRequest, LotListQuery, MarginSearchRequest, SearchRequest, SortBy,
};
use contracts::domain::a001_lot::Lot;
use log::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSettings {
    pub listing_limit: u32,
    pub delivery_percent: Option<f64>,
    pub product_source: ProductSource,
}

impl ControllerSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            listing_limit: config.catalog.limit,
            delivery_percent: config.api.delivery_percent,
            product_source: config.app.flavor.product_source(),
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// Not signed in: sent to the auth page, favorites untouched
    RedirectedToAuth,
    Added,
    Removed,
    /// Unknown lot or a flavor without accounts
    Ignored,
}

pub struct ViewController<A, P, S> {
    api: A,
    auth: P,
    store: S,
    settings: ControllerSettings,
}

impl<A, P, S> ViewController<A, P, S>
where
    A: TenderApi,
    P: AuthProvider,
    S: ViewStore,
{
    pub fn new(api: A, auth: P, store: S, settings: ControllerSettings) -> Self {
        Self {
            api,
            auth,
            store,
            settings,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatch(&self, action: Action) {
        self.store.dispatch(action);
    }

    /// Switch page and run that page's initial fetches
    pub async fn enter_page(&self, page: Page) {
        self.dispatch(Action::Navigate(page));
        match self.store.read(|s| s.page) {
            Page::Home => {
                self.ensure_stats().await;
                self.ensure_categories().await;
            }
            Page::Catalog => {
                self.ensure_categories().await;
                self.load_lots().await;
            }
            Page::Product | Page::Auth | Page::Profile => {}
        }
    }

    /// "Back" from the product page always goes to the catalog
    pub async fn go_back(&self) {
        self.enter_page(Page::Catalog).await;
    }

    pub async fn open_product(&self, lot: Lot) {
        match self.settings.product_source {
            ProductSource::PassThrough => self.dispatch(Action::OpenProduct(lot)),
            ProductSource::Refetch => {
                self.dispatch(Action::Navigate(Page::Product));
                self.load_product(lot.id).await;
            }
        }
    }

    pub async fn load_product(&self, id: i64) {
        self.dispatch(Action::ProductRequested);
        let ticket = self.store.read(|s| s.selected.generation);

        match self.api.get_lot(id).await {
            Ok(lot) => self.dispatch(Action::ProductLoaded { ticket, lot }),
            Err(e) => {
                error!("Error loading lot {}: {}", id, e);
                self.dispatch(Action::ProductFailed {
                    ticket,
                    message: e.user_message(),
                });
            }
        }
    }

    pub async fn load_stats(&self) {
        self.dispatch(Action::StatsRequested);
        let ticket = self.store.read(|s| s.stats.generation);

        match self.api.get_stats().await {
            Ok(stats) => self.dispatch(Action::StatsLoaded { ticket, stats }),
            Err(e) => {
                error!("Error loading stats: {}", e);
                self.dispatch(Action::StatsFailed {
                    ticket,
                    message: e.user_message(),
                });
            }
        }
    }

    /// Fetch stats unless they are loaded or already on the way
    pub async fn ensure_stats(&self) {
        if self.store.read(|s| s.stats.is_settled_or_pending()) {
            return;
        }
        self.load_stats().await;
    }

    pub async fn load_categories(&self) {
        self.dispatch(Action::CategoriesRequested);
        let ticket = self.store.read(|s| s.categories.generation);

        match self.api.get_categories().await {
            Ok(categories) => self.dispatch(Action::CategoriesLoaded { ticket, categories }),
            Err(e) => {
                error!("Error loading categories: {}", e);
                self.dispatch(Action::CategoriesFailed {
                    ticket,
                    message: e.user_message(),
                });
            }
        }
    }

    pub async fn ensure_categories(&self) {
        if self.store.read(|s| s.categories.is_settled_or_pending()) {
            return;
        }
        self.load_categories().await;
    }

    /// Reload the catalog with the current filter
    pub async fn load_lots(&self) {
        self.dispatch(Action::LotsRequested);
        let (ticket, filter) = self.store.read(|s| (s.lots.generation, s.filter.clone()));
        let limit = Some(self.settings.listing_limit);
        debug!("loading lots #{} {:?}", ticket, filter);

        let result = if filter.sort == SortBy::Newest {
            let query = LotListQuery::new(limit, &filter.category, &filter.search);
            self.api.list_lots(&query).await
        } else {
            let request = SearchRequest::new(limit, &filter.category, &filter.search, filter.sort);
            self.api.search_lots(&request).await.map(|r| r.results)
        };

        if !self.store.read(|s| s.lots.is_current(ticket)) {
            debug!("dropping stale lots response #{}", ticket);
            return;
        }
        match result {
            Ok(lots) => self.dispatch(Action::LotsLoaded { ticket, lots }),
            Err(e) => {
                error!("Error loading lots: {}", e);
                self.dispatch(Action::LotsFailed {
                    ticket,
                    message: e.user_message(),
                });
            }
        }
    }

    /// Submit one of the calculators. Invalid input never reaches the network.
    pub async fn submit_search(&self, mode: SearchMode) {
        let raw = self.store.read(|s| s.input(mode).to_string());
        let amount = match normalize_amount(&raw) {
            Ok(v) => v,
            Err(e) => {
                warn!("{} search suppressed: {}", mode.as_str(), e);
                self.dispatch(Action::CalcRejected {
                    mode,
                    message: e.to_string(),
                });
                return;
            }
        };

        self.dispatch(Action::CalcRequested(mode));
        let ticket = self.store.read(|s| s.calc.generation);
        let delivery_percent = self.settings.delivery_percent;

        let result = match mode {
            SearchMode::Budget => {
                let request = BudgetSearchRequest {
                    budget: amount,
                    delivery_percent,
                };
                self.api.search_by_budget(&request).await
            }
            SearchMode::Margin => {
                let request = MarginSearchRequest {
                    target_margin: amount,
                    delivery_percent,
                };
                self.api.search_by_margin(&request).await
            }
        };

        match result {
            Ok(response) => {
                let results = CalcResults {
                    mode,
                    total: response.total(),
                    lots: response.results,
                    query: amount,
                };
                self.dispatch(Action::CalcLoaded { ticket, results });
            }
            Err(e) => {
                error!("Error searching by {}: {}", mode.as_str(), e);
                self.dispatch(Action::CalcFailed {
                    ticket,
                    message: e.user_message(),
                });
            }
        }
    }

    pub fn clear_results(&self) {
        self.dispatch(Action::CalcCleared);
    }

    pub fn toggle_favorite(&self, id: i64) -> FavoriteOutcome {
        let (accounts, signed_in, known, was_favorite) = self.store.read(|s| {
            (
                s.flavor.has_accounts(),
                s.is_authenticated(),
                s.knows_lot(id),
                s.is_favorite(id),
            )
        });
        if !accounts {
            return FavoriteOutcome::Ignored;
        }
        if !signed_in {
            self.dispatch(Action::Navigate(Page::Auth));
            return FavoriteOutcome::RedirectedToAuth;
        }
        if !was_favorite && !known {
            return FavoriteOutcome::Ignored;
        }
        self.dispatch(Action::FavoriteToggled(id));
        if was_favorite {
            FavoriteOutcome::Removed
        } else {
            FavoriteOutcome::Added
        }
    }

    pub async fn sign_in(&self, credentials: Credentials) {
        if !self.store.read(|s| s.flavor.has_accounts()) {
            return;
        }
        self.dispatch(Action::SignInRequested);
        let ticket = self.store.read(|s| s.session.generation);

        match self.auth.sign_in(&credentials).await {
            Ok(user) => {
                info!("signed in as {}", user.username);
                self.dispatch(Action::SignedIn { ticket, user });
            }
            Err(e) => {
                warn!("sign in failed: {}", e);
                self.dispatch(Action::SignInFailed {
                    ticket,
                    message: e.user_message(),
                });
            }
        }
    }

    /// The local session ends even if the server call fails
    pub async fn sign_out(&self) {
        if let Err(e) = self.auth.sign_out().await {
            error!("Error signing out: {}", e);
        }
        self.dispatch(Action::SignedOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiError;
    use crate::shared::config::Flavor;
    use crate::state::view_state::ViewState;
    use crate::system::auth::AuthError;
    use async_trait::async_trait;
    use contracts::dashboards::d400_market_stats::StatsSummary;
    use contracts::domain::a001_lot::response::SearchResponse;
    use contracts::system::auth::UserInfo;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        ListLots(LotListQuery),
        GetLot(i64),
        Search(SearchRequest),
        Budget(BudgetSearchRequest),
        Margin(MarginSearchRequest),
        Stats,
        Categories,
    }

    type LotsReply = Result<Vec<Lot>, ApiError>;

    struct MockApi {
        calls: RefCell<Vec<Call>>,
        pending_lots: RefCell<VecDeque<oneshot::Receiver<LotsReply>>>,
        lots: RefCell<LotsReply>,
        lot: RefCell<Result<Lot, ApiError>>,
        search: RefCell<Result<SearchResponse, ApiError>>,
        stats: RefCell<Result<StatsSummary, ApiError>>,
        categories: RefCell<Result<Vec<String>, ApiError>>,
    }

    impl Default for MockApi {
        fn default() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                pending_lots: RefCell::new(VecDeque::new()),
                lots: RefCell::new(Ok(Vec::new())),
                lot: RefCell::new(Err(ApiError::NotFound("none".into()))),
                search: RefCell::new(Ok(SearchResponse::default())),
                stats: RefCell::new(Ok(StatsSummary::default())),
                categories: RefCell::new(Ok(Vec::new())),
            }
        }
    }

    impl MockApi {
        fn record(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }

        /// Next `list_lots` waits for the returned sender
        fn hold_next_lots(&self) -> oneshot::Sender<LotsReply> {
            let (tx, rx) = oneshot::channel();
            self.pending_lots.borrow_mut().push_back(rx);
            tx
        }
    }

    #[async_trait(?Send)]
    impl TenderApi for MockApi {
        async fn list_lots(&self, query: &LotListQuery) -> Result<Vec<Lot>, ApiError> {
            self.record(Call::ListLots(query.clone()));
            let pending = self.pending_lots.borrow_mut().pop_front();
            match pending {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("dropped".into()))),
                None => self.lots.borrow().clone(),
            }
        }

        async fn get_lot(&self, id: i64) -> Result<Lot, ApiError> {
            self.record(Call::GetLot(id));
            self.lot.borrow().clone()
        }

        async fn search_lots(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
            self.record(Call::Search(request.clone()));
            self.search.borrow().clone()
        }

        async fn search_by_budget(
            &self,
            request: &BudgetSearchRequest,
        ) -> Result<SearchResponse, ApiError> {
            self.record(Call::Budget(request.clone()));
            self.search.borrow().clone()
        }

        async fn search_by_margin(
            &self,
            request: &MarginSearchRequest,
        ) -> Result<SearchResponse, ApiError> {
            self.record(Call::Margin(request.clone()));
            self.search.borrow().clone()
        }

        async fn get_stats(&self) -> Result<StatsSummary, ApiError> {
            self.record(Call::Stats);
            self.stats.borrow().clone()
        }

        async fn get_categories(&self) -> Result<Vec<String>, ApiError> {
            self.record(Call::Categories);
            self.categories.borrow().clone()
        }
    }

    struct MockAuth {
        result: Result<UserInfo, AuthError>,
        signed_out: Cell<bool>,
    }

    impl MockAuth {
        fn accepting() -> Self {
            Self {
                result: Ok(UserInfo {
                    id: 5,
                    username: "buyer".into(),
                    email: None,
                    is_admin: false,
                }),
                signed_out: Cell::new(false),
            }
        }

        fn rejecting() -> Self {
            Self {
                result: Err(AuthError::Rejected("Неверный логин или пароль".into())),
                signed_out: Cell::new(false),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthProvider for MockAuth {
        async fn sign_in(&self, _credentials: &Credentials) -> Result<UserInfo, AuthError> {
            self.result.clone()
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            self.signed_out.set(true);
            Ok(())
        }
    }

    type TestController = ViewController<MockApi, MockAuth, RefCell<ViewState>>;

    fn controller_with(flavor: Flavor, auth: MockAuth) -> TestController {
        let mut config = AppConfig::default();
        config.app.flavor = flavor;
        ViewController::new(
            MockApi::default(),
            auth,
            RefCell::new(ViewState::new(flavor)),
            ControllerSettings::from_config(&config),
        )
    }

    fn controller() -> TestController {
        controller_with(Flavor::Marketplace, MockAuth::accepting())
    }

    fn lot(id: i64) -> Lot {
        serde_json::from_value(serde_json::json!({ "id": id, "original_name": format!("Лот {}", id) }))
            .unwrap()
    }

    fn calls(c: &TestController) -> Vec<Call> {
        c.api.calls.borrow().clone()
    }

    fn state(c: &TestController) -> ViewState {
        c.store().read(|s| s.clone())
    }

    #[test]
    fn test_budget_without_digits_sends_nothing() {
        let c = controller();
        c.dispatch(Action::BudgetInputChanged("abc".into()));
        block_on(c.submit_search(SearchMode::Budget));

        assert!(calls(&c).is_empty());
        let s = state(&c);
        assert!(!s.calc.loading);
        assert_eq!(s.calc.error.as_deref(), Some("Введите сумму"));
    }

    #[test]
    fn test_budget_input_is_normalized_before_sending() {
        let c = controller();
        *c.api.search.borrow_mut() = Ok(SearchResponse {
            results: vec![lot(1), lot(2)],
            total: Some(7),
        });
        c.dispatch(Action::BudgetInputChanged("700 000".into()));
        block_on(c.submit_search(SearchMode::Budget));

        assert_eq!(
            calls(&c),
            vec![Call::Budget(BudgetSearchRequest {
                budget: 700000.0,
                delivery_percent: None,
            })]
        );
        let results = state(&c).calc.value.unwrap();
        assert_eq!(results.mode, SearchMode::Budget);
        assert_eq!(results.query, 700000.0);
        assert_eq!(results.total, 7);
        assert_eq!(results.lots, vec![lot(1), lot(2)]);
    }

    #[test]
    fn test_margin_search_is_tagged() {
        let c = controller();
        c.dispatch(Action::MarginInputChanged("1 500 000".into()));
        block_on(c.submit_search(SearchMode::Margin));

        assert_eq!(
            calls(&c),
            vec![Call::Margin(MarginSearchRequest {
                target_margin: 1500000.0,
                delivery_percent: None,
            })]
        );
        let s = state(&c);
        assert_eq!(s.calc.value.map(|r| r.mode), Some(SearchMode::Margin));
        assert_eq!(s.calc_mode, Some(SearchMode::Margin));
    }

    #[test]
    fn test_search_failure_clears_loading_and_keeps_catalog() {
        let c = controller();
        *c.api.lots.borrow_mut() = Ok(vec![lot(3)]);
        block_on(c.load_lots());
        *c.api.search.borrow_mut() = Err(ApiError::Http { status: 500 });
        c.dispatch(Action::BudgetInputChanged("100000".into()));
        block_on(c.submit_search(SearchMode::Budget));

        let s = state(&c);
        assert!(!s.calc.loading);
        assert!(s.calc.error.unwrap().contains("500"));
        assert_eq!(s.lots.value, vec![lot(3)]);
    }

    #[test]
    fn test_catalog_entry_omits_wildcard_category() {
        let c = controller();
        *c.api.categories.borrow_mut() = Ok(vec!["Мебель".into()]);
        block_on(c.enter_page(Page::Catalog));

        assert_eq!(
            calls(&c),
            vec![
                Call::Categories,
                Call::ListLots(LotListQuery {
                    limit: Some(50),
                    category: None,
                    search: None,
                }),
            ]
        );
        let s = state(&c);
        assert_eq!(s.page, Page::Catalog);
        assert_eq!(s.categories.value, vec!["all", "Мебель"]);
    }

    #[test]
    fn test_catalog_filter_is_sent() {
        let c = controller();
        c.dispatch(Action::CategoryChanged("Мебель".into()));
        c.dispatch(Action::SearchTextChanged("стул".into()));
        block_on(c.load_lots());

        assert_eq!(
            calls(&c),
            vec![Call::ListLots(LotListQuery {
                limit: Some(50),
                category: Some("Мебель".into()),
                search: Some("стул".into()),
            })]
        );
    }

    #[test]
    fn test_sorted_catalog_uses_search_endpoint() {
        let c = controller();
        *c.api.search.borrow_mut() = Ok(SearchResponse {
            results: vec![lot(8), lot(4)],
            total: None,
        });
        c.dispatch(Action::SortChanged(SortBy::Profit));
        block_on(c.load_lots());

        assert_eq!(
            calls(&c),
            vec![Call::Search(SearchRequest {
                query: None,
                category: None,
                min_price: None,
                max_price: None,
                sort_by: Some(SortBy::Profit),
                limit: Some(50),
            })]
        );
        // server order is kept
        assert_eq!(state(&c).lots.value, vec![lot(8), lot(4)]);
    }

    #[test]
    fn test_home_entry_fetches_stats_and_categories_once() {
        let c = controller();
        block_on(c.enter_page(Page::Home));
        block_on(c.enter_page(Page::Catalog));
        block_on(c.enter_page(Page::Home));

        let stats_calls = calls(&c).iter().filter(|call| **call == Call::Stats).count();
        let category_calls = calls(&c).iter().filter(|call| **call == Call::Categories).count();
        assert_eq!(stats_calls, 1);
        assert_eq!(category_calls, 1);
    }

    #[test]
    fn test_failed_stats_are_retried_on_next_entry() {
        let c = controller();
        *c.api.stats.borrow_mut() = Err(ApiError::Network("refused".into()));
        block_on(c.enter_page(Page::Home));
        let s = state(&c);
        assert!(!s.stats.loading);
        assert!(s.stats.error.is_some());

        *c.api.stats.borrow_mut() = Ok(StatsSummary {
            total_lots: 42,
            ..Default::default()
        });
        block_on(c.enter_page(Page::Home));
        let s = state(&c);
        assert_eq!(s.stats.value.map(|v| v.total_lots), Some(42));
        assert_eq!(s.stats.error, None);
    }

    #[test]
    fn test_last_issued_request_wins() {
        let c = Rc::new(controller());
        let first = c.api.hold_next_lots();
        let second = c.api.hold_next_lots();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let c1 = c.clone();
        spawner.spawn_local(async move { c1.load_lots().await }).unwrap();
        pool.run_until_stalled();
        let c2 = c.clone();
        spawner.spawn_local(async move { c2.load_lots().await }).unwrap();
        pool.run_until_stalled();

        // responses arrive out of issue order
        second.send(Ok(vec![lot(2)])).unwrap();
        pool.run_until_stalled();
        assert_eq!(state(&c).lots.value, vec![lot(2)]);
        assert!(!state(&c).lots.loading);

        first.send(Ok(vec![lot(1)])).unwrap();
        pool.run_until_stalled();
        assert_eq!(state(&c).lots.value, vec![lot(2)]);
        assert!(!state(&c).lots.loading);
    }

    #[test]
    fn test_in_order_responses_keep_loading_until_latest() {
        let c = Rc::new(controller());
        let first = c.api.hold_next_lots();
        let second = c.api.hold_next_lots();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let cc = c.clone();
            spawner.spawn_local(async move { cc.load_lots().await }).unwrap();
            pool.run_until_stalled();
        }

        first.send(Ok(vec![lot(1)])).unwrap();
        pool.run_until_stalled();
        assert!(state(&c).lots.loading);
        assert!(state(&c).lots.value.is_empty());

        second.send(Err(ApiError::Http { status: 503 })).unwrap();
        pool.run_until_stalled();
        let s = state(&c);
        assert!(!s.lots.loading);
        assert!(s.lots.error.is_some());
    }

    #[test]
    fn test_stale_failure_leaves_newer_listing_alone() {
        let c = Rc::new(controller());
        let first = c.api.hold_next_lots();
        let second = c.api.hold_next_lots();

        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let cc = c.clone();
            spawner.spawn_local(async move { cc.load_lots().await }).unwrap();
            pool.run_until_stalled();
        }

        second.send(Ok(vec![lot(2)])).unwrap();
        pool.run_until_stalled();
        first.send(Err(ApiError::Http { status: 500 })).unwrap();
        pool.run_until_stalled();

        let s = state(&c);
        assert_eq!(s.lots.value, vec![lot(2)]);
        assert!(s.lots.error.is_none());
        assert!(!s.lots.loading);
    }

    #[test]
    fn test_favorite_while_signed_out_redirects() {
        let c = controller();
        *c.api.lots.borrow_mut() = Ok(vec![lot(1)]);
        block_on(c.enter_page(Page::Catalog));

        assert_eq!(c.toggle_favorite(1), FavoriteOutcome::RedirectedToAuth);
        let s = state(&c);
        assert_eq!(s.page, Page::Auth);
        assert!(s.favorites.is_empty());
    }

    #[test]
    fn test_favorite_toggle_is_reversible() {
        let c = controller();
        *c.api.lots.borrow_mut() = Ok(vec![lot(1), lot(2)]);
        block_on(c.load_lots());
        block_on(c.sign_in(Credentials::default()));
        let before = state(&c).favorites;

        assert_eq!(c.toggle_favorite(2), FavoriteOutcome::Added);
        assert_eq!(c.toggle_favorite(2), FavoriteOutcome::Removed);
        assert_eq!(state(&c).favorites, before);
        assert_eq!(c.toggle_favorite(42), FavoriteOutcome::Ignored);
    }

    #[test]
    fn test_showcase_has_no_favorites() {
        let c = controller_with(Flavor::Showcase, MockAuth::accepting());
        *c.api.lots.borrow_mut() = Ok(vec![lot(1)]);
        block_on(c.load_lots());
        assert_eq!(c.toggle_favorite(1), FavoriteOutcome::Ignored);
        assert_eq!(state(&c).page, Page::Home);
    }

    #[test]
    fn test_pass_through_product_makes_no_request() {
        let c = controller();
        block_on(c.open_product(lot(7)));

        assert!(calls(&c).is_empty());
        let s = state(&c);
        assert_eq!(s.page, Page::Product);
        assert_eq!(s.selected.value, Some(lot(7)));
    }

    #[test]
    fn test_showcase_product_is_fetched_by_id() {
        let c = controller_with(Flavor::Showcase, MockAuth::accepting());
        let mut detailed = lot(7);
        detailed.customer = Some("Акимат".into());
        *c.api.lot.borrow_mut() = Ok(detailed.clone());
        block_on(c.open_product(lot(7)));

        assert_eq!(calls(&c), vec![Call::GetLot(7)]);
        let s = state(&c);
        assert_eq!(s.page, Page::Product);
        assert_eq!(s.selected.value, Some(detailed));
    }

    #[test]
    fn test_missing_product_shows_error() {
        let c = controller_with(Flavor::Showcase, MockAuth::accepting());
        block_on(c.open_product(lot(7)));

        let s = state(&c);
        assert_eq!(s.selected.value, None);
        assert!(!s.selected.loading);
        assert_eq!(s.selected.error.as_deref(), Some("Лот не найден"));
    }

    #[test]
    fn test_back_goes_to_catalog_and_reloads() {
        let c = controller();
        block_on(c.open_product(lot(7)));
        block_on(c.go_back());
        assert_eq!(state(&c).page, Page::Catalog);
        assert!(calls(&c).iter().any(|call| matches!(call, Call::ListLots(_))));
    }

    #[test]
    fn test_sign_in_rejected() {
        let c = controller_with(Flavor::Marketplace, MockAuth::rejecting());
        block_on(c.enter_page(Page::Profile));
        block_on(c.sign_in(Credentials::default()));

        let s = state(&c);
        assert!(!s.is_authenticated());
        assert!(!s.session.loading);
        assert_eq!(s.session.error.as_deref(), Some("Неверный логин или пароль"));
        assert_eq!(s.page, Page::Auth);
    }

    #[test]
    fn test_sign_out() {
        let c = controller();
        block_on(c.sign_in(Credentials::default()));
        assert!(state(&c).is_authenticated());

        block_on(c.sign_out());
        assert!(c.auth.signed_out.get());
        assert!(!state(&c).is_authenticated());
    }
}
