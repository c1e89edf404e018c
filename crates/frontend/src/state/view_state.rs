use crate::shared::config::Flavor;
use contracts::dashboards::d400_market_stats::StatsSummary;
use contracts::domain::a001_lot::request::{SortBy, ALL_CATEGORIES};
use contracts::domain::a001_lot::Lot;
use contracts::system::auth::UserInfo;
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Catalog,
    Product,
    Auth,
    Profile,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Главная",
            Page::Catalog => "Каталог",
            Page::Product => "Лот",
            Page::Auth => "Вход",
            Page::Profile => "Кабинет",
        }
    }

    /// Pages that only exist when the flavor has accounts
    pub fn needs_accounts(&self) -> bool {
        matches!(self, Page::Auth | Page::Profile)
    }
}

/// Which calculator produced a result set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Budget,
    Margin,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Budget => "budget",
            SearchMode::Margin => "margin",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SearchMode::Budget => "wallet",
            SearchMode::Margin => "trend",
        }
    }
}

/// A slot filled from the server.
///
/// `generation` grows with every request issued for the slot; a response is
/// applied only if it carries the current generation (last issued wins).
#[derive(Clone, Debug, PartialEq)]
pub struct Remote<T> {
    pub value: T,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
    /// At least one request succeeded
    pub loaded: bool,
}

impl<T: Default> Default for Remote<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Remote<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            loading: false,
            error: None,
            generation: 0,
            loaded: false,
        }
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }

    /// Loaded, or on its way
    pub fn is_settled_or_pending(&self) -> bool {
        self.loaded || self.loading
    }

    pub(crate) fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub(crate) fn resolve(&mut self, ticket: u64, value: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.value = value;
        self.loading = false;
        self.loaded = true;
        self.error = None;
        true
    }

    /// The previous value stays on screen, the error is shown next to it
    pub(crate) fn fail(&mut self, ticket: u64, message: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.error = Some(message);
        true
    }
}

/// Outcome of a budget or target-profit search
#[derive(Clone, Debug, PartialEq)]
pub struct CalcResults {
    pub mode: SearchMode,
    /// Server order, never re-sorted here
    pub lots: Vec<Lot>,
    pub total: u64,
    /// Normalised amount the search was issued with
    pub query: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogFilter {
    pub search: String,
    pub category: String,
    pub sort: SortBy,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortBy::Newest,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub flavor: Flavor,
    pub page: Page,

    pub stats: Remote<Option<StatsSummary>>,
    /// Always starts with the "all" wildcard
    pub categories: Remote<Vec<String>>,
    pub lots: Remote<Vec<Lot>>,
    pub filter: CatalogFilter,

    pub budget_input: String,
    pub margin_input: String,
    pub calc: Remote<Option<CalcResults>>,
    /// Calculator whose request is in flight or last failed
    pub calc_mode: Option<SearchMode>,

    /// Lot shown on the product page
    pub selected: Remote<Option<Lot>>,

    pub session: Remote<Option<UserInfo>>,
    pub favorites: BTreeSet<i64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Flavor::default())
    }
}

impl ViewState {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            page: Page::Home,
            stats: Remote::default(),
            categories: Remote::new(vec![ALL_CATEGORIES.to_string()]),
            lots: Remote::default(),
            filter: CatalogFilter::default(),
            budget_input: String::new(),
            margin_input: String::new(),
            calc: Remote::default(),
            calc_mode: None,
            selected: Remote::default(),
            session: Remote::default(),
            favorites: BTreeSet::new(),
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.value.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.value.is_some()
    }

    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.contains(&id)
    }

    pub fn input(&self, mode: SearchMode) -> &str {
        match mode {
            SearchMode::Budget => &self.budget_input,
            SearchMode::Margin => &self.margin_input,
        }
    }

    pub fn is_calc_loading(&self, mode: SearchMode) -> bool {
        self.calc.loading && self.calc_mode == Some(mode)
    }

    /// Every lot the API has returned and that is still held in state
    pub fn known_lots(&self) -> impl Iterator<Item = &Lot> {
        let calc = self.calc.value.iter().flat_map(|c| c.lots.iter());
        self.lots
            .value
            .iter()
            .chain(calc)
            .chain(self.selected.value.iter())
    }

    pub fn knows_lot(&self, id: i64) -> bool {
        self.known_lots().any(|lot| lot.id == id)
    }

    /// Favorited lots that are currently loaded, first occurrence wins
    pub fn favorite_lots(&self) -> Vec<&Lot> {
        let mut seen = BTreeSet::new();
        self.known_lots()
            .filter(|lot| self.favorites.contains(&lot.id) && seen.insert(lot.id))
            .collect()
    }
}
