use super::view_state::{CalcResults, Page, SearchMode};
use contracts::dashboards::d400_market_stats::StatsSummary;
use contracts::domain::a001_lot::request::SortBy;
use contracts::domain::a001_lot::Lot;
use contracts::system::auth::UserInfo;

/// Everything that can change [`ViewState`](super::ViewState).
///
/// `*Loaded` / `*Failed` carry the ticket returned when the matching
/// `*Requested` was applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Navigate(Page),
    /// Attach a lot from a list and show the product page
    OpenProduct(Lot),

    ProductRequested,
    ProductLoaded { ticket: u64, lot: Lot },
    ProductFailed { ticket: u64, message: String },

    StatsRequested,
    StatsLoaded { ticket: u64, stats: StatsSummary },
    StatsFailed { ticket: u64, message: String },

    CategoriesRequested,
    CategoriesLoaded { ticket: u64, categories: Vec<String> },
    CategoriesFailed { ticket: u64, message: String },

    LotsRequested,
    LotsLoaded { ticket: u64, lots: Vec<Lot> },
    LotsFailed { ticket: u64, message: String },

    SearchTextChanged(String),
    CategoryChanged(String),
    SortChanged(SortBy),

    BudgetInputChanged(String),
    MarginInputChanged(String),
    CalcRequested(SearchMode),
    CalcLoaded { ticket: u64, results: CalcResults },
    CalcFailed { ticket: u64, message: String },
    /// Input didn't pass validation, nothing was sent
    CalcRejected { mode: SearchMode, message: String },
    CalcCleared,

    FavoriteToggled(i64),

    SignInRequested,
    SignedIn { ticket: u64, user: UserInfo },
    SignInFailed { ticket: u64, message: String },
    SignedOut,
}
