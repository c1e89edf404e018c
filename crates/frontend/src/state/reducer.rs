use super::action::Action;
use super::input::digits_only;
use super::view_state::{Page, ViewState};
use contracts::domain::a001_lot::request::{is_wildcard_category, ALL_CATEGORIES};

/// Pure state transition.
pub fn reduce(mut state: ViewState, action: Action) -> ViewState {
    match action {
        Action::Navigate(page) => {
            state.page = resolve_page(&state, page);
        }
        Action::OpenProduct(lot) => {
            state.selected.begin();
            let ticket = state.selected.generation;
            state.selected.resolve(ticket, Some(lot));
            state.page = Page::Product;
        }

        Action::ProductRequested => {
            state.selected.begin();
            state.selected.value = None;
        }
        Action::ProductLoaded { ticket, lot } => {
            state.selected.resolve(ticket, Some(lot));
        }
        Action::ProductFailed { ticket, message } => {
            state.selected.fail(ticket, message);
        }

        Action::StatsRequested => {
            state.stats.begin();
        }
        Action::StatsLoaded { ticket, stats } => {
            state.stats.resolve(ticket, Some(stats));
        }
        Action::StatsFailed { ticket, message } => {
            state.stats.fail(ticket, message);
        }

        Action::CategoriesRequested => {
            state.categories.begin();
        }
        Action::CategoriesLoaded { ticket, categories } => {
            let mut options = vec![ALL_CATEGORIES.to_string()];
            for c in categories {
                if !is_wildcard_category(&c) && !options.contains(&c) {
                    options.push(c);
                }
            }
            state.categories.resolve(ticket, options);
        }
        Action::CategoriesFailed { ticket, message } => {
            state.categories.fail(ticket, message);
        }

        Action::LotsRequested => {
            state.lots.begin();
        }
        Action::LotsLoaded { ticket, lots } => {
            state.lots.resolve(ticket, lots);
        }
        Action::LotsFailed { ticket, message } => {
            state.lots.fail(ticket, message);
        }

        Action::SearchTextChanged(text) => {
            state.filter.search = text;
        }
        Action::CategoryChanged(category) => {
            state.filter.category = if is_wildcard_category(&category) {
                ALL_CATEGORIES.to_string()
            } else {
                category
            };
        }
        Action::SortChanged(sort) => {
            state.filter.sort = sort;
        }

        Action::BudgetInputChanged(raw) => {
            state.budget_input = digits_only(&raw);
        }
        Action::MarginInputChanged(raw) => {
            state.margin_input = digits_only(&raw);
        }
        Action::CalcRequested(mode) => {
            state.calc.begin();
            state.calc_mode = Some(mode);
        }
        Action::CalcLoaded { ticket, results } => {
            state.calc.resolve(ticket, Some(results));
        }
        Action::CalcFailed { ticket, message } => {
            state.calc.fail(ticket, message);
        }
        Action::CalcRejected { mode, message } => {
            // a pending request keeps its own loading flag and mode
            if !state.calc.loading {
                state.calc.error = Some(message);
                state.calc_mode = Some(mode);
            }
        }
        Action::CalcCleared => {
            let generation = state.calc.generation;
            state.calc = Default::default();
            // responses still in flight must stay stale
            state.calc.generation = generation + 1;
            state.calc_mode = None;
        }

        Action::FavoriteToggled(id) => {
            if state.is_authenticated() && state.flavor.has_accounts() {
                if state.favorites.contains(&id) {
                    state.favorites.remove(&id);
                } else if state.knows_lot(id) {
                    state.favorites.insert(id);
                }
            }
        }

        Action::SignInRequested => {
            state.session.begin();
        }
        Action::SignedIn { ticket, user } => {
            if state.session.resolve(ticket, Some(user)) && state.page == Page::Auth {
                state.page = Page::Home;
            }
        }
        Action::SignInFailed { ticket, message } => {
            state.session.fail(ticket, message);
        }
        Action::SignedOut => {
            let generation = state.session.generation;
            state.session = Default::default();
            state.session.generation = generation + 1;
            state.favorites.clear();
            state.page = Page::Home;
        }
    }
    state
}

fn resolve_page(state: &ViewState, requested: Page) -> Page {
    if requested.needs_accounts() && !state.flavor.has_accounts() {
        return state.page;
    }
    if requested == Page::Profile && !state.is_authenticated() {
        return Page::Auth;
    }
    requested
}
