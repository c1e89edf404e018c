use leptos::prelude::*;

use crate::domain::a001_lot::ui::card::LotCard;
use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use crate::state::{Page, ViewState};
use contracts::domain::a001_lot::Lot;

/// Favorite lots that can be shown, plus how many favorites are not loaded right now
pub fn favorites_overview(state: &ViewState) -> (Vec<Lot>, usize) {
    let shown: Vec<Lot> = state.favorite_lots().into_iter().cloned().collect();
    let hidden = state.favorites.len().saturating_sub(shown.len());
    (shown, hidden)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let app = use_app();
    let user = Memo::new(move |_| app.state.with(|s| s.user().cloned()));
    let overview = Memo::new(move |_| app.state.with(favorites_overview));

    let header = move || {
        user.get().map(|u| {
            let email = u.email.clone().unwrap_or_default();
            view! {
                <div class="profile__user">
                    <span class="profile__avatar">{icon("user")}</span>
                    <div>
                        <h2>{u.username.clone()}</h2>
                        <p class="muted">{email}</p>
                    </div>
                </div>
            }
        })
    };

    let favorites = move || {
        let (lots, hidden) = overview.get();
        let note = (hidden > 0).then(|| {
            view! { <p class="muted">{format!("Ещё {} в избранном, откройте их в каталоге", hidden)}</p> }
        });
        if lots.is_empty() {
            return view! {
                <div class="empty-state">
                    <div class="empty-state__icon">{icon("heartEmpty")}</div>
                    <p>"Пока нет избранных лотов"</p>
                    <button class="button button--secondary" on:click=move |_| app.navigate(Page::Catalog)>
                        "В каталог"
                    </button>
                    {note}
                </div>
            }
            .into_any();
        }
        view! {
            <div class="lot-grid">
                {lots.into_iter().map(|lot| view! { <LotCard lot=lot /> }).collect_view()}
            </div>
            {note}
        }
        .into_any()
    };

    view! {
        <div class="page page--profile">
            {header}
            <h2 class="page__title">{icon("heart")}" Избранное"</h2>
            {favorites}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, Action};
    use contracts::system::auth::UserInfo;

    fn lot(id: i64) -> Lot {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    #[test]
    fn test_favorites_overview_counts_unloaded() {
        let mut state = ViewState::default();
        state = reduce(state, Action::SignInRequested);
        let ticket = state.session.generation;
        state = reduce(
            state,
            Action::SignedIn {
                ticket,
                user: UserInfo {
                    id: 1,
                    username: "demo".into(),
                    email: None,
                    is_admin: false,
                },
            },
        );
        state = reduce(state, Action::LotsRequested);
        let ticket = state.lots.generation;
        state = reduce(state, Action::LotsLoaded { ticket, lots: vec![lot(1), lot(2)] });
        state = reduce(state, Action::FavoriteToggled(1));
        state = reduce(state, Action::FavoriteToggled(2));

        // a new listing no longer holds lot 2
        state = reduce(state, Action::LotsRequested);
        let ticket = state.lots.generation;
        state = reduce(state, Action::LotsLoaded { ticket, lots: vec![lot(1)] });

        let (shown, hidden) = favorites_overview(&state);
        assert_eq!(shown.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(hidden, 1);
    }
}
