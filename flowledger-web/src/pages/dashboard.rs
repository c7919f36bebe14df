use std::cell::Cell;
use std::rc::Rc;

use crate::api::FlowLedgerClient;
use crate::format::format_amount;
use crate::models::app_state::AppState;
use crate::view_state::ViewState;
use flowledger_shared::models::CustomerStats;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

/// Dashboard page component: the four aggregate flow figures for the
/// signed-in user.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let session = use_selector(|state: &AppState| state.session.clone());
    let stats = use_state(|| ViewState::<CustomerStats>::Loading);

    let user_id = session.as_ref().as_ref().map(|session| session.user_id);
    {
        let stats = stats.clone();
        use_effect_with(user_id, move |user_id| {
            let fresh = Rc::new(Cell::new(true));
            let guard = fresh.clone();
            if let Some(user_id) = *user_id {
                stats.set(ViewState::Loading);
                spawn_local(async move {
                    let client = FlowLedgerClient::shared();
                    let result = client.customer_stats(user_id).await;
                    // Dropped when the user has already navigated away.
                    if fresh.get() {
                        stats.set(ViewState::from_result(result));
                    }
                });
            }
            move || guard.set(false)
        });
    }

    let stat_tiles = |stats: &CustomerStats| -> Html {
        html! {
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.stats.completed") }</div>
                    <div class="stat-value text-primary">{ format!("¥{}", format_amount(stats.completed_flow)) }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-warning">
                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.stats.pending") }</div>
                    <div class="stat-value text-warning">{ format!("¥{}", format_amount(stats.pending_flow)) }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-success">
                        <Icon icon_id={IconId::HeroiconsOutlineBanknotes} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.stats.total") }</div>
                    <div class="stat-value text-success">{ format!("¥{}", format_amount(stats.total_flow)) }</div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-info">
                        <Icon icon_id={IconId::HeroiconsOutlineCalendarDays} class="w-8 h-8" />
                    </div>
                    <div class="stat-title">{ i18n.t("dashboard.stats.daily") }</div>
                    <div class="stat-value text-info">{ format!("¥{}", format_amount(stats.daily_flow)) }</div>
                </div>
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("dashboard.title") }</h1>
            {
                match &*stats {
                    ViewState::Loading => html! {
                        <div class="flex items-center gap-2">
                            <span class="loading loading-spinner"></span>
                            <span>{ i18n.t("common.loading") }</span>
                        </div>
                    },
                    ViewState::Failed(message) => html! {
                        <div class="alert alert-error">
                            <span>{ format!("{}: {message}", i18n.t("common.load_failed")) }</span>
                        </div>
                    },
                    ViewState::Loaded(stats) => stat_tiles(stats),
                }
            }
        </div>
    }
}
