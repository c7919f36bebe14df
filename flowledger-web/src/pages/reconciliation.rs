use std::cell::Cell;
use std::rc::Rc;

use crate::api::FlowLedgerClient;
use crate::format::format_amount;
use crate::view_state::ViewState;
use flowledger_shared::models::ReconciliationReport;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// 对账报表: totals per operator and per customer.
#[function_component(ReconciliationPage)]
pub fn reconciliation_page() -> Html {
    let (i18n, _) = use_translation();
    let report = use_state(|| ViewState::<ReconciliationReport>::Loading);

    {
        let report = report.clone();
        use_effect_with((), move |_| {
            let fresh = Rc::new(Cell::new(true));
            let guard = fresh.clone();
            spawn_local(async move {
                let client = FlowLedgerClient::shared();
                let result = client.reconciliation().await;
                if fresh.get() {
                    report.set(ViewState::from_result(result));
                }
            });
            move || guard.set(false)
        });
    }

    let report_tables = |report: &ReconciliationReport| -> Html {
        if report.is_empty() {
            return html! {
                <div class="alert alert-info">
                    <span>{ i18n.t("reconciliation.empty") }</span>
                </div>
            };
        }
        html! {
            <div class="space-y-6">
                if !report.by_operator.is_empty() {
                    <section>
                        <h2 class="text-xl font-semibold mb-2">{ i18n.t("reconciliation.by_operator") }</h2>
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{ i18n.t("reconciliation.header.operator") }</th>
                                        <th>{ i18n.t("reconciliation.header.total") }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for report.by_operator.iter().map(|item| html! {
                                        <tr>
                                            <td>{ item.operator.clone().unwrap_or_else(|| i18n.t("reconciliation.unassigned")) }</td>
                                            <td>{ format!("¥{}", format_amount(item.total)) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </section>
                }
                if !report.by_customer.is_empty() {
                    <section>
                        <h2 class="text-xl font-semibold mb-2">{ i18n.t("reconciliation.by_customer") }</h2>
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{ i18n.t("reconciliation.header.customer") }</th>
                                        <th>{ i18n.t("reconciliation.header.total") }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for report.by_customer.iter().map(|item| html! {
                                        <tr>
                                            <td>{ item.customer_name.clone().unwrap_or_else(|| item.customer_id.to_string()) }</td>
                                            <td>{ format!("¥{}", format_amount(item.total)) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </section>
                }
            </div>
        }
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("reconciliation.title") }</h1>
            {
                match &*report {
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
                    ViewState::Loaded(report) => report_tables(report),
                }
            }
        </div>
    }
}
