use std::cell::Cell;
use std::rc::Rc;

use crate::api::FlowLedgerClient;
use crate::components::RecordsTable;
use crate::view_state::ViewState;
use flowledger_shared::models::FlowRecord;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// 查看记录: every record across all customers, admin only.
#[function_component(AdminRecordsPage)]
pub fn admin_records_page() -> Html {
    let (i18n, _) = use_translation();
    let records = use_state(|| ViewState::<Vec<FlowRecord>>::Loading);

    {
        let records = records.clone();
        use_effect_with((), move |_| {
            let fresh = Rc::new(Cell::new(true));
            let guard = fresh.clone();
            spawn_local(async move {
                let client = FlowLedgerClient::shared();
                let result = client.admin_records().await;
                if fresh.get() {
                    records.set(ViewState::from_result(
                        result.map(|response| response.records),
                    ));
                }
            });
            move || guard.set(false)
        });
    }

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("admin_records.title") }</h1>
            {
                match &*records {
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
                    ViewState::Loaded(records) => html! {
                        <RecordsTable
                            records={records.clone()}
                            show_customer=true
                            empty_key="admin_records.empty"
                        />
                    },
                }
            }
        </div>
    }
}
