use std::cell::Cell;
use std::rc::Rc;

use crate::api::FlowLedgerClient;
use crate::components::form_validation::{
    ValidationError, validate_amount, validate_customer, validate_year_month,
};
use crate::view_state::ViewState;
use flowledger_shared::models::{CustomerSummary, NewTarget};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// 添加目标: set a customer's monthly flow target.
#[function_component(AddTargetPage)]
pub fn add_target_page() -> Html {
    let (i18n, _) = use_translation();
    let customers = use_state(|| ViewState::<Vec<CustomerSummary>>::Loading);
    let customer = use_state(String::new);
    let month = use_state(String::new);
    let amount = use_state(String::new);
    let form_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let outcome = use_state(|| None::<Result<String, String>>);

    {
        let customers = customers.clone();
        use_effect_with((), move |_| {
            let fresh = Rc::new(Cell::new(true));
            let guard = fresh.clone();
            spawn_local(async move {
                let client = FlowLedgerClient::shared();
                let result = client.admin_customers().await;
                if fresh.get() {
                    customers.set(ViewState::from_result(
                        result.map(|response| response.customers),
                    ));
                }
            });
            move || guard.set(false)
        });
    }

    let on_customer_change = {
        let customer = customer.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                customer.set(select.value());
            }
        })
    };

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                month.set(input.value());
            }
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                amount.set(input.value());
            }
        })
    };

    let onsubmit = {
        let customer = customer.clone();
        let month = month.clone();
        let amount = amount.clone();
        let form_error = form_error.clone();
        let submitting = submitting.clone();
        let outcome = outcome.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            form_error.set(None);

            let customer_id = match validate_customer(&customer) {
                Ok(id) => id,
                Err(_) => {
                    form_error.set(Some(i18n.t("form.error.customer_required")));
                    return;
                }
            };
            let year_month = match validate_year_month(&month) {
                Ok(value) => value,
                Err(ValidationError::Required) => {
                    form_error.set(Some(i18n.t("form.error.month_required")));
                    return;
                }
                Err(_) => {
                    form_error.set(Some(i18n.t("form.error.month_invalid")));
                    return;
                }
            };
            let amount_value = match validate_amount(&amount) {
                Ok(value) => value,
                Err(ValidationError::Required) => {
                    form_error.set(Some(i18n.t("form.error.amount_required")));
                    return;
                }
                Err(_) => {
                    form_error.set(Some(i18n.t("form.error.amount_invalid")));
                    return;
                }
            };

            submitting.set(true);
            outcome.set(None);
            let submitting = submitting.clone();
            let outcome = outcome.clone();
            let i18n = i18n.clone();
            spawn_local(async move {
                let client = FlowLedgerClient::shared();
                let payload = NewTarget {
                    customer_id,
                    year_month,
                    amount: amount_value,
                };
                let result = match client.create_target(&payload).await {
                    Ok(ack) if ack.success => {
                        Ok(ack.message.unwrap_or_else(|| i18n.t("target.success")))
                    }
                    Ok(ack) => Err(ack.message.unwrap_or_else(|| i18n.t("common.submit_failed"))),
                    Err(err) => Err(err.to_string()),
                };
                outcome.set(Some(result));
                submitting.set(false);
            });
        })
    };

    let is_busy = *submitting;

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("target.title") }</h1>
            <div class="card bg-base-100 shadow max-w-xl">
                <form class="card-body" onsubmit={onsubmit}>
                    <div class="form-control">
                        <label class="label" for="target-customer">
                            <span class="label-text">{ i18n.t("target.customer") }</span>
                        </label>
                        <select
                            id="target-customer"
                            class="select select-bordered"
                            onchange={on_customer_change}
                        >
                            <option value="" selected={(*customer).is_empty()}>
                                { i18n.t("form.select_placeholder") }
                            </option>
                            {
                                match &*customers {
                                    ViewState::Loaded(customers) => html! {
                                        { for customers.iter().map(|entry| html! {
                                            <option value={entry.id.to_string()}>{ &entry.username }</option>
                                        }) }
                                    },
                                    _ => html! {},
                                }
                            }
                        </select>
                        if let ViewState::Failed(message) = &*customers {
                            <span class="label-text-alt text-error mt-1">
                                { format!("{}: {message}", i18n.t("common.load_failed")) }
                            </span>
                        }
                    </div>
                    <div class="form-control">
                        <label class="label" for="target-month">
                            <span class="label-text">{ i18n.t("target.month") }</span>
                        </label>
                        <input
                            id="target-month"
                            class="input input-bordered"
                            type="month"
                            value={(*month).clone()}
                            oninput={on_month_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="target-amount">
                            <span class="label-text">{ i18n.t("target.amount") }</span>
                        </label>
                        <input
                            id="target-amount"
                            class="input input-bordered"
                            type="number"
                            min="0"
                            step="any"
                            value={(*amount).clone()}
                            oninput={on_amount_change}
                        />
                    </div>
                    if let Some(message) = &*form_error {
                        <div class="alert alert-warning mt-2"><span>{message.clone()}</span></div>
                    }
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { i18n.t("target.submitting") } else { i18n.t("target.submit") }}
                        </button>
                    </div>
                    {
                        match &*outcome {
                            Some(Ok(message)) => html! {
                                <div class="alert alert-success mt-4"><span>{message.clone()}</span></div>
                            },
                            Some(Err(message)) => html! {
                                <div class="alert alert-error mt-4"><span>{message.clone()}</span></div>
                            },
                            None => html! {},
                        }
                    }
                </form>
            </div>
        </div>
    }
}
