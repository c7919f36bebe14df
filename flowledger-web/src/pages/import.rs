use crate::api::FlowLedgerClient;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Pull the raw bytes out of the picked file through the browser.
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, ()> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|_| ())?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// 导入Excel: upload a workbook of records. The only non-JSON request in
/// the app; the workbook goes up as multipart form data.
#[function_component(ImportPage)]
pub fn import_page() -> Html {
    let (i18n, _) = use_translation();
    let file_input_ref = use_node_ref();
    let submitting = use_state(|| false);
    let outcome = use_state(|| None::<Result<String, String>>);

    let onsubmit = {
        let file_input_ref = file_input_ref.clone();
        let submitting = submitting.clone();
        let outcome = outcome.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let file = file_input_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                outcome.set(Some(Err(i18n.t("import.error.no_file"))));
                return;
            };
            submitting.set(true);
            outcome.set(None);
            let submitting = submitting.clone();
            let outcome = outcome.clone();
            let i18n = i18n.clone();
            spawn_local(async move {
                let result = match read_file_bytes(&file).await {
                    Ok(bytes) => {
                        let client = FlowLedgerClient::shared();
                        match client.import_excel(file.name(), bytes).await {
                            Ok(ack) if ack.success => {
                                Ok(ack.message.unwrap_or_else(|| i18n.t("import.success")))
                            }
                            Ok(ack) => {
                                Err(ack.message.unwrap_or_else(|| i18n.t("import.error.failed")))
                            }
                            Err(err) => Err(err.to_string()),
                        }
                    }
                    Err(()) => Err(i18n.t("import.error.failed")),
                };
                outcome.set(Some(result));
                submitting.set(false);
            });
        })
    };

    let is_busy = *submitting;

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("import.title") }</h1>
            <div class="card bg-base-100 shadow max-w-xl">
                <form class="card-body" onsubmit={onsubmit}>
                    <div class="form-control">
                        <label class="label" for="excel-file">
                            <span class="label-text">{ i18n.t("import.file_label") }</span>
                        </label>
                        <input
                            id="excel-file"
                            class="file-input file-input-bordered"
                            type="file"
                            accept=".xlsx,.xls"
                            ref={file_input_ref}
                        />
                    </div>
                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { i18n.t("import.submitting") } else { i18n.t("import.submit") }}
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
