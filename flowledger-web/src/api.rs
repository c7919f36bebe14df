use flowledger_shared::models::{
    Ack, AuthStatus, CustomerList, CustomerStats, ErrorResponse, LoginRequest, LoginResponse,
    NewRecord, NewTarget, ReconciliationReport, RecordsResponse,
};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<FlowLedgerClient> = OnceCell::new();
}

/// Failure of one API call. No retry or backoff exists anywhere: a failed
/// call surfaces here once and the caller renders it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx answer; `message` is the server's own wording when the body
    /// carried one, a status-code fallback otherwise.
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(reqwest::Error),
    /// 2xx answer whose body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),
}

impl ApiError {
    /// Status code of the failed response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Pick the user-facing message out of an error body: the API's
/// `{"message": ...}` envelope when present, a generic status line otherwise.
pub(crate) fn error_message_from_body(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP error: status {status}"))
}

/// Lightweight API client for the FlowLedger backend.
#[derive(Clone, Debug)]
pub struct FlowLedgerClient {
    base_url: String,
    client: Client,
}

impl FlowLedgerClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The one client the whole app shares; base URL comes from
    /// [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The backend session lives in a cookie on another origin, so every
    /// browser request must opt into sending credentials.
    fn with_credentials(request: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            request.fetch_credentials_include()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            request
        }
    }

    /// Single-attempt send + JSON decode shared by every endpoint.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::with_credentials(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http {
                status,
                message: error_message_from_body(status, &body),
            });
        }
        response.json().await.map_err(ApiError::Decode)
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.execute(self.client.post(self.api_url("login")).json(payload))
            .await
    }

    /// Terminate the current session. Callers treat failure as advisory.
    pub async fn logout(&self) -> Result<Ack, ApiError> {
        self.execute(self.client.post(self.api_url("logout"))).await
    }

    /// Startup session probe.
    pub async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.execute(self.client.get(self.api_url("auth/status")))
            .await
    }

    /// Dashboard figures for one user.
    pub async fn customer_stats(&self, user_id: i64) -> Result<CustomerStats, ApiError> {
        self.execute(self.client.get(self.api_url(&format!("customer/{user_id}/stats"))))
            .await
    }

    /// The signed-in customer's own records.
    pub async fn customer_records(&self) -> Result<RecordsResponse, ApiError> {
        self.execute(self.client.get(self.api_url("customer/records")))
            .await
    }

    /// Customer roster for the admin data-entry forms.
    pub async fn admin_customers(&self) -> Result<CustomerList, ApiError> {
        self.execute(self.client.get(self.api_url("admin/customers")))
            .await
    }

    /// Every record across customers (admin view).
    pub async fn admin_records(&self) -> Result<RecordsResponse, ApiError> {
        self.execute(self.client.get(self.api_url("admin/records")))
            .await
    }

    /// The 对账 report, aggregated by operator and by customer.
    pub async fn reconciliation(&self) -> Result<ReconciliationReport, ApiError> {
        self.execute(self.client.get(self.api_url("admin/reconciliation")))
            .await
    }

    /// Submit a monthly flow target.
    pub async fn create_target(&self, payload: &NewTarget) -> Result<Ack, ApiError> {
        self.execute(self.client.post(self.api_url("admin/targets")).json(payload))
            .await
    }

    /// Submit a manually entered record.
    pub async fn create_record(&self, payload: &NewRecord) -> Result<Ack, ApiError> {
        self.execute(self.client.post(self.api_url("admin/records")).json(payload))
            .await
    }

    /// Upload an Excel workbook of records. This is the one endpoint that
    /// bypasses the JSON request body: the file goes up as multipart
    /// form data under the `file` field.
    pub async fn import_excel(&self, file_name: String, bytes: Vec<u8>) -> Result<Ack, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);
        self.execute(
            self.client
                .post(self.api_url("admin/import-excel"))
                .multipart(form),
        )
        .await
    }
}
