//! Remote data gateway. One function per (entity, operation) pair;
//! every failure is logged and then propagated unmodified as the
//! backend-supplied message. No retries, no local timeouts.

use dioxus::logger::tracing::error;
use urlencoding::encode;
use wasm_bindgen::JsCast;

use crate::constants::DEFAULT_API_BASE;
use crate::models::*;

fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

async fn error_body(resp: &web_sys::Response) -> String {
    let text = match resp.text() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string()),
        Err(_) => None,
    };
    text.filter(|t| !t.is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", resp.status()))
}

// Shared fetch with credentials; non-2xx bodies become the error string.
async fn fetch(method: &str, url: &str, body: Option<String>) -> Result<web_sys::Response, String> {
    use web_sys::{RequestCredentials, RequestInit, RequestMode};

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);

    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
        let headers = web_sys::Headers::new().map_err(|_| "Failed to create headers")?;
        headers
            .set("Content-Type", "application/json")
            .map_err(|_| "Failed to set header")?;
        opts.set_headers(&headers);
    }

    let window = web_sys::window().ok_or("No window")?;
    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|_| "Failed to create request")?;

    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| {
            error!("{} {}: network request failed", method, url);
            "Network request failed".to_string()
        })?;

    let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| "Invalid response")?;

    if !resp.ok() {
        let message = error_body(&resp).await;
        error!("{} {} failed: {}", method, url, message);
        return Err(message);
    }

    Ok(resp)
}

async fn request<T: serde::de::DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, String> {
    let resp = fetch(method, url, body).await?;
    let json = wasm_bindgen_futures::JsFuture::from(resp.json().map_err(|_| "Failed to get json")?)
        .await
        .map_err(|_| "Failed to parse json")?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

async fn request_no_body(method: &str, url: &str) -> Result<(), String> {
    fetch(method, url, None).await.map(|_| ())
}

fn to_json<T: serde::Serialize>(payload: &T) -> Result<String, String> {
    serde_json::to_string(payload).map_err(|e| e.to_string())
}

// Auth API

pub async fn register(payload: RegisterPayload) -> Result<SessionUser, String> {
    let body = to_json(&payload)?;
    request("POST", &format!("{}/auth/register", api_base()), Some(body)).await
}

pub async fn login(payload: LoginPayload) -> Result<SessionUser, String> {
    let body = to_json(&payload)?;
    request("POST", &format!("{}/auth/login", api_base()), Some(body)).await
}

pub async fn get_me() -> Result<SessionUser, String> {
    request("GET", &format!("{}/auth/me", api_base()), None).await
}

pub async fn logout() -> Result<(), String> {
    request_no_body("POST", &format!("{}/auth/logout", api_base())).await
}

// Cards API

pub async fn get_cards() -> Result<Vec<Card>, String> {
    request("GET", &format!("{}/cards", api_base()), None).await
}

pub async fn create_card(payload: CreateCardPayload) -> Result<Card, String> {
    let body = to_json(&payload)?;
    request("POST", &format!("{}/cards", api_base()), Some(body)).await
}

// Transactions API
//
// Rows come back with the author email joined in for linked accounts.

pub async fn get_transactions() -> Result<Vec<Transaction>, String> {
    request("GET", &format!("{}/transactions", api_base()), None).await
}

pub async fn create_transaction(payload: CreateTransactionPayload) -> Result<Transaction, String> {
    let body = to_json(&payload)?;
    request("POST", &format!("{}/transactions", api_base()), Some(body)).await
}

// Budgets API

pub async fn get_budgets() -> Result<Vec<Budget>, String> {
    request("GET", &format!("{}/budgets", api_base()), None).await
}

pub async fn create_budget(payload: CreateBudgetPayload) -> Result<Budget, String> {
    let body = to_json(&payload)?;
    request("POST", &format!("{}/budgets", api_base()), Some(body)).await
}

// Connections API

pub async fn get_connections() -> Result<Vec<Connection>, String> {
    request("GET", &format!("{}/connections", api_base()), None).await
}

/// Remote procedure matching the email to an account server-side.
/// Returns the backend's human-readable status message; unknown
/// recipients or duplicate connections fail with the backend's error.
pub async fn send_connection_invite(email: &str) -> Result<String, String> {
    let body = to_json(&SendInvitePayload {
        email: email.to_string(),
    })?;
    let resp: InviteResponse = request(
        "POST",
        &format!("{}/connections/invite", api_base()),
        Some(body),
    )
    .await?;
    Ok(resp.message)
}

pub async fn respond_connection(id: &str, status: ConnectionStatus) -> Result<Connection, String> {
    let body = to_json(&RespondConnectionPayload { status })?;
    request(
        "PATCH",
        &format!("{}/connections/{}", api_base(), encode(id)),
        Some(body),
    )
    .await
}
