//! Browser `fetch` implementation of the backend contract.
//!
//! Base URL comes from `CAMPUS_BITES_API_URL` at build time (see
//! [`ClientConfig::from_env`]).

use serde::de::DeserializeOwned;
use serde::Serialize;

use campus_bites_client::api::{receipt_into_id, Backend};
use campus_bites_client::config::ClientConfig;
use campus_bites_client::error::ClientError;
use campus_bites_common::api::{self, OrderReceipt, StatusUpdate};
use campus_bites_common::dish::{Dish, DishDraft, DishId};
use campus_bites_common::order::{Order, OrderDraft, OrderId, OrderStatus};

#[derive(Clone, Debug)]
pub struct FetchBackend {
    config: ClientConfig,
}

impl FetchBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ClientError> {
        let text = fetch_text(&self.config.url(path), method, body).await?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn call_with<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &str,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let json = serde_json::to_string(body).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.call(method, path, Some(json)).await
    }
}

impl Backend for FetchBackend {
    async fn list_dishes(&self) -> Result<Vec<Dish>, ClientError> {
        self.call("GET", api::DISHES_PATH, None).await
    }

    async fn create_dish(&self, draft: &DishDraft) -> Result<Dish, ClientError> {
        self.call_with("POST", api::DISHES_PATH, draft).await
    }

    async fn update_dish(&self, id: &DishId, draft: &DishDraft) -> Result<Dish, ClientError> {
        self.call_with("PUT", &api::dish_path(id), draft).await
    }

    async fn delete_dish(&self, id: &DishId) -> Result<(), ClientError> {
        let url = self.config.url(&api::dish_path(id));
        fetch_text(&url, "DELETE", None).await.map(drop)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ClientError> {
        self.call("GET", api::ORDERS_PATH, None).await
    }

    async fn create_order(&self, order: &OrderDraft) -> Result<OrderId, ClientError> {
        let receipt: OrderReceipt = self.call_with("POST", api::ORDERS_PATH, order).await?;
        receipt_into_id(receipt)
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        self.call_with("PUT", &api::order_path(id), &StatusUpdate { status })
            .await
    }
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn fetch_text(url: &str, method: &str, body: Option<String>) -> Result<String, ClientError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let transport = |what: &str, e: wasm_bindgen::JsValue| {
        ClientError::Transport(format!("{what}: {:?}", e))
    };

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);

    let has_body = body.is_some();
    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| transport("Failed to create request", e))?;

    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| transport("Failed to set header", e))?;
    }

    let window = web_sys::window().ok_or_else(|| ClientError::Transport("No window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| transport("Fetch failed", e))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ClientError::Transport("Response is not a Response object".into()))?;

    let text = JsFuture::from(resp.text().map_err(|e| transport("Failed to get text", e))?)
        .await
        .map_err(|e| transport("Failed to read body", e))?;

    let text_str = text
        .as_string()
        .ok_or_else(|| ClientError::Decode("Response body is not a string".into()))?;

    if !resp.ok() {
        return Err(ClientError::Status {
            status: resp.status(),
            message: api::error_message(&text_str),
        });
    }

    Ok(text_str)
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn fetch_text(_url: &str, _method: &str, _body: Option<String>) -> Result<String, ClientError> {
    Err(ClientError::Transport(
        "fetch only available in WASM".to_string(),
    ))
}
