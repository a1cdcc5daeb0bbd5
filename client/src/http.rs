//! reqwest implementation of [`Backend`].

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use campus_bites_common::api::{self, OrderReceipt, StatusUpdate};
use campus_bites_common::dish::{Dish, DishDraft, DishId};
use campus_bites_common::order::{Order, OrderDraft, OrderId, OrderStatus};

use crate::api::{receipt_into_id, Backend};
use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a request and return the body of a 2xx response.
    async fn send_raw(&self, request: RequestBuilder) -> Result<String, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: api::error_message(&body),
            });
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let body = self.send_raw(request).await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl Backend for HttpBackend {
    async fn list_dishes(&self) -> Result<Vec<Dish>, ClientError> {
        let url = self.config.url(api::DISHES_PATH);
        self.send(self.client.get(url)).await
    }

    async fn create_dish(&self, draft: &DishDraft) -> Result<Dish, ClientError> {
        let url = self.config.url(api::DISHES_PATH);
        self.send(self.client.post(url).json(draft)).await
    }

    async fn update_dish(&self, id: &DishId, draft: &DishDraft) -> Result<Dish, ClientError> {
        let url = self.config.url(&api::dish_path(id));
        self.send(self.client.put(url).json(draft)).await
    }

    async fn delete_dish(&self, id: &DishId) -> Result<(), ClientError> {
        let url = self.config.url(&api::dish_path(id));
        self.send_raw(self.client.delete(url)).await.map(drop)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ClientError> {
        let url = self.config.url(api::ORDERS_PATH);
        self.send(self.client.get(url)).await
    }

    async fn create_order(&self, order: &OrderDraft) -> Result<OrderId, ClientError> {
        let url = self.config.url(api::ORDERS_PATH);
        let receipt: OrderReceipt = self.send(self.client.post(url).json(order)).await?;
        receipt_into_id(receipt)
    }

    async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        let url = self.config.url(&api::order_path(id));
        self.send(self.client.put(url).json(&StatusUpdate { status }))
            .await
    }
}
