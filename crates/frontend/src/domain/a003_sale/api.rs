//! Backend access for the sales page.
//!
//! `GET /sales`, `GET /products`, `GET /stores`, `DELETE /sales/{id}` for the
//! page itself; `POST /sales` and `PUT /sales/{id}` for the hosted dialogs.

use async_trait::async_trait;
use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_sale::aggregate::{Sale, SaleDto};
use gloo_net::http::{Request, Response};
use send_wrapper::SendWrapper;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use web_sys::{AbortController, AbortSignal};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiConfig;

/// `GET /sales` after the array check.
#[derive(Debug, Clone, PartialEq)]
pub enum SalesPayload {
    Accepted(Vec<Sale>),
    /// Anything that is not a JSON array, kept for the log line
    Rejected(Value),
}

impl SalesPayload {
    pub fn from_json(value: Value) -> Result<Self, ApiError> {
        match value {
            Value::Array(_) => Ok(Self::Accepted(serde_json::from_value(value)?)),
            other => Ok(Self::Rejected(other)),
        }
    }
}

/// Decode a collection where a missing payload means "no records".
pub fn collection_or_empty<T: DeserializeOwned>(
    value: Value,
    what: &'static str,
) -> Result<Vec<T>, ApiError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Err(ApiError::UnexpectedShape(what)),
    }
}

/// Parse a response body; an empty body reads as `null`.
pub fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[async_trait(?Send)]
pub trait SalesBackend {
    async fn list_sales(&self) -> Result<SalesPayload, ApiError>;
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;
    async fn list_stores(&self) -> Result<Vec<Store>, ApiError>;
    async fn delete_sale(&self, id: &str) -> Result<(), ApiError>;
    async fn create_sale(&self, dto: &SaleDto) -> Result<(), ApiError>;
    async fn update_sale(&self, id: &str, dto: &SaleDto) -> Result<(), ApiError>;
}

/// Backend handle that can cross into `Send + Sync` closures (dialogs, callbacks).
pub type SharedSalesBackend = Arc<dyn SalesBackend + Send + Sync>;

/// HTTP implementation over `gloo-net`.
///
/// All requests share one `AbortController`, so [`abort_in_flight`] cancels
/// whatever is still pending when the page goes away.
///
/// [`abort_in_flight`]: GlooSalesBackend::abort_in_flight
pub struct GlooSalesBackend {
    config: ApiConfig,
    abort: SendWrapper<Option<AbortController>>,
}

impl GlooSalesBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            abort: SendWrapper::new(AbortController::new().ok()),
        }
    }

    pub fn abort_in_flight(&self) {
        if let Some(controller) = (*self.abort).as_ref() {
            controller.abort();
        }
    }

    fn signal(&self) -> Option<AbortSignal> {
        (*self.abort).as_ref().map(AbortController::signal)
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let signal = self.signal();
        let response = Request::get(&self.config.url(path))
            .header("Accept", "application/json")
            .abort_signal(signal.as_ref())
            .send()
            .await?;
        let text = ensure_ok(response)?.text().await?;
        parse_body(&text)
    }
}

fn sale_path(id: &str) -> String {
    format!("/sales/{}", urlencoding::encode(id))
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

#[async_trait(?Send)]
impl SalesBackend for GlooSalesBackend {
    async fn list_sales(&self) -> Result<SalesPayload, ApiError> {
        SalesPayload::from_json(self.get_json("/sales").await?)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        collection_or_empty(self.get_json("/products").await?, "products")
    }

    async fn list_stores(&self) -> Result<Vec<Store>, ApiError> {
        collection_or_empty(self.get_json("/stores").await?, "stores")
    }

    async fn delete_sale(&self, id: &str) -> Result<(), ApiError> {
        let signal = self.signal();
        let response = Request::delete(&self.config.url(&sale_path(id)))
            .abort_signal(signal.as_ref())
            .send()
            .await?;
        ensure_ok(response)?;
        Ok(())
    }

    async fn create_sale(&self, dto: &SaleDto) -> Result<(), ApiError> {
        let signal = self.signal();
        let response = Request::post(&self.config.url("/sales"))
            .header("Accept", "application/json")
            .abort_signal(signal.as_ref())
            .json(dto)?
            .send()
            .await?;
        ensure_ok(response)?;
        Ok(())
    }

    async fn update_sale(&self, id: &str, dto: &SaleDto) -> Result<(), ApiError> {
        let signal = self.signal();
        let response = Request::put(&self.config.url(&sale_path(id)))
            .header("Accept", "application/json")
            .abort_signal(signal.as_ref())
            .json(dto)?
            .send()
            .await?;
        ensure_ok(response)?;
        Ok(())
    }
}
