use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Operator, OperatorId, Order, OrderId},
    error::ErrorBody,
    protocol::{AssignOperatorRequest, OperatorListQuery},
};
use tracing::debug;
use url::Url;

use crate::error::{ClientError, RequestContext};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// The three calls the order detail view makes against the warehouse API.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn fetch_order(&self, order_id: OrderId) -> Result<Order, ClientError>;
    async fn list_active_operators(&self) -> Result<Vec<Operator>, ClientError>;
    async fn assign_operator(
        &self,
        order_id: OrderId,
        operator_id: OperatorId,
    ) -> Result<Order, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpOrdersApi {
    http: Client,
    base_url: String,
}

impl HttpOrdersApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn json_request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
    }
}

#[async_trait]
impl OrdersApi for HttpOrdersApi {
    async fn fetch_order(&self, order_id: OrderId) -> Result<Order, ClientError> {
        let url = self.endpoint(&format!("orders/{}/", order_id.0));
        debug!(%url, "fetching order detail");
        let response = self.json_request(self.http.get(url)).send().await?;
        read_json(RequestContext::OrderDetail, response).await
    }

    async fn list_active_operators(&self) -> Result<Vec<Operator>, ClientError> {
        let url = self.endpoint("operators");
        debug!(%url, "fetching active operators");
        let response = self
            .json_request(self.http.get(url))
            .query(&OperatorListQuery::active_only())
            .send()
            .await?;
        read_json(RequestContext::OperatorList, response).await
    }

    async fn assign_operator(
        &self,
        order_id: OrderId,
        operator_id: OperatorId,
    ) -> Result<Order, ClientError> {
        let url = self.endpoint(&format!("orders/{}/assign-operator/", order_id.0));
        debug!(%url, operator_id = operator_id.0, "assigning operator");
        let response = self
            .json_request(self.http.put(url))
            .json(&AssignOperatorRequest { operator_id })
            .send()
            .await?;
        read_json(RequestContext::AssignOperator, response).await
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let parsed = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    Ok(trimmed.to_string())
}

async fn read_json<T: DeserializeOwned>(
    context: RequestContext,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let detail = if context.reads_error_detail() {
            let body = response.bytes().await.unwrap_or_default();
            ErrorBody::from_slice(&body).message().map(str::to_owned)
        } else {
            None
        };
        return Err(ClientError::status(context, status, detail));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|source| ClientError::Decode { context, source })
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
