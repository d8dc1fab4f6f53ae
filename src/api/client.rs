//! HTTP API Client
//!
//! Functions for communicating with the assistant REST API.

use gloo_net::http::{Request, Response};

use super::dto::{AddOrderResponse, ApiErrorBody, NewOrder, QueryRequest, QueryResponse};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Ask the assistant a question and return its answer text
pub async fn query(config: &ClientConfig, text: &str) -> ClientResult<String> {
    let response = Request::post(&config.query_url())
        .json(&QueryRequest { query: text })
        .map_err(|e| ClientError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(&response).await);
    }

    let body: QueryResponse = response
        .json()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))?;

    Ok(body.answer)
}

/// Submit a new order
///
/// The backend reports logical failures as `{success: false}`, sometimes
/// with a 500 status, so the body is decoded regardless of status.
pub async fn add_order(config: &ClientConfig, order: &NewOrder) -> ClientResult<AddOrderResponse> {
    let response = Request::post(&config.add_url())
        .json(order)
        .map_err(|e| ClientError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    match response.json::<AddOrderResponse>().await {
        Ok(body) => Ok(body),
        Err(_) if !response.ok() => Err(ClientError::status(response.status(), None)),
        Err(e) => Err(ClientError::Parse(e.to_string())),
    }
}

async fn status_error(response: &Response) -> ClientError {
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    ClientError::status(response.status(), message)
}
