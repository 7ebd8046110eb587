//! GraphQL transport
//!
//! Executes one typed operation per call: obtains a bearer token, posts the
//! request envelope, and classifies the outcome in a fixed order:
//!
//! 1. Transport failure (network, timeout, cancellation)
//! 2. Non-200 status (`Http`, body kept verbatim)
//! 3. Undecodable envelope (`Decode`)
//! 4. Non-empty `errors` list (`GraphQl`), even when `data` is present
//! 5. `data` missing or not matching the operation's shape (`Decode`)

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use s21_common::context::RequestContext;
use s21_domain::constants::GRAPHQL_PATH;
use s21_domain::{ClientConfig, ClientError};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::auth::AccessTokenProvider;
use super::types::{GraphQlOperation, GraphQlRequest, GraphQlResponse};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Typed GraphQL client bound to one endpoint and one token provider
#[derive(Clone)]
pub struct GraphQlClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    endpoint: String,
    context_headers: Vec<(&'static str, String)>,
    debug_tracing: bool,
}

impl GraphQlClient {
    /// Create a client for `{config.base_url}/services/graphql`
    ///
    /// Context headers configured in `config` are captured once and sent
    /// with every request.
    pub fn new(
        config: &ClientConfig,
        http_client: HttpClient,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), GRAPHQL_PATH);
        let context_headers = config
            .context_headers()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();

        Self { http_client, auth, endpoint, context_headers, debug_tracing: config.debug_tracing }
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute `Op` with `variables` inside `ctx`
    ///
    /// The token lookup, the request and the body read all count against the
    /// context deadline.
    ///
    /// # Errors
    ///
    /// See the module docs for the classification order.
    #[instrument(skip(self, ctx, variables), fields(operation = Op::OPERATION_NAME))]
    pub async fn execute<Op>(
        &self,
        ctx: &RequestContext,
        variables: &Op::Variables,
    ) -> Result<Op::ResponseData, ClientError>
    where
        Op: GraphQlOperation,
    {
        let body = serde_json::to_vec(&GraphQlRequest::for_operation::<Op>(variables))
            .map_err(|e| ClientError::Validation(format!("failed to encode variables: {e}")))?;

        let token = self.auth.access_token(ctx).await?;

        let mut request = self
            .http_client
            .request(Method::POST, &self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in &self.context_headers {
            request = request.header(*name, value.as_str());
        }

        if self.debug_tracing {
            debug!(
                url = %self.endpoint,
                body = %String::from_utf8_lossy(&body),
                "GraphQL request"
            );
        }

        let (status, text) = ctx
            .run(async {
                let response = self.http_client.send(request.body(body)).await?;
                let status = response.status();
                if self.debug_tracing {
                    debug!(%status, headers = ?response.headers(), "GraphQL response headers");
                }
                let text = response.text().await.map_err(InfraError::from)?;
                Ok::<_, ClientError>((status, text))
            })
            .await
            .map_err(InfraError::from)??;

        if self.debug_tracing {
            debug!(%status, body_len = text.len(), body = %text, "GraphQL response");
        }

        if status != StatusCode::OK {
            return Err(ClientError::Http { status: status.as_u16(), body: text });
        }

        let data = decode_envelope(&text)?;
        serde_json::from_value(data).map_err(|e| {
            ClientError::Decode(format!("{} data has an unexpected shape: {e}", Op::OPERATION_NAME))
        })
    }
}

/// Parse the envelope and return its `data` member, or the classified failure
fn decode_envelope(text: &str) -> Result<Value, ClientError> {
    let mut envelope: GraphQlResponse = serde_json::from_str(text)
        .map_err(|e| ClientError::Decode(format!("invalid GraphQL envelope: {e}")))?;

    if let Some(errors) = envelope.take_errors() {
        warn!(count = errors.len(), first = %errors[0], "GraphQL errors in response");
        return Err(ClientError::GraphQl(errors));
    }

    envelope.data.ok_or_else(|| ClientError::Decode("response carried no data".to_string()))
}
