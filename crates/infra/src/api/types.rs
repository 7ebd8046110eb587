//! GraphQL request/response envelope
//!
//! Operations are typed through [`GraphQlOperation`]; the envelope that
//! carries them over the wire is generic.

use s21_domain::GraphQlErrorEntry;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named GraphQL operation with typed variables and response data
pub trait GraphQlOperation {
    /// Value sent as `operationName`
    const OPERATION_NAME: &'static str;

    /// Full query or mutation text, fragments included
    const QUERY: &'static str;

    type Variables: Serialize + Send + Sync;

    /// Shape of the `data` member of a successful response
    type ResponseData: DeserializeOwned;
}

/// Request body posted to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a V>,
    pub query: &'a str,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    /// Request for a typed operation
    pub fn for_operation<Op>(variables: &'a V) -> Self
    where
        Op: GraphQlOperation<Variables = V>,
    {
        Self {
            operation_name: Some(Op::OPERATION_NAME),
            variables: Some(variables),
            query: Op::QUERY,
        }
    }
}

/// Response envelope; `data` is decoded separately once `errors` is checked
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

impl GraphQlResponse {
    /// Server-reported errors, if the list is present and non-empty
    pub fn take_errors(&mut self) -> Option<Vec<GraphQlErrorEntry>> {
        self.errors.take().filter(|errors| !errors.is_empty())
    }
}
