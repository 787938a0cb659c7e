//! HTTP routes of the lookup slice.

use crate::Lookup;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::error;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use whub_derive::{api_handler, api_model};
use whub_domain::constants::LOOKUP_TAG;
use whub_domain::response::HandlerResponse;
use whub_kernel::server::ApiState;

/// A length or offset: a JSON number or a string of ASCII digits. Anything
/// else falls back to the field's default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumericParam {
    Number(u32),
    Digits(String),
}

/// Lookup request. Without `queryType` the top-level `letters`, `minLength` and
/// `maxLength` form a spellable query.
#[api_model]
pub struct LookupRequest {
    /// `spellable`, `startsWith` or `matchSubstring`
    pub query_type: Option<String>,
    pub query: Option<LookupQuery>,
    pub letters: Option<String>,
    pub min_length: Option<NumericParam>,
    pub max_length: Option<NumericParam>,
}

/// Variant fields of a typed lookup request.
#[api_model]
pub struct LookupQuery {
    /// Up to 16 letters (spellable)
    pub letters: Option<String>,
    /// Up to 5 letters (startsWith)
    pub starts_with: Option<String>,
    /// First substring offset, default 0 (matchSubstring)
    pub start: Option<NumericParam>,
    /// Exclusive last substring offset, default 2 (matchSubstring)
    pub end: Option<NumericParam>,
    /// Default 1
    pub min_length: Option<NumericParam>,
    /// Default 7
    pub max_length: Option<NumericParam>,
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(lookup_get, lookup_post))
}

#[api_handler(
    post,
    path = "/api/lookup",
    request_body = LookupRequest,
    responses(
        (status = OK, description = "`{result: {items, total}, query}` envelope"),
        (status = BAD_REQUEST, description = "Invalid query", body = String),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected error", body = String),
    ),
    tag = LOOKUP_TAG,
)]
async fn lookup_post(
    State(state): State<ApiState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => respond(&state, &payload).await,
        Err(rejection) => into_http(HandlerResponse::bad_request(rejection.body_text())),
    }
}

#[api_handler(
    get,
    path = "/api/lookup",
    params(
        ("queryType" = Option<String>, Query, description = "Other parameters then form `query`"),
        ("letters" = Option<String>, Query, description = "Letters of a spellable query"),
        ("startsWith" = Option<String>, Query, description = "Prefix of a startsWith query"),
        ("minLength" = Option<String>, Query, description = "Digits, default 1"),
        ("maxLength" = Option<String>, Query, description = "Digits, default 7"),
        ("start" = Option<String>, Query, description = "Digits, default 0"),
        ("end" = Option<String>, Query, description = "Digits, default 2"),
    ),
    responses(
        (status = OK, description = "`{result: {items, total}, query}` envelope"),
        (status = BAD_REQUEST, description = "Invalid query", body = String),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected error", body = String),
    ),
    tag = LOOKUP_TAG,
)]
async fn lookup_get(
    State(state): State<ApiState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    respond(&state, &query_payload(params)).await
}

async fn respond(state: &ApiState, payload: &Value) -> Response {
    let response = match state.try_get_slice::<Lookup>() {
        Ok(lookup) => lookup.handle(payload).await,
        Err(e) => {
            error!(error = %e, "Lookup slice is not registered");
            HandlerResponse::unexpected()
        }
    };
    into_http(response)
}

/// Rebuilds the request payload from query-string parameters.
///
/// With `queryType` present every other parameter moves into `query`; otherwise
/// the parameters are the payload.
fn query_payload(mut params: BTreeMap<String, String>) -> Value {
    let query_type = params.remove("queryType");
    let fields: Map<String, Value> =
        params.into_iter().map(|(key, value)| (key, Value::String(value))).collect();

    match query_type {
        Some(query_type) => {
            let mut payload = Map::new();
            payload.insert("queryType".to_owned(), Value::String(query_type));
            payload.insert("query".to_owned(), Value::Object(fields));
            Value::Object(payload)
        }
        None => Value::Object(fields),
    }
}

fn into_http(response: HandlerResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = HeaderMap::new();
    for (name, value) in &response.headers {
        if let (Ok(name), Ok(value)) =
            (HeaderName::try_from(name.as_str()), HeaderValue::from_str(value))
        {
            headers.insert(name, value);
        }
    }

    (status, headers, Json(response.body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
    }

    #[test]
    fn numeric_fields_accept_numbers_and_digit_strings() {
        let query: LookupQuery =
            serde_json::from_value(json!({"minLength": "3", "end": 4})).unwrap();
        assert_eq!(query.min_length, Some(NumericParam::Digits("3".to_owned())));
        assert_eq!(query.end, Some(NumericParam::Number(4)));
    }

    #[test]
    fn numeric_schema_documents_both_forms() {
        let schema = <NumericParam as utoipa::PartialSchema>::schema();
        let schema = serde_json::to_value(schema).unwrap();
        let variants = schema["oneOf"].as_array().unwrap();
        assert_eq!(variants.len(), 2);
    }

    #[test]
    fn legacy_parameters_stay_flat() {
        let payload = query_payload(params(&[("letters", "eilrst"), ("maxLength", "5")]));
        assert_eq!(payload, json!({"letters": "eilrst", "maxLength": "5"}));
    }

    #[test]
    fn typed_parameters_move_into_query() {
        let payload = query_payload(params(&[("queryType", "startsWith"), ("startsWith", "ca")]));
        assert_eq!(payload, json!({"queryType": "startsWith", "query": {"startsWith": "ca"}}));
    }

    #[test]
    fn handler_status_and_headers_are_kept() {
        let response = into_http(HandlerResponse::bad_request("nope"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("access-control-allow-origin").map(HeaderValue::as_bytes),
            Some(&b"*"[..])
        );
        assert_eq!(
            response.headers().get("content-type").map(HeaderValue::as_bytes),
            Some(&b"application/json"[..])
        );
    }
}
