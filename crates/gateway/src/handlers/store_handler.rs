//! Store handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{NewStore, Store, NAME_REQUIRED_MESSAGE};

use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Log tags for unexpected failures, one per handler.
const STORES_POST: &str = "STORES_POST";
const STORES_GET: &str = "STORES_GET";
const STORE_GET: &str = "STORE_GET";

/// Store creation request
#[derive(Debug, ToSchema)]
pub struct CreateStoreRequest {
    /// Store display name
    #[schema(example = "My Store")]
    pub name: String,
}

/// Create store routes
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route("/:store_id", get(get_store))
}

/// Create a store owned by the caller
#[utoipa::path(
    post,
    path = "/api/stores",
    tag = "Stores",
    security(("bearer_auth" = [])),
    request_body = CreateStoreRequest,
    responses(
        (status = 201, description = "Store created", body = Store),
        (status = 400, description = "Name is required"),
        (status = 403, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn create_store(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<Store>)> {
    let store = create_for_user(&state, &current_user, body)
        .await
        .inspect_err(|err| err.report(STORES_POST))?;

    Ok((StatusCode::CREATED, Json(store)))
}

async fn create_for_user(
    state: &AppState,
    current_user: &CurrentUser,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Store> {
    let body = body.map_err(|rejection| {
        AppError::internal(format!("failed to read request body: {}", rejection.body_text()))
    })?;
    let new_store = parse_new_store(&body)?;
    state
        .store_service
        .create_store(&current_user.id, new_store)
        .await
}

/// List the caller's stores
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Stores",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stores the caller belongs to", body = Vec<Store>),
        (status = 403, description = "Unauthorized"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn list_stores(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Store>>> {
    let stores = state
        .store_service
        .list_stores(&current_user.id)
        .await
        .inspect_err(|err| err.report(STORES_GET))?;

    Ok(Json(stores))
}

/// Get one of the caller's stores
#[utoipa::path(
    get,
    path = "/api/stores/{store_id}",
    tag = "Stores",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID")
    ),
    responses(
        (status = 200, description = "Store", body = Store),
        (status = 403, description = "Unauthorized"),
        (status = 404, description = "Store not found or caller is not a member"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn get_store(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(store_id): Path<Uuid>,
) -> AppResult<Json<Store>> {
    let store = state
        .store_service
        .get_store(&current_user.id, store_id)
        .await
        .inspect_err(|err| err.report(STORE_GET))?;

    Ok(Json(store))
}

/// Decode a store creation body.
///
/// The body must be valid JSON and not `null`; anything else is an
/// unexpected failure. A missing or falsy `name` (`null`, `false`, `0`, `""`)
/// is a client error. A truthy `name` that is not a string cannot be stored
/// and is treated as unexpected as well.
pub fn parse_new_store(body: &[u8]) -> AppResult<NewStore> {
    let payload: Value = serde_json::from_slice(body)?;
    if payload.is_null() {
        return Err(AppError::internal("request body is null"));
    }

    match payload.get("name") {
        Some(Value::String(name)) => Ok(NewStore::new(name.as_str())?),
        Some(value) if is_truthy(value) => Err(AppError::internal(format!(
            "name must be a string, got {value}"
        ))),
        _ => Err(AppError::validation(NAME_REQUIRED_MESSAGE)),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> AppResult<NewStore> {
        parse_new_store(body.as_bytes())
    }

    #[test]
    fn parses_name() {
        let store = parse(r#"{"name": "My Store"}"#).unwrap();
        assert_eq!(store.name(), "My Store");
    }

    #[test]
    fn ignores_unknown_fields() {
        let store = parse(r#"{"name": "My Store", "currency": "EUR"}"#).unwrap();
        assert_eq!(store.name(), "My Store");
    }

    #[test]
    fn falsy_names_are_rejected_as_bad_request() {
        for body in [
            r#"{}"#,
            r#"{"name": null}"#,
            r#"{"name": ""}"#,
            r#"{"name": false}"#,
            r#"{"name": 0}"#,
            r#"[]"#,
            r#""My Store""#,
            r#"42"#,
        ] {
            let err = parse(body).unwrap_err();
            assert!(
                matches!(err, AppError::Validation(ref m) if m == "Name is required"),
                "body {body} gave {err:?}"
            );
        }
    }

    #[test]
    fn malformed_body_is_unexpected() {
        for body in ["", "{", "name=My+Store", "null"] {
            let err = parse(body).unwrap_err();
            assert!(err.is_unexpected(), "body {body:?} gave {err:?}");
        }
    }

    #[test]
    fn truthy_non_string_name_is_unexpected() {
        for body in [r#"{"name": 42}"#, r#"{"name": true}"#, r#"{"name": ["a"]}"#] {
            let err = parse(body).unwrap_err();
            assert!(err.is_unexpected(), "body {body} gave {err:?}");
        }
    }

    #[test]
    fn truthiness_follows_json_values() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&serde_json::json!(0.0)));
        assert!(is_truthy(&serde_json::json!(-1)));
        assert!(is_truthy(&serde_json::json!({})));
        assert!(is_truthy(&serde_json::json!(" ")));
    }
}
