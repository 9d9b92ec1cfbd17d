//! Axum route handlers for the catalog API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use catalog_core::{Product, ProductDraft, ProductPatch, RecordId, User, UserDraft, UserPatch};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{diagnostics, error::GatewayError, state::SharedState};

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(diagnostics::health))
        .route("/ready", get(diagnostics::ready))
        .route("/version", get(diagnostics::version))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{id}", get(get_product).put(update_product))
        .route("/api/slow", get(diagnostics::slow))
        .route("/api/error", get(diagnostics::always_fail))
        .route("/api/random", get(diagnostics::random))
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Request decoding ──────────────────────────────────────────────────────────

/// Parse a `{id}` path segment. Any integer is accepted; ids the store never
/// assigned (including negative ones) surface later as not found. `resource`
/// names the collection in the error message, e.g. `"user"` gives
/// `Invalid user ID`.
fn parse_id(raw: &str, resource: &str) -> Result<RecordId, GatewayError> {
    raw.parse()
        .map_err(|_| GatewayError::BadRequest(format!("Invalid {resource} ID")))
}

/// Unwrap a JSON body, turning any decode failure into a 400.
fn decode_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, GatewayError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejected request body");
            Err(GatewayError::BadRequest("Invalid request body".to_owned()))
        }
    }
}

async fn route_not_found() -> GatewayError {
    GatewayError::NotFound("Route not found".to_owned())
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// `GET /api/users` — every user, in no particular order.
pub async fn list_users(State(state): State<SharedState>) -> Json<Vec<User>> {
    Json(state.catalog.users.list())
}

/// `GET /api/users/{id}`
///
/// # Errors
/// [`GatewayError::BadRequest`] for a non-numeric id, [`GatewayError::NotFound`]
/// for an unknown one.
pub async fn get_user(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, GatewayError> {
    let id = parse_id(&raw_id, "user")?;
    Ok(Json(state.catalog.users.get(id)?))
}

/// `POST /api/users` — create a user and return it with `201 Created`.
///
/// # Errors
/// [`GatewayError::BadRequest`] if the body is malformed or `name`/`email`
/// is missing.
pub async fn create_user(
    State(state): State<SharedState>,
    payload: Result<Json<UserDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), GatewayError> {
    let draft = decode_body(payload)?;
    let user = state.catalog.users.create(draft)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /api/users/{id}` — merge the supplied non-empty fields.
///
/// # Errors
/// [`GatewayError::BadRequest`] for a bad id or body, [`GatewayError::NotFound`]
/// for an unknown id.
pub async fn update_user(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<User>, GatewayError> {
    let id = parse_id(&raw_id, "user")?;
    let patch = decode_body(payload)?;
    Ok(Json(state.catalog.users.update(id, patch)?))
}

/// `DELETE /api/users/{id}` — hard delete, `204 No Content` on success.
///
/// # Errors
/// [`GatewayError::BadRequest`] for a bad id, [`GatewayError::NotFound`] if
/// the user does not exist or was already deleted.
pub async fn delete_user(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, GatewayError> {
    let id = parse_id(&raw_id, "user")?;
    state.catalog.users.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Products ──────────────────────────────────────────────────────────────────

/// `GET /api/products`
pub async fn list_products(State(state): State<SharedState>) -> Json<Vec<Product>> {
    Json(state.catalog.products.list())
}

/// `GET /api/products/{id}`
///
/// # Errors
/// [`GatewayError::BadRequest`] for a non-numeric id, [`GatewayError::NotFound`]
/// for an unknown one.
pub async fn get_product(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, GatewayError> {
    let id = parse_id(&raw_id, "product")?;
    Ok(Json(state.catalog.products.get(id)?))
}

/// `POST /api/products`
///
/// # Errors
/// [`GatewayError::BadRequest`] if the body is malformed, `name` is missing or
/// `price` is not positive.
pub async fn create_product(
    State(state): State<SharedState>,
    payload: Result<Json<ProductDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), GatewayError> {
    let draft = decode_body(payload)?;
    let product = state.catalog.products.create(draft)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}`
///
/// # Errors
/// [`GatewayError::BadRequest`] for a bad id or body, [`GatewayError::NotFound`]
/// for an unknown id.
pub async fn update_product(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, GatewayError> {
    let id = parse_id(&raw_id, "product")?;
    let patch = decode_body(payload)?;
    Ok(Json(state.catalog.products.update(id, patch)?))
}
