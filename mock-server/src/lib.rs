//! In-memory slice of an offer-management REST API.
//!
//! Backs the core integration tests: every route sits behind the same
//! `Authorization` / `Api-Key` checks the client injects, and the 401
//! rejection carries a JSON error body so callers can exercise the
//! status-as-data contract over real HTTP.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub name: String,
    pub published: bool,
}

#[derive(Deserialize)]
pub struct CreateOffer {
    pub name: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Deserialize)]
pub struct UpdateOffer {
    pub name: Option<String>,
    pub published: Option<bool>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct OfferListing {
    pub offers: Vec<Offer>,
    pub count: usize,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Offer>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/sale/offers", get(list_offers).post(create_offer))
        .route(
            "/sale/offers/{id}",
            get(get_offer).put(update_offer).delete(delete_offer),
        )
        .layer(middleware::from_fn(require_auth))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reject requests missing a non-empty bearer token or API key, with a
/// JSON error body like a real API would send on 401.
async fn require_auth(request: Request, next: Next) -> Response {
    let headers = request.headers();
    let token_ok = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty());
    let key_ok = headers
        .get("api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| !key.is_empty());

    if !token_ok || !key_ok {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "missing or invalid credentials"})),
        )
            .into_response();
    }
    next.run(request).await
}

async fn list_offers(
    State(db): State<Db>,
    Query(query): Query<ListQuery>,
) -> Json<OfferListing> {
    let db = db.read().await;
    let mut offers: Vec<Offer> = db.values().cloned().collect();
    offers.sort_by(|a, b| a.id.cmp(&b.id));
    if let Some(limit) = query.limit {
        offers.truncate(limit);
    }
    let count = offers.len();
    Json(OfferListing { offers, count })
}

async fn create_offer(
    State(db): State<Db>,
    Json(input): Json<CreateOffer>,
) -> (StatusCode, Json<Offer>) {
    let offer = Offer {
        id: Uuid::new_v4(),
        name: input.name,
        published: input.published,
    };
    db.write().await.insert(offer.id, offer.clone());
    (StatusCode::CREATED, Json(offer))
}

async fn get_offer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Offer>, StatusCode> {
    let db = db.read().await;
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_offer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateOffer>,
) -> Result<Json<Offer>, StatusCode> {
    let mut db = db.write().await;
    let offer = db.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        offer.name = name;
    }
    if let Some(published) = input.published {
        offer.published = published;
    }
    Ok(Json(offer.clone()))
}

async fn delete_offer(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut db = db.write().await;
    db.remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
