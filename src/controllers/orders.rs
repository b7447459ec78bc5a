// Orders controller - /api/orders
//
// Same shape and status codes as the books controller.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use super::ValidatedJson;
use crate::entities::{EntityId, Order, OrderPayload};
use crate::error::ApiError;
use crate::server::AppState;
use crate::services::OrderService;

/// Each path is also served with a trailing slash
pub fn routes() -> Router<AppState> {
    let collection = || get(get_all_orders).post(add_order);
    let item = || get(get_order_by_id).put(update_order).delete(delete_order);

    Router::new()
        .route("/api/orders", collection())
        .route("/api/orders/", collection())
        .route("/api/orders/:id", item())
        .route("/api/orders/:id/", item())
}

pub fn list_orders<S: OrderService>(service: &S) -> Json<Vec<Order>> {
    Json(service.list_orders())
}

pub fn find_order<S: OrderService>(service: &S, id: EntityId) -> Result<Json<Order>, ApiError> {
    service.get_order(id).map(Json).ok_or_else(|| {
        debug!(order_id = id, "order not found");
        ApiError::NotFound
    })
}

/// 200 (not 201) with the stored order
pub fn create_order<S: OrderService>(service: &S, payload: OrderPayload) -> Json<Order> {
    let added = service.save_order(payload.into());
    debug!(order_id = added.order_id, "order created");
    Json(added)
}

pub fn replace_order<S: OrderService>(
    service: &S,
    id: EntityId,
    payload: OrderPayload,
) -> Result<StatusCode, ApiError> {
    match service.update_order(id, payload.into()) {
        Some(_) => {
            debug!(order_id = id, "order updated");
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            debug!(order_id = id, "update of unknown order");
            Err(ApiError::NotFound)
        }
    }
}

/// Always 200, whether or not the order existed
pub fn remove_order<S: OrderService>(service: &S, id: EntityId) -> StatusCode {
    let deleted = service.delete_order(id);
    debug!(order_id = id, deleted, "order delete requested");
    StatusCode::OK
}

async fn get_all_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    list_orders(&state.order_service())
}

async fn get_order_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Order>, ApiError> {
    find_order(&state.order_service(), id)
}

async fn add_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderPayload>,
) -> Json<Order> {
    create_order(&state.order_service(), payload)
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(payload): ValidatedJson<OrderPayload>,
) -> Result<StatusCode, ApiError> {
    replace_order(&state.order_service(), id, payload)
}

async fn delete_order(State(state): State<AppState>, Path(id): Path<EntityId>) -> StatusCode {
    remove_order(&state.order_service(), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::router;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get_order() {
        let app = router(AppState::new());

        let response = app
            .clone()
            .oneshot(post(
                "/api/orders",
                json!({ "customerName": "Ada", "totalAmount": 42.5 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/api/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "orderId": 1, "customerName": "Ada", "totalAmount": 42.5 })
        );
    }

    #[tokio::test]
    async fn test_order_missing_field_is_400() {
        let state = AppState::new();
        let app = router(state.clone());

        let response = app
            .oneshot(post("/api/orders", json!({ "customerName": "Ada" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.order_service().list_orders().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_delete_order() {
        let state = AppState::new();
        state
            .order_service()
            .save_order(Order::new("Ada", Decimal::new(10, 0)));
        let app = router(state.clone());

        let response = app
            .clone()
            .oneshot(
                Request::put("/api/orders/1")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "customerName": "Grace", "totalAmount": -3 }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        let stored = state.order_service().get_order(1).unwrap();
        assert_eq!(stored.customer_name, "Grace");
        assert_eq!(stored.total_amount, Decimal::new(-3, 0));

        // Unknown id: still 200
        let response = app
            .clone()
            .oneshot(Request::delete("/api/orders/999").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.order_service().list_orders().len(), 1);

        let response = app
            .oneshot(Request::delete("/api/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.order_service().list_orders().is_empty());
    }

    #[test]
    fn test_replace_order_outcomes() {
        let repo = crate::repository::OrderRepository::new();
        let service = crate::services::RepositoryOrderService::new(&repo);
        service.save_order(Order::new("Ada", Decimal::ONE));

        let payload = OrderPayload {
            customer_name: "Grace".to_string(),
            total_amount: Decimal::TEN,
        };

        assert_eq!(
            replace_order(&service, 1, payload.clone()).unwrap(),
            StatusCode::NO_CONTENT
        );
        assert!(matches!(
            replace_order(&service, 2, payload),
            Err(ApiError::NotFound)
        ));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(1).unwrap().customer_name, "Grace");
    }
}
