use actix_web::{web, HttpResponse};

use crate::application::dto::{CreateOrderRequest, OrderItemRequest};
use crate::application::order_service::OrderService;
use crate::errors::AppError;

/// POST /orders
///
/// Creates a new order from the request body: the aggregate is built and
/// validated, persisted as a whole, and an `OrderCreated` event is
/// published. Diesel is blocking, so the service call runs on the blocking
/// thread pool via `web::block`.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = crate::application::dto::OrderResponse),
        (status = 400, description = "Order failed validation"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let service = service.into_inner();
    let body = body.into_inner();

    let response = web::block(move || service.create_order(body))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(response))
}

/// GET /orders/{id}
///
/// Returns the order together with its items.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order surrogate id"),
    ),
    responses(
        (status = 200, description = "Order found", body = crate::application::dto::OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let service = service.into_inner();
    let order_id = path.into_inner();

    let response = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(response))
}

/// GET /orders
///
/// Returns every order with its items. An empty store yields an empty
/// array, not an error.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = [crate::application::dto::OrderResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<OrderService>) -> Result<HttpResponse, AppError> {
    let service = service.into_inner();

    let response = web::block(move || service.get_all_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(response))
}

/// POST /orders/{id}/items
///
/// Appends an item to an existing order, revalidates the aggregate, and
/// persists the updated whole.
#[utoipa::path(
    post,
    path = "/orders/{id}/items",
    params(
        ("id" = i64, Path, description = "Order surrogate id"),
    ),
    request_body = OrderItemRequest,
    responses(
        (status = 200, description = "Item added", body = crate::application::dto::OrderResponse),
        (status = 400, description = "Item failed validation"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn add_item_to_order(
    service: web::Data<OrderService>,
    path: web::Path<i64>,
    body: web::Json<OrderItemRequest>,
) -> Result<HttpResponse, AppError> {
    let service = service.into_inner();
    let order_id = path.into_inner();
    let body = body.into_inner();

    let response = web::block(move || service.add_item_to_order(order_id, body))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(response))
}
