//! Checkout handlers
//!
//! The payment step is a stub: a valid submission gets a pending receipt.

use crate::dto::checkout::{CheckoutForm, CheckoutResponse, OrderView};
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use awaz_core::models::OrderQuery;
use awaz_core::AppError;
use awaz_services::CheckoutService;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Decode the order carried by the checkout URL
///
/// GET /api/checkout/order?type=&packageId=&credits=&price=
#[instrument(skip(service))]
pub async fn get_order(
    service: web::Data<CheckoutService>,
    query: web::Query<OrderQuery>,
) -> Result<HttpResponse, AppError> {
    let order = service.order_from_query(&query)?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(OrderView::from(order))))
}

/// Submit the billing form
///
/// POST /api/checkout
#[instrument(skip(service, req))]
pub async fn submit_checkout(
    service: web::Data<CheckoutService>,
    req: web::Json<CheckoutForm>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Checkout validation failed: {}", e);
        AppError::from(e)
    })?;

    req.validate_business_rules().map_err(|e| {
        warn!("Checkout business validation failed: {}", e);
        e
    })?;

    let form = req.into_inner();
    let marketing_opt_in = form.agree_marketing;
    let receipt = service.submit(form.order)?;

    info!(
        order_reference = %receipt.order_reference,
        country = %form.country,
        "Checkout submitted"
    );

    Ok(HttpResponse::Accepted().json(ApiResponse::with_message(
        CheckoutResponse {
            receipt,
            marketing_opt_in,
        },
        "Payment processing would happen here!",
    )))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/checkout")
            .route("", web::post().to(submit_checkout))
            .route("/order", web::get().to(get_order)),
    );
}
