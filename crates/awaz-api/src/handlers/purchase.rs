//! Purchase funnel handlers

use crate::dto::purchase::{PackageCatalog, QuoteQuery};
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use awaz_core::AppError;
use awaz_services::CheckoutService;
use tracing::{debug, instrument, warn};

/// Package catalog with per-credit prices and usage estimates
///
/// GET /api/purchase/packages
pub async fn list_packages(service: web::Data<CheckoutService>) -> HttpResponse {
    let catalog = PackageCatalog::new(service.packages());
    HttpResponse::Ok().json(ApiResponse::success(catalog))
}

/// Price a custom number of credits
///
/// GET /api/purchase/quote?credits=N
#[instrument(skip(service))]
pub async fn get_quote(
    service: web::Data<CheckoutService>,
    query: web::Query<QuoteQuery>,
) -> Result<HttpResponse, AppError> {
    let credits = query.credits()?;
    debug!(credits, "Quoting custom credits");

    let quote = service.quote(credits).map_err(|e| {
        warn!("Custom quote rejected: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(quote)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/purchase")
            .route("/packages", web::get().to(list_packages))
            .route("/quote", web::get().to(get_quote)),
    );
}
