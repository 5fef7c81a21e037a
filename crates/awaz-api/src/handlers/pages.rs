//! HTML pages and the landing content API

use crate::dto::purchase::QuoteQuery;
use crate::dto::voice::TestCallPrefill;
use crate::dto::ApiResponse;
use crate::site::{pages, LandingPage, QuoteState, PRIVACY_POLICY, TERMS_AND_CONDITIONS};
use actix_web::{http::header::ContentType, web, HttpResponse};
use awaz_core::models::{OrderDetails, OrderQuery};
use awaz_services::{CheckoutService, ServiceStatus};
use tracing::debug;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// GET /
pub async fn landing_page(service: web::Data<CheckoutService>) -> HttpResponse {
    html(pages::landing(&LandingPage::new(service.packages())))
}

/// GET /api/site/landing
pub async fn landing_content(service: web::Data<CheckoutService>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(LandingPage::new(service.packages())))
}

/// GET /privacy
pub async fn privacy_page() -> HttpResponse {
    html(pages::legal(&PRIVACY_POLICY))
}

/// GET /termsandconditions
pub async fn terms_page() -> HttpResponse {
    html(pages::legal(&TERMS_AND_CONDITIONS))
}

/// GET /purchase?credits=N
pub async fn purchase_page(
    service: web::Data<CheckoutService>,
    query: web::Query<QuoteQuery>,
) -> HttpResponse {
    let quote = match query.credits.as_deref().map(str::trim) {
        None | Some("") => QuoteState::Empty,
        Some(raw) => match query.credits().and_then(|credits| service.quote(credits)) {
            Ok(quote) => QuoteState::Quoted(quote),
            Err(e) => {
                debug!("Custom quote rejected: {}", e);
                QuoteState::Rejected {
                    credits: raw.to_string(),
                    error: e.to_string(),
                }
            }
        },
    };

    html(pages::purchase(&service.packages(), &quote))
}

/// GET /checkout?type=&packageId=&credits=&price=
pub async fn checkout_page(query: web::Query<OrderQuery>) -> HttpResponse {
    let order = OrderDetails::from_query(&query);
    html(pages::checkout(order.as_ref()))
}

/// GET /test-call?country=&phone=&name=
pub async fn test_call_page(
    status: web::Data<ServiceStatus>,
    query: web::Query<TestCallPrefill>,
) -> HttpResponse {
    let phone = query.phone_number();
    html(pages::test_call(
        status.get_ref(),
        phone.as_deref(),
        query.name.as_deref(),
    ))
}

/// Site routes outside `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(landing_page))
        .route("/privacy", web::get().to(privacy_page))
        .route("/termsandconditions", web::get().to(terms_page))
        .route("/purchase", web::get().to(purchase_page))
        .route("/checkout", web::get().to(checkout_page))
        .route("/test-call", web::get().to(test_call_page));
}

/// Landing content under `/api`
pub fn configure_content(cfg: &mut web::ServiceConfig) {
    cfg.route("/site/landing", web::get().to(landing_content));
}
