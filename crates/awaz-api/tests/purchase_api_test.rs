//! HTTP tests for the purchase funnel, checkout and contact form

#[macro_use]
mod common;

use actix_web::test;
use common::Vendors;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_package_catalog() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::get()
        .uri("/api/purchase/packages")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let packages = body["data"]["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 3);
    assert_eq!(packages[1]["id"], "growth");
    assert_eq!(packages[1]["popular"], true);
    assert_eq!(packages[1]["estimate"]["minutes"], 6250);
    assert_eq!(
        packages[1]["checkoutLink"],
        "/checkout?type=package&packageId=growth&credits=5000&price=50"
    );
    assert_eq!(body["data"]["minCustomCredits"], 100);
}

#[actix_web::test]
async fn test_custom_quote() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::get()
        .uri("/api/purchase/quote?credits=2500")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["summary"]["totalDisplay"], "$25.00");
    assert_eq!(body["data"]["order"]["orderType"], "custom");
    assert_eq!(body["data"]["summary"]["estimate"]["messages"], 8325);
}

#[actix_web::test]
async fn test_custom_quote_rejections() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::get()
        .uri("/api/purchase/quote?credits=50")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Minimum purchase is 100 credits");

    let req = test::TestRequest::get().uri("/api/purchase/quote").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Credits are required");
}

#[actix_web::test]
async fn test_checkout_order_lookup() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::get()
        .uri("/api/checkout/order?type=package&packageId=growth&credits=5000&price=50")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["order"]["packageId"], "growth");
    assert_eq!(body["data"]["summary"]["totalDisplay"], "$50.00");

    let req = test::TestRequest::get().uri("/api/checkout/order").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not found: Invalid Order");
}

fn checkout_body() -> Value {
    json!({
        "order": {"orderType": "package", "packageId": "growth", "credits": 5000, "price": "50"},
        "email": "meera@example.com",
        "firstName": "Meera",
        "lastName": "Krishnan",
        "phone": "+91 98765 43210",
        "address": "12 Marina Road",
        "city": "Chennai",
        "postalCode": "600001",
        "country": "IN",
        "state": "Tamil Nadu",
        "agreeTerms": true,
        "agreeMarketing": true
    })
}

#[actix_web::test]
async fn test_checkout_submission() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/checkout")
        .set_json(checkout_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 202);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "payment_pending");
    assert_eq!(body["data"]["marketingOptIn"], true);
    assert!(body["data"]["orderReference"].is_string());
}

#[actix_web::test]
async fn test_checkout_requires_terms() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let mut form = checkout_body();
    form["agreeTerms"] = json!(false);
    let req = test::TestRequest::post()
        .uri("/api/checkout")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "You must agree to the Terms of Service and Privacy Policy"
    );
}

#[actix_web::test]
async fn test_checkout_rejects_tampered_price() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let mut form = checkout_body();
    form["order"]["price"] = json!("5");
    let req = test::TestRequest::post()
        .uri("/api/checkout")
        .set_json(form)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Order does not match the current price list");
}

#[actix_web::test]
async fn test_contact_form() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Bikash",
            "business": "Thapa Electronics",
            "phone": "+977 9812345678",
            "preferredLanguage": "nepali",
            "hasConsent": true
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["received"], true);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({"name": "Bikash", "business": "Thapa Electronics", "phone": "123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Please confirm you have consent to message your contacts."
    );
}
