use actix_web::{test, web, App};
use serde_json::json;

use trip_scout_api::routes;

fn app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/api")
                .service(web::scope("/trips").route("/plan", web::post().to(routes::trip::plan))),
        )
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_rt::test]
async fn test_plan_trip_endpoint() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "destination": "Charleston, SC",
            "origin": "Atlanta, GA",
            "start_date": "2025-08-15",
            "end_date": "2025-08-17",
            "travelers": 2,
            "budget_tier": "mid",
            "include_lodging": true,
            "interests": ["history", "food"]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let plan = &body["plan"];

    assert_eq!(plan["destination"], "Charleston, SC");
    assert_eq!(plan["days"].as_array().unwrap().len(), 3);
    assert_eq!(plan["days"][0]["date"], "2025-08-15");
    assert!(plan["budget"]["total"].as_f64().unwrap() > 0.0);
    assert_eq!(
        plan["travel_comparison"]["recommendation"]["mode"],
        "driving"
    );
    assert!(body["formatted"]
        .as_str()
        .unwrap()
        .contains("Trip plan: Charleston, SC"));
}

#[actix_rt::test]
async fn test_plan_trip_without_origin_skips_comparison() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "destination": "Boise, ID",
            "start_date": "2025-09-01",
            "end_date": "2025-09-02",
            "travelers": 1,
            "budget_tier": "low"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["plan"].get("travel_comparison").is_none());
}

#[actix_rt::test]
async fn test_plan_trip_rejects_bad_dates() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "destination": "Charleston, SC",
            "start_date": "2025-08-17",
            "end_date": "2025-08-15",
            "travelers": 2,
            "budget_tier": "mid"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("before start"));
}

#[actix_rt::test]
async fn test_plan_trip_rejects_zero_travelers() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "destination": "Charleston, SC",
            "start_date": "2025-08-15",
            "end_date": "2025-08-17",
            "travelers": 0,
            "budget_tier": "mid"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_flight_only_destination_reported() {
    let app = test::init_service(app()).await;

    let req = test::TestRequest::post()
        .uri("/api/trips/plan")
        .set_json(json!({
            "destination": "St. Thomas, USVI",
            "origin": "Atlanta, GA",
            "start_date": "2025-08-15",
            "end_date": "2025-08-17",
            "travelers": 2,
            "budget_tier": "mid"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let driving = &body["plan"]["travel_comparison"]["driving"];
    assert_eq!(driving["available"], false);
    assert!(!driving["unavailable_reason"]
        .as_str()
        .unwrap()
        .is_empty());
}
