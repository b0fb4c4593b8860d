use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::models::trip::{TripPlan, TripRequest};
use crate::services::formatting_service::FormattingService;
use crate::services::search_service::SearchService;
use crate::services::trip_planning_service::TripPlanner;

#[derive(Serialize)]
struct PlanResponse {
    plan: TripPlan,
    formatted: String,
}

/*
    /api/trips/plan
*/
pub async fn plan(body: web::Json<TripRequest>) -> impl Responder {
    let request = body.into_inner();

    // Gather candidate pools from the (simulated) search layer, then hand
    // everything to the synchronous planning core.
    let weather = SearchService::fetch_weather(&request.destination);
    let activities = SearchService::fetch_activities(&request.destination);
    let restaurants = SearchService::fetch_restaurants(&request.destination);
    let festivals = if request.end_date >= request.start_date {
        SearchService::fetch_festivals(&request.destination, request.start_date, request.end_date)
    } else {
        Vec::new()
    };

    let planner = TripPlanner::new();
    match planner.plan(&request, &weather, &activities, &restaurants, &festivals) {
        Ok(plan) => {
            println!(
                "Planned {}-day trip to {} (confidence {:.2})",
                plan.days.len(),
                plan.destination,
                plan.confidence
            );
            let formatted = FormattingService::format_plan(&plan);
            HttpResponse::Ok().json(PlanResponse { plan, formatted })
        }
        Err(err) => {
            eprintln!("Rejected trip request: {}", err);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }))
        }
    }
}
