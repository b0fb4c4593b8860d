use std::fmt::Write;

use crate::models::travel::RecommendedMode;
use crate::models::trip::{SlotAssignment, TripPlan};

/// Confidence below this threshold earns a review advisory in the output.
const LOW_CONFIDENCE_THRESHOLD: f64 = 0.7;

pub struct FormattingService;

impl FormattingService {
    /// Render a finished plan as plain text: overview, daily schedule with
    /// return-visit labels, cost breakdown, and the travel comparison when
    /// one was produced. Purely a view over the immutable plan.
    pub fn format_plan(plan: &TripPlan) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Trip plan: {}", plan.destination);
        let _ = writeln!(
            out,
            "Dates: {} to {} ({} days), {} traveler(s), {:?} budget",
            plan.start_date,
            plan.end_date,
            plan.days.len(),
            plan.travelers,
            plan.budget_tier
        );
        let _ = writeln!(out, "Confidence: {:.0}%", plan.confidence * 100.0);
        if plan.confidence < LOW_CONFIDENCE_THRESHOLD {
            let _ = writeln!(
                out,
                "Note: low confidence in this plan; consider reviewing the picks."
            );
        }

        for day in &plan.days {
            let _ = writeln!(out, "\n{}", day.date.format("%A, %B %d, %Y"));
            Self::write_slot(&mut out, "Morning", day.morning.as_ref());
            Self::write_slot(&mut out, "Lunch", day.lunch.as_ref());
            Self::write_slot(&mut out, "Afternoon", day.afternoon.as_ref());
            Self::write_slot(&mut out, "Evening", day.evening.as_ref());
        }

        let budget = &plan.budget;
        let _ = writeln!(out, "\nCost breakdown:");
        let _ = writeln!(out, "  Meals:         ${:.2}", budget.meals);
        let _ = writeln!(out, "  Activities:    ${:.2}", budget.activities);
        let _ = writeln!(out, "  Transport:     ${:.2}", budget.transport);
        if let Some(lodging) = budget.lodging {
            let _ = writeln!(out, "  Lodging:       ${:.2}", lodging);
        }
        let _ = writeln!(out, "  Miscellaneous: ${:.2}", budget.miscellaneous);
        let _ = writeln!(out, "  Total:         ${:.2}", budget.total);
        let _ = writeln!(out, "  Per person:    ${:.2}", budget.per_person);
        if budget.lodging.is_none() {
            let _ = writeln!(out, "  (lodging not included in this estimate)");
        }

        if let Some(comparison) = &plan.travel_comparison {
            let _ = writeln!(out, "\nGetting there:");
            if comparison.driving.available {
                let _ = writeln!(
                    out,
                    "  Driving: {:.0} miles, {:.1}h each way, ${:.2} round trip (${:.2}/person)",
                    comparison.driving.distance_miles,
                    comparison.driving.drive_time_hours,
                    comparison.driving.total_cost,
                    comparison.driving.cost_per_person
                );
            } else if let Some(reason) = &comparison.driving.unavailable_reason {
                let _ = writeln!(out, "  Driving: not available ({})", reason);
            }
            let _ = writeln!(
                out,
                "  Flying: {:.1}h flight, {:.1}h door to door, ${:.2}/person round trip",
                comparison.flying.flight_duration_hours,
                comparison.flying.total_time_hours,
                comparison.flying.price_per_person
            );
            let mode = match comparison.recommendation.mode {
                RecommendedMode::Driving => "Driving",
                RecommendedMode::Flying => "Flying",
            };
            let _ = writeln!(
                out,
                "  Recommended: {} ({})",
                mode, comparison.recommendation.reason
            );
        }

        out
    }

    fn write_slot(out: &mut String, label: &str, slot: Option<&SlotAssignment>) {
        match slot {
            Some(assignment) => {
                let suffix = if assignment.return_visit {
                    " (return visit)"
                } else {
                    ""
                };
                let _ = writeln!(
                    out,
                    "  {:<9} {} [{:.1}/5]{}",
                    label,
                    assignment.candidate.candidate.name,
                    assignment.candidate.candidate.rating,
                    suffix
                );
            }
            None => {
                let _ = writeln!(out, "  {:<9} free time", label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{WeatherCondition, WeatherSummary};
    use crate::models::trip::{BudgetTier, TripRequest};
    use crate::services::search_service::SearchService;
    use crate::services::trip_planning_service::TripPlanner;
    use chrono::NaiveDate;

    fn plan_fixture(travelers: u32) -> TripPlan {
        let request = TripRequest {
            destination: "Charleston, SC".to_string(),
            origin: Some("Atlanta, GA".to_string()),
            start_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 17).unwrap(),
            travelers,
            budget_tier: BudgetTier::Mid,
            include_lodging: true,
            interests: vec!["food".to_string(), "history".to_string()],
        };
        let weather = WeatherSummary {
            condition: WeatherCondition::Sunny,
            temperature_c: 24.0,
            favors_indoor: false,
            forecast: "Clear".to_string(),
        };
        TripPlanner::default()
            .plan(
                &request,
                &weather,
                &SearchService::fetch_activities(&request.destination),
                &SearchService::fetch_restaurants(&request.destination),
                &[],
            )
            .unwrap()
    }

    #[test]
    fn formatted_plan_names_every_day() {
        let plan = plan_fixture(2);
        let text = FormattingService::format_plan(&plan);

        assert!(text.contains("Trip plan: Charleston, SC"));
        assert!(text.contains("Friday, August 15, 2025"));
        assert!(text.contains("Saturday, August 16, 2025"));
        assert!(text.contains("Sunday, August 17, 2025"));
        assert!(text.contains("Cost breakdown:"));
        assert!(text.contains("Recommended: Driving"));
    }

    #[test]
    fn return_visits_are_labeled() {
        let mut plan = plan_fixture(2);
        if let Some(slot) = plan.days[0].morning.as_mut() {
            slot.return_visit = true;
        }

        let text = FormattingService::format_plan(&plan);
        assert!(text.contains("(return visit)"));
    }
}
