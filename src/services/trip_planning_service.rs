use std::sync::Arc;

use crate::models::candidate::{Candidate, ScoredCandidate, WeatherSummary};
use crate::models::trip::{PlanningError, TripPlan, TripRequest};
use crate::services::budget_service::BudgetService;
use crate::services::scheduling_service::{SchedulerState, SchedulingService};
use crate::services::scoring_service::{ScoringService, ScoringWeights};
use crate::services::travel_service::TravelService;

pub struct TripPlanner {
    scoring: ScoringService,
}

impl TripPlanner {
    pub fn new() -> Self {
        Self {
            scoring: ScoringService::new(),
        }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            scoring: ScoringService::with_weights(weights),
        }
    }

    /// Build a complete trip plan from candidate pools supplied by the search
    /// layer. Synchronous and free of I/O: everything after validation is
    /// total, with sparse pools degrading confidence instead of failing.
    pub fn plan(
        &self,
        request: &TripRequest,
        weather: &WeatherSummary,
        activity_pool: &[Candidate],
        restaurant_pool: &[Candidate],
        festival_pool: &[Candidate],
    ) -> Result<TripPlan, PlanningError> {
        request.validate()?;

        let interests = request.normalized_interests();
        let activities = self.score_pool(activity_pool, &interests, weather);
        let restaurants = self.score_pool(restaurant_pool, &interests, weather);
        let festivals = self.score_pool(festival_pool, &interests, weather);

        let mut state = SchedulerState::new();
        let days = SchedulingService::build_itinerary(
            &mut state,
            &activities,
            &restaurants,
            &festivals,
            request.start_date,
            request.end_date,
        );

        let confidence = Self::confidence(&activities, &restaurants);

        let budget = BudgetService::calculate(
            &request.destination,
            request.budget_tier,
            request.travelers,
            request.day_count(),
            request.include_lodging,
        );

        let travel_comparison = TravelService::compare_travel_options(
            request.origin.as_deref(),
            &request.destination,
            request.travelers,
        );

        Ok(TripPlan {
            destination: request.destination.clone(),
            origin: request.origin.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            travelers: request.travelers,
            budget_tier: request.budget_tier,
            include_lodging: request.include_lodging,
            days,
            confidence,
            budget,
            travel_comparison,
        })
    }

    fn score_pool(
        &self,
        pool: &[Candidate],
        interests: &[String],
        weather: &WeatherSummary,
    ) -> Vec<Arc<ScoredCandidate>> {
        self.scoring
            .score_candidates(pool, interests, weather)
            .into_iter()
            .map(Arc::new)
            .collect()
    }

    /// Mean of the average activity and restaurant match scores. An empty
    /// pool contributes zero, halving confidence for the category it leaves
    /// unscheduled.
    fn confidence(
        activities: &[Arc<ScoredCandidate>],
        restaurants: &[Arc<ScoredCandidate>],
    ) -> f64 {
        let avg = |pool: &[Arc<ScoredCandidate>]| {
            if pool.is_empty() {
                0.0
            } else {
                pool.iter().map(|c| c.score).sum::<f64>() / pool.len() as f64
            }
        };

        (avg(activities) + avg(restaurants)) / 2.0
    }
}

impl Default for TripPlanner {
    fn default() -> Self {
        Self::new()
    }
}
