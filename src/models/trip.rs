use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::budget::CostBreakdown;
use crate::models::candidate::ScoredCandidate;
use crate::models::travel::TravelComparison;

pub const MIN_TRAVELERS: u32 = 1;
pub const MAX_TRAVELERS: u32 = 20;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    Mid,
    Luxury,
}

/// A planning request as received from the client.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TripRequest {
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget_tier: BudgetTier,
    #[serde(default)]
    pub include_lodging: bool,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanningError {
    #[error("destination must not be empty")]
    EmptyDestination,
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("traveler count {0} must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}")]
    InvalidTravelerCount(u32),
}

impl TripRequest {
    /// Reject requests the core cannot plan for. Everything past this point
    /// is total: sparse pools and unknown destinations degrade gracefully.
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.destination.trim().is_empty() {
            return Err(PlanningError::EmptyDestination);
        }
        if self.end_date < self.start_date {
            return Err(PlanningError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.travelers < MIN_TRAVELERS || self.travelers > MAX_TRAVELERS {
            return Err(PlanningError::InvalidTravelerCount(self.travelers));
        }
        Ok(())
    }

    /// Trip length in days, inclusive of both endpoints. Valid requests
    /// always span at least one day.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Interest keywords folded to a canonical form for tag matching.
    pub fn normalized_interests(&self) -> Vec<String> {
        self.interests
            .iter()
            .map(|i| i.trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect()
    }
}

/// One slot of a day's schedule. The candidate is shared with the scored
/// pool rather than copied; `return_visit` marks a repeat allowed only after
/// the whole pool was exhausted once.
#[derive(Debug, Serialize, Clone)]
pub struct SlotAssignment {
    #[serde(flatten)]
    pub candidate: Arc<ScoredCandidate>,
    pub return_visit: bool,
}

/// One calendar date's schedule.
#[derive(Debug, Serialize, Clone)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub morning: Option<SlotAssignment>,
    pub lunch: Option<SlotAssignment>,
    pub afternoon: Option<SlotAssignment>,
    pub evening: Option<SlotAssignment>,
}

impl DayPlan {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            morning: None,
            lunch: None,
            afternoon: None,
            evening: None,
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = &SlotAssignment> {
        [&self.morning, &self.lunch, &self.afternoon, &self.evening]
            .into_iter()
            .flatten()
    }
}

/// The finished plan: built once per request, immutable afterwards.
#[derive(Debug, Serialize, Clone)]
pub struct TripPlan {
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget_tier: BudgetTier,
    pub include_lodging: bool,
    pub days: Vec<DayPlan>,
    /// Quality signal in [0, 1] reflecting pool richness and match scores.
    pub confidence: f64,
    pub budget: CostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_comparison: Option<TravelComparison>,
}
