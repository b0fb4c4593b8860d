use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CandidateCategory {
    Activity,
    Restaurant,
    Festival,
}

/// Whether the experience happens under a roof, in the open, or works either way.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Indoor,
    Outdoor,
    Either,
}

/// Inclusive date range during which a time-limited candidate (festival) runs.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A proposed activity, restaurant, or festival supplied by the search layer.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Candidate {
    pub name: String,
    pub category: CandidateCategory,
    pub tags: Vec<String>,
    pub venue: Venue,
    /// Quality signal on a 0.0-5.0 scale.
    pub rating: f64,
    /// Present only for festivals; constrains which days the candidate may be scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_window: Option<DateWindow>,
}

/// Identity used for deduplication: two candidates with the same name and
/// category are the same entity even if scored independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateKey {
    pub name: String,
    pub category: CandidateCategory,
}

impl Candidate {
    pub fn key(&self) -> CandidateKey {
        CandidateKey {
            name: self.name.clone(),
            category: self.category,
        }
    }
}

/// A candidate plus its interest/weather/time-sensitivity match score in [0, 1].
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Overcast,
    Rainy,
    Snowy,
}

impl WeatherCondition {
    /// Conditions that rule out open-air plans.
    pub fn is_wet(&self) -> bool {
        matches!(self, WeatherCondition::Rainy | WeatherCondition::Snowy)
    }
}

/// Weather outlook for the trip window, supplied by the search layer.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WeatherSummary {
    pub condition: WeatherCondition,
    pub temperature_c: f64,
    /// Set when the forecast makes indoor plans the safer default.
    pub favors_indoor: bool,
    pub forecast: String,
}

impl WeatherSummary {
    /// Whether a candidate at the given venue is comfortable in this weather.
    /// Indoor and flexible venues always are; outdoor venues need a dry outlook.
    pub fn suits(&self, venue: Venue) -> bool {
        match venue {
            Venue::Indoor | Venue::Either => true,
            Venue::Outdoor => !self.condition.is_wet() && !self.favors_indoor,
        }
    }
}
