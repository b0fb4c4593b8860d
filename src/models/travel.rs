use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedMode {
    Driving,
    Flying,
}

/// Round-trip driving estimate. When the destination has no road connection
/// the option is marked unavailable and the cost fields stay zero.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DrivingOption {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
    pub distance_miles: f64,
    pub drive_time_hours: f64,
    pub total_time_hours: f64,
    pub gas_cost: f64,
    pub wear_and_tear: f64,
    pub tolls: f64,
    pub parking: f64,
    pub total_cost: f64,
    pub cost_per_person: f64,
}

impl DrivingOption {
    pub fn unavailable(reason: String) -> Self {
        Self {
            available: false,
            unavailable_reason: Some(reason),
            distance_miles: 0.0,
            drive_time_hours: 0.0,
            total_time_hours: 0.0,
            gas_cost: 0.0,
            wear_and_tear: 0.0,
            tolls: 0.0,
            parking: 0.0,
            total_cost: 0.0,
            cost_per_person: 0.0,
        }
    }
}

/// Round-trip flying estimate. Times include airport overhead on each leg.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlyingOption {
    pub flight_duration_hours: f64,
    pub total_time_hours: f64,
    pub price_per_person: f64,
    pub total_cost: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelRecommendation {
    pub mode: RecommendedMode,
    pub reason: String,
    pub cost_difference: f64,
    pub time_difference_hours: f64,
}

/// Driving-vs-flying comparison for trips where an origin was provided.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelComparison {
    pub driving: DrivingOption,
    pub flying: FlyingOption,
    pub recommendation: TravelRecommendation,
}
