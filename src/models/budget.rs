use serde::{Deserialize, Serialize};

/// Per-category trip cost estimate in dollars. Meals, activities, and
/// transport are per-day costs; lodging is per-night and present only when
/// the request asked for it.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CostBreakdown {
    pub meals: f64,
    pub activities: f64,
    pub transport: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lodging: Option<f64>,
    pub miscellaneous: f64,
    pub total: f64,
    pub per_person: f64,
}

impl CostBreakdown {
    /// Sum of the named categories, which the `total` field must equal.
    pub fn category_sum(&self) -> f64 {
        self.meals
            + self.activities
            + self.transport
            + self.lodging.unwrap_or(0.0)
            + self.miscellaneous
    }
}
