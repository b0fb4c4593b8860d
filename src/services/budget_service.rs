use crate::models::budget::CostBreakdown;
use crate::models::trip::BudgetTier;

/// Base rates in dollars per person per day (lodging per person per night).
/// Low is roughly 0.6x mid, luxury roughly 2x mid.
const MEALS_RATE: TierRates = TierRates {
    low: 25.0,
    mid: 50.0,
    luxury: 100.0,
};
const ACTIVITIES_RATE: TierRates = TierRates {
    low: 15.0,
    mid: 40.0,
    luxury: 80.0,
};
const TRANSPORT_RATE: TierRates = TierRates {
    low: 10.0,
    mid: 25.0,
    luxury: 60.0,
};
const LODGING_RATE: TierRates = TierRates {
    low: 40.0,
    mid: 100.0,
    luxury: 250.0,
};

/// Share of the other categories added for tips, souvenirs, and extras.
const MISCELLANEOUS_SHARE: f64 = 0.10;

/// Lodging is billed per night, one fewer than the inclusive day count.
/// Policy: a trip ending the day it starts books no room.
pub fn lodging_nights(day_count: i64) -> i64 {
    day_count - 1
}

struct TierRates {
    low: f64,
    mid: f64,
    luxury: f64,
}

impl TierRates {
    fn for_tier(&self, tier: BudgetTier) -> f64 {
        match tier {
            BudgetTier::Low => self.low,
            BudgetTier::Mid => self.mid,
            BudgetTier::Luxury => self.luxury,
        }
    }
}

/// Cost-of-living multipliers keyed by destination substring. Unlisted
/// destinations fall back to 1.0.
const REGIONAL_MULTIPLIERS: &[(&str, f64)] = &[
    // High-cost destinations
    ("zurich", 1.5),
    ("geneva", 1.5),
    ("paris", 1.4),
    ("oslo", 1.4),
    ("reykjavik", 1.4),
    ("san francisco", 1.4),
    ("london", 1.3),
    ("new york", 1.3),
    ("copenhagen", 1.3),
    ("singapore", 1.3),
    ("honolulu", 1.3),
    ("tokyo", 1.2),
    ("sydney", 1.2),
    ("stockholm", 1.2),
    ("dubai", 1.2),
    ("boston", 1.2),
    ("seattle", 1.2),
    ("washington", 1.2),
    ("los angeles", 1.2),
    // Medium-cost destinations
    ("amsterdam", 1.1),
    ("dublin", 1.1),
    ("vienna", 1.1),
    ("munich", 1.1),
    ("toronto", 1.1),
    ("vancouver", 1.1),
    ("miami", 1.1),
    ("chicago", 1.1),
    ("rome", 1.0),
    ("madrid", 0.9),
    ("berlin", 0.9),
    ("barcelona", 0.9),
    ("montreal", 0.9),
    ("lisbon", 0.8),
    ("athens", 0.7),
    ("prague", 0.7),
    ("krakow", 0.6),
    ("budapest", 0.6),
    // Lower-cost destinations
    ("buenos aires", 0.55),
    ("mexico city", 0.5),
    ("istanbul", 0.5),
    ("lima", 0.5),
    ("marrakech", 0.5),
    ("kuala lumpur", 0.5),
    ("bali", 0.45),
    ("bangkok", 0.4),
    ("cairo", 0.4),
    ("hanoi", 0.35),
    ("delhi", 0.3),
];

pub struct BudgetService;

impl BudgetService {
    /// Multiplier for a destination, matched case-insensitively by substring
    /// against the lookup table; unknown destinations price at 1.0.
    pub fn regional_multiplier(destination: &str) -> f64 {
        let destination = destination.to_lowercase();
        REGIONAL_MULTIPLIERS
            .iter()
            .find(|(key, _)| destination.contains(key))
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(1.0)
    }

    /// Per-category cost estimate for a validated request. Meals, activities,
    /// and transport scale with days; lodging with nights, and only when
    /// requested. Miscellaneous is a fixed share on top of everything else.
    pub fn calculate(
        destination: &str,
        tier: BudgetTier,
        travelers: u32,
        day_count: i64,
        include_lodging: bool,
    ) -> CostBreakdown {
        let multiplier = Self::regional_multiplier(destination);
        let scale = travelers as f64 * day_count as f64 * multiplier;

        let meals = MEALS_RATE.for_tier(tier) * scale;
        let activities = ACTIVITIES_RATE.for_tier(tier) * scale;
        let transport = TRANSPORT_RATE.for_tier(tier) * scale;

        let lodging = include_lodging.then(|| {
            LODGING_RATE.for_tier(tier)
                * travelers as f64
                * lodging_nights(day_count) as f64
                * multiplier
        });

        let subtotal = meals + activities + transport + lodging.unwrap_or(0.0);
        let miscellaneous = subtotal * MISCELLANEOUS_SHARE;
        let total = subtotal + miscellaneous;

        CostBreakdown {
            meals,
            activities,
            transport,
            lodging,
            miscellaneous,
            total,
            per_person: total / travelers as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn categories_sum_to_total() {
        let breakdown = BudgetService::calculate("Charleston, SC", BudgetTier::Mid, 2, 3, true);
        assert!((breakdown.category_sum() - breakdown.total).abs() < EPS);
    }

    #[test]
    fn miscellaneous_is_ten_percent_of_other_categories() {
        let breakdown = BudgetService::calculate("Paris, France", BudgetTier::Luxury, 4, 5, true);
        let others = breakdown.meals
            + breakdown.activities
            + breakdown.transport
            + breakdown.lodging.unwrap_or(0.0);
        assert!((breakdown.miscellaneous - others * 0.10).abs() < EPS);
    }

    #[test]
    fn per_person_times_travelers_is_total() {
        let breakdown = BudgetService::calculate("Rome, Italy", BudgetTier::Low, 3, 4, false);
        assert!((breakdown.per_person * 3.0 - breakdown.total).abs() < EPS);
    }

    #[test]
    fn lodging_bills_one_fewer_night_than_days() {
        assert_eq!(lodging_nights(3), 2);
        assert_eq!(lodging_nights(1), 0);

        // Mid tier, 1 traveler, multiplier 1.0: lodging = 100 * nights.
        let breakdown =
            BudgetService::calculate("Springfield", BudgetTier::Mid, 1, 3, true);
        assert!((breakdown.lodging.unwrap() - 200.0).abs() < EPS);
    }

    #[test]
    fn lodging_absent_unless_requested() {
        let breakdown = BudgetService::calculate("Springfield", BudgetTier::Mid, 2, 3, false);
        assert!(breakdown.lodging.is_none());
    }

    #[test]
    fn regional_multiplier_matches_substring_case_insensitive() {
        assert_eq!(BudgetService::regional_multiplier("Paris, France"), 1.4);
        assert_eq!(BudgetService::regional_multiplier("PARIS"), 1.4);
        assert_eq!(BudgetService::regional_multiplier("bangkok, thailand"), 0.4);
    }

    #[test]
    fn unknown_destination_defaults_to_one() {
        assert_eq!(BudgetService::regional_multiplier("Boise, ID"), 1.0);
    }

    #[test]
    fn multiplier_scales_every_daily_category() {
        let home = BudgetService::calculate("Springfield", BudgetTier::Mid, 1, 2, false);
        let paris = BudgetService::calculate("Paris, France", BudgetTier::Mid, 1, 2, false);

        assert!((paris.meals - home.meals * 1.4).abs() < EPS);
        assert!((paris.activities - home.activities * 1.4).abs() < EPS);
        assert!((paris.transport - home.transport * 1.4).abs() < EPS);
    }

    #[test]
    fn tiers_order_costs() {
        let low = BudgetService::calculate("Springfield", BudgetTier::Low, 2, 3, true);
        let mid = BudgetService::calculate("Springfield", BudgetTier::Mid, 2, 3, true);
        let luxury = BudgetService::calculate("Springfield", BudgetTier::Luxury, 2, 3, true);

        assert!(low.total < mid.total);
        assert!(mid.total < luxury.total);
    }
}
