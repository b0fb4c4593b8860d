use crate::models::travel::{
    DrivingOption, FlyingOption, RecommendedMode, TravelComparison, TravelRecommendation,
};

// Driving cost model constants.
const VEHICLE_MPG: f64 = 25.0;
const GAS_PRICE_PER_GALLON: f64 = 3.50;
const WEAR_COST_PER_MILE: f64 = 0.10;
const TOLL_RATE_PER_MILE: f64 = 0.05;
const TOLL_CAP: f64 = 50.0;
const PARKING_PER_200_MILES: f64 = 25.0;

// Defaults when a route is not in the lookup tables.
const DEFAULT_DRIVE_MILES: f64 = 300.0;
const AVERAGE_HIGHWAY_MPH: f64 = 65.0;
const DEFAULT_FLIGHT_FARE: f64 = 200.0;
const DEFAULT_FLIGHT_HOURS: f64 = 2.5;

/// Security, boarding, and ground transfer added to each flight leg.
const AIRPORT_OVERHEAD_HOURS: f64 = 2.0;

/// Round-trip time advantage one mode needs before it overrides the cheaper
/// option.
const TIME_ADVANTAGE_HOURS: f64 = 4.0;

/// Destinations with no road connection: islands, overseas countries and
/// territories, remote regions. Matched case-insensitively by substring.
const FLIGHT_ONLY_MARKERS: &[&str] = &[
    "usvi",
    "st. thomas",
    "st. john",
    "st. croix",
    "virgin islands",
    "puerto rico",
    "hawaii",
    "honolulu",
    "maui",
    "bahamas",
    "bermuda",
    "jamaica",
    "aruba",
    "iceland",
    "ireland",
    "united kingdom",
    "london",
    "france",
    "paris",
    "italy",
    "rome",
    "spain",
    "japan",
    "tokyo",
    "australia",
    "sydney",
    "bali",
    "thailand",
    "bangkok",
    "singapore",
];

/// One-way driving estimates for common city pairs (miles, hours). Matched
/// in either direction; keys are bare city names, the first comma-separated
/// segment of the place string.
const DRIVING_ROUTES: &[(&str, &str, f64, f64)] = &[
    ("new york", "washington", 225.0, 4.5),
    ("los angeles", "san francisco", 380.0, 6.0),
    ("chicago", "detroit", 280.0, 4.5),
    ("miami", "orlando", 235.0, 3.5),
    ("seattle", "portland", 173.0, 3.0),
    ("boston", "philadelphia", 300.0, 5.0),
    ("dallas", "houston", 240.0, 3.5),
    ("atlanta", "charlotte", 245.0, 4.0),
    ("atlanta", "charleston", 300.0, 4.5),
    ("nashville", "memphis", 212.0, 3.2),
];

/// One-way fares and flight times for common routes (dollars, hours).
const FLIGHT_ROUTES: &[(&str, &str, f64, f64)] = &[
    ("new york", "washington", 180.0, 1.5),
    ("los angeles", "san francisco", 120.0, 1.5),
    ("chicago", "detroit", 160.0, 1.2),
    ("miami", "orlando", 90.0, 1.0),
    ("seattle", "portland", 110.0, 1.0),
    ("boston", "philadelphia", 150.0, 1.5),
    ("dallas", "houston", 140.0, 1.2),
    ("atlanta", "charlotte", 130.0, 1.0),
    ("atlanta", "charleston", 150.0, 1.0),
    ("nashville", "memphis", 120.0, 1.0),
];

pub struct TravelService;

impl TravelService {
    /// Compare driving and flying for the trip. Returns `None` when no usable
    /// origin was given; the plan simply carries no comparison in that case.
    pub fn compare_travel_options(
        origin: Option<&str>,
        destination: &str,
        travelers: u32,
    ) -> Option<TravelComparison> {
        let origin = origin.map(str::trim).filter(|o| !o.is_empty())?;
        if destination.trim().is_empty() {
            return None;
        }

        let flying = Self::flying_estimate(origin, destination, travelers);

        if let Some(marker) = Self::flight_only_marker(destination) {
            let reason = format!(
                "{} is reachable only by air ({} has no road connection)",
                destination.trim(),
                marker
            );
            let recommendation = TravelRecommendation {
                mode: RecommendedMode::Flying,
                reason: "only available option".to_string(),
                cost_difference: flying.total_cost,
                time_difference_hours: flying.total_time_hours,
            };
            return Some(TravelComparison {
                driving: DrivingOption::unavailable(reason),
                flying,
                recommendation,
            });
        }

        let driving = Self::driving_estimate(origin, destination, travelers);
        let recommendation = Self::recommend(&driving, &flying);

        Some(TravelComparison {
            driving,
            flying,
            recommendation,
        })
    }

    fn flight_only_marker(destination: &str) -> Option<&'static str> {
        let destination = destination.to_lowercase();
        FLIGHT_ONLY_MARKERS
            .iter()
            .find(|marker| destination.contains(*marker))
            .copied()
    }

    /// First city segment, folded for table lookups ("Atlanta, GA" -> "atlanta").
    fn city_key(place: &str) -> String {
        place
            .split(',')
            .next()
            .unwrap_or(place)
            .trim()
            .to_lowercase()
    }

    fn route_lookup(
        table: &[(&str, &str, f64, f64)],
        origin: &str,
        destination: &str,
    ) -> Option<(f64, f64)> {
        let from = Self::city_key(origin);
        let to = Self::city_key(destination);
        table
            .iter()
            .find(|(a, b, _, _)| (*a == from && *b == to) || (*a == to && *b == from))
            .map(|(_, _, x, y)| (*x, *y))
    }

    fn driving_estimate(origin: &str, destination: &str, travelers: u32) -> DrivingOption {
        let (miles, hours) = Self::route_lookup(DRIVING_ROUTES, origin, destination)
            .unwrap_or((DEFAULT_DRIVE_MILES, DEFAULT_DRIVE_MILES / AVERAGE_HIGHWAY_MPH));

        let round_trip_miles = miles * 2.0;
        let gas_cost = round_trip_miles / VEHICLE_MPG * GAS_PRICE_PER_GALLON;
        let wear_and_tear = round_trip_miles * WEAR_COST_PER_MILE;
        let tolls = (miles * TOLL_RATE_PER_MILE).min(TOLL_CAP);
        let parking = PARKING_PER_200_MILES * (miles / 200.0);
        let total_cost = gas_cost + wear_and_tear + tolls + parking;

        DrivingOption {
            available: true,
            unavailable_reason: None,
            distance_miles: miles,
            drive_time_hours: hours,
            total_time_hours: hours * 2.0,
            gas_cost,
            wear_and_tear,
            tolls,
            parking,
            total_cost,
            cost_per_person: total_cost / travelers as f64,
        }
    }

    fn flying_estimate(origin: &str, destination: &str, travelers: u32) -> FlyingOption {
        let (fare, duration) = Self::route_lookup(FLIGHT_ROUTES, origin, destination)
            .unwrap_or((DEFAULT_FLIGHT_FARE, DEFAULT_FLIGHT_HOURS));

        let price_per_person = fare * 2.0;
        FlyingOption {
            flight_duration_hours: duration,
            total_time_hours: (duration + AIRPORT_OVERHEAD_HOURS) * 2.0,
            price_per_person,
            total_cost: price_per_person * travelers as f64,
        }
    }

    /// Cheaper round-trip total wins, ties toward driving, unless the other
    /// mode saves more than the time-advantage threshold.
    fn recommend(driving: &DrivingOption, flying: &FlyingOption) -> TravelRecommendation {
        let cost_difference = (driving.total_cost - flying.total_cost).abs();
        let time_difference = (driving.total_time_hours - flying.total_time_hours).abs();

        let driving_cheaper = driving.total_cost <= flying.total_cost;
        let (cheaper_mode, cheaper_time, other_mode, other_time) = if driving_cheaper {
            (
                RecommendedMode::Driving,
                driving.total_time_hours,
                RecommendedMode::Flying,
                flying.total_time_hours,
            )
        } else {
            (
                RecommendedMode::Flying,
                flying.total_time_hours,
                RecommendedMode::Driving,
                driving.total_time_hours,
            )
        };

        let (mode, reason) = if other_time + TIME_ADVANTAGE_HOURS < cheaper_time {
            (other_mode, "much faster despite the higher cost".to_string())
        } else {
            (cheaper_mode, "lower total cost for the group".to_string())
        };

        TravelRecommendation {
            mode,
            reason,
            cost_difference,
            time_difference_hours: time_difference,
        }
    }
}
