use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::candidate::{
    Candidate, CandidateCategory, DateWindow, Venue, WeatherCondition, WeatherSummary,
};

/// Stand-in for the external weather/restaurant/activity/event search APIs.
/// Pools are shaped like real search results so the planning core can be
/// swapped onto live providers without change. Festival presence is
/// randomized here, never inside the core, so planning stays deterministic
/// for a given set of pools.
pub struct SearchService;

/// Chance that any festival overlaps the trip dates.
const FESTIVAL_PRESENCE_PROBABILITY: f64 = 0.4;

struct FestivalTemplate {
    name: &'static str,
    tags: &'static [&'static str],
    venue: Venue,
    rating: f64,
    duration_days: i64,
}

const FESTIVAL_TEMPLATES: &[FestivalTemplate] = &[
    FestivalTemplate {
        name: "{destination} Food Festival",
        tags: &["food", "outdoor", "culture", "festival"],
        venue: Venue::Outdoor,
        rating: 4.5,
        duration_days: 3,
    },
    FestivalTemplate {
        name: "Summer Music Festival",
        tags: &["music", "outdoor", "entertainment", "festival"],
        venue: Venue::Outdoor,
        rating: 4.6,
        duration_days: 2,
    },
    FestivalTemplate {
        name: "Art & Culture Week",
        tags: &["art", "culture", "festival"],
        venue: Venue::Either,
        rating: 4.3,
        duration_days: 7,
    },
    FestivalTemplate {
        name: "Historic Heritage Days",
        tags: &["history", "culture", "outdoor", "festival"],
        venue: Venue::Outdoor,
        rating: 4.2,
        duration_days: 2,
    },
    FestivalTemplate {
        name: "Night Market Festival",
        tags: &["food", "shopping", "outdoor", "evening", "festival"],
        venue: Venue::Outdoor,
        rating: 4.4,
        duration_days: 1,
    },
    FestivalTemplate {
        name: "Seasonal Flower Festival",
        tags: &["nature", "outdoor", "photography", "festival"],
        venue: Venue::Outdoor,
        rating: 4.1,
        duration_days: 14,
    },
];

impl SearchService {
    /// Weather outlook for the destination and dates.
    pub fn fetch_weather(_destination: &str) -> WeatherSummary {
        WeatherSummary {
            condition: WeatherCondition::Sunny,
            temperature_c: 22.0,
            favors_indoor: false,
            forecast: "Partly cloudy with occasional sunshine".to_string(),
        }
    }

    /// Restaurant candidates for the destination.
    pub fn fetch_restaurants(_destination: &str) -> Vec<Candidate> {
        vec![
            Self::restaurant("Local Bistro", &["food", "fine dining"], Venue::Indoor, 4.5),
            Self::restaurant(
                "Street Food Market",
                &["food", "casual", "outdoor"],
                Venue::Outdoor,
                4.2,
            ),
            Self::restaurant(
                "Historic Tavern",
                &["history", "food", "indoor"],
                Venue::Indoor,
                4.3,
            ),
            Self::restaurant(
                "Rooftop Restaurant",
                &["food", "fine dining", "outdoor", "views"],
                Venue::Either,
                4.6,
            ),
            Self::restaurant(
                "Ethnic Fusion Cafe",
                &["food", "casual", "culture"],
                Venue::Indoor,
                4.1,
            ),
            Self::restaurant(
                "Seafood Grill",
                &["food", "fine dining", "fresh"],
                Venue::Indoor,
                4.4,
            ),
            Self::restaurant(
                "Local Pizza Joint",
                &["food", "casual", "family"],
                Venue::Indoor,
                4.0,
            ),
        ]
    }

    /// Activity candidates for the destination.
    pub fn fetch_activities(_destination: &str) -> Vec<Candidate> {
        vec![
            Self::activity("City Museum", &["history", "indoor", "culture"], Venue::Indoor, 4.4),
            Self::activity(
                "Food Walking Tour",
                &["food", "outdoor", "walking"],
                Venue::Outdoor,
                4.6,
            ),
            Self::activity(
                "Concert Hall",
                &["music", "indoor", "entertainment"],
                Venue::Indoor,
                4.3,
            ),
            Self::activity("Local Market", &["food", "outdoor", "culture"], Venue::Outdoor, 4.1),
            Self::activity("Art Gallery", &["art", "indoor", "culture"], Venue::Indoor, 4.5),
            Self::activity("Scenic Park", &["nature", "outdoor", "walking"], Venue::Outdoor, 4.2),
            Self::activity(
                "Historic Architecture Tour",
                &["history", "outdoor", "culture"],
                Venue::Outdoor,
                4.3,
            ),
            Self::activity("Cooking Class", &["food", "indoor", "hands-on"], Venue::Indoor, 4.7),
            Self::activity("Boat Tour", &["water", "outdoor", "scenic"], Venue::Outdoor, 4.4),
            Self::activity("Local Brewery", &["drinks", "indoor", "social"], Venue::Indoor, 4.2),
            Self::activity(
                "Shopping District",
                &["shopping", "indoor", "variety"],
                Venue::Indoor,
                3.9,
            ),
            Self::activity("Observatory", &["science", "indoor", "views"], Venue::Indoor, 4.3),
        ]
    }

    /// Festival candidates overlapping the trip dates. Presence is
    /// probabilistic to mirror real event-search variability; every returned
    /// candidate carries a date window fitted inside the trip.
    pub fn fetch_festivals(
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<Candidate> {
        let mut rng = rand::thread_rng();
        if !rng.gen_bool(FESTIVAL_PRESENCE_PROBABILITY) {
            return Vec::new();
        }

        let trip_days = (end_date - start_date).num_days() + 1;
        let count = rng.gen_range(1..=2);
        let city = destination.split(',').next().unwrap_or(destination).trim();

        FESTIVAL_TEMPLATES
            .choose_multiple(&mut rng, count)
            .filter(|template| template.duration_days <= trip_days)
            .map(|template| {
                let max_offset = trip_days - template.duration_days;
                let offset = rng.gen_range(0..=max_offset);
                let festival_start = start_date + Duration::days(offset);
                let festival_end = festival_start + Duration::days(template.duration_days - 1);

                Candidate {
                    name: template.name.replace("{destination}", city),
                    category: CandidateCategory::Festival,
                    tags: template.tags.iter().map(|t| t.to_string()).collect(),
                    venue: template.venue,
                    rating: template.rating,
                    date_window: Some(DateWindow {
                        start: festival_start,
                        end: festival_end,
                    }),
                }
            })
            .collect()
    }

    fn restaurant(name: &str, tags: &[&str], venue: Venue, rating: f64) -> Candidate {
        Candidate {
            name: name.to_string(),
            category: CandidateCategory::Restaurant,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            venue,
            rating,
            date_window: None,
        }
    }

    fn activity(name: &str, tags: &[&str], venue: Venue, rating: f64) -> Candidate {
        Candidate {
            name: name.to_string(),
            category: CandidateCategory::Activity,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            venue,
            rating,
            date_window: None,
        }
    }
}
