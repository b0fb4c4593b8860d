use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, CandidateCategory, ScoredCandidate, WeatherSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Score every candidate starts from before any bonus
    pub base_score: f64,
    /// Bonus per distinct user interest matching a candidate tag
    pub interest_bonus: f64,
    /// Bonus when the candidate's venue suits the forecast
    pub weather_bonus: f64,
    /// Flat boost for festivals, which are only valid on specific dates
    pub festival_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: 0.5,
            interest_bonus: 0.2,
            weather_bonus: 0.1,
            festival_bonus: 0.2,
        }
    }
}

impl ScoringWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_score: std::env::var("SCORE_BASE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.base_score),
            interest_bonus: std::env::var("SCORE_INTEREST_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.interest_bonus),
            weather_bonus: std::env::var("SCORE_WEATHER_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.weather_bonus),
            festival_bonus: std::env::var("SCORE_FESTIVAL_BONUS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.festival_bonus),
        }
    }
}

/// Case-folded substring-or-exact match of one interest keyword against one
/// candidate tag. Interests are normalized upstream; tags are folded here.
pub fn interest_matches_tag(interest: &str, tag: &str) -> bool {
    let tag = tag.to_lowercase();
    tag == interest || tag.contains(interest)
}

#[derive(Default)]
pub struct ScoringService {
    pub weights: ScoringWeights,
}

impl ScoringService {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::from_env(),
        }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score a single candidate against the user's interests and the
    /// forecast. Pure: no candidate is dropped, the result is clamped to
    /// [0, 1] even when bonuses stack past it.
    pub fn score_candidate(
        &self,
        candidate: &Candidate,
        interests: &[String],
        weather: &WeatherSummary,
    ) -> f64 {
        let mut score = self.weights.base_score;

        for interest in interests {
            if candidate
                .tags
                .iter()
                .any(|tag| interest_matches_tag(interest, tag))
            {
                score += self.weights.interest_bonus;
            }
        }

        if weather.suits(candidate.venue) {
            score += self.weights.weather_bonus;
        }

        if candidate.category == CandidateCategory::Festival {
            score += self.weights.festival_bonus;
        }

        score.clamp(0.0, 1.0)
    }

    /// Score every candidate in a pool, preserving input order.
    pub fn score_candidates(
        &self,
        candidates: &[Candidate],
        interests: &[String],
        weather: &WeatherSummary,
    ) -> Vec<ScoredCandidate> {
        candidates
            .iter()
            .map(|candidate| ScoredCandidate {
                candidate: candidate.clone(),
                score: self.score_candidate(candidate, interests, weather),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{Venue, WeatherCondition};

    fn sunny() -> WeatherSummary {
        WeatherSummary {
            condition: WeatherCondition::Sunny,
            temperature_c: 22.0,
            favors_indoor: false,
            forecast: "Partly cloudy with occasional sunshine".to_string(),
        }
    }

    fn rainy() -> WeatherSummary {
        WeatherSummary {
            condition: WeatherCondition::Rainy,
            temperature_c: 12.0,
            favors_indoor: true,
            forecast: "Steady rain".to_string(),
        }
    }

    fn candidate(name: &str, category: CandidateCategory, tags: &[&str], venue: Venue) -> Candidate {
        Candidate {
            name: name.to_string(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            venue,
            rating: 4.0,
            date_window: None,
        }
    }

    #[test]
    fn base_score_with_no_interests() {
        let service = ScoringService::default();
        let museum = candidate(
            "City Museum",
            CandidateCategory::Activity,
            &["history", "culture"],
            Venue::Indoor,
        );

        // Indoor venue still earns the weather bonus.
        let score = service.score_candidate(&museum, &[], &sunny());
        assert!((score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn each_distinct_interest_adds_bonus() {
        let service = ScoringService::default();
        let tour = candidate(
            "Food Walking Tour",
            CandidateCategory::Activity,
            &["food", "outdoor", "walking"],
            Venue::Outdoor,
        );

        let interests = vec!["food".to_string(), "walking".to_string()];
        let score = service.score_candidate(&tour, &interests, &sunny());
        // 0.5 base + 0.2 * 2 interests + 0.1 weather
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn interest_matching_is_case_insensitive_substring() {
        assert!(interest_matches_tag("food", "Food"));
        assert!(interest_matches_tag("food", "street food"));
        assert!(interest_matches_tag("history", "history"));
        assert!(!interest_matches_tag("music", "history"));
    }

    #[test]
    fn outdoor_candidate_loses_weather_bonus_in_rain() {
        let service = ScoringService::default();
        let park = candidate(
            "Scenic Park",
            CandidateCategory::Activity,
            &["nature", "outdoor"],
            Venue::Outdoor,
        );

        let score = service.score_candidate(&park, &[], &rainy());
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn festivals_get_time_sensitivity_boost() {
        let service = ScoringService::default();
        let festival = candidate(
            "Harvest Food Festival",
            CandidateCategory::Festival,
            &["food", "outdoor"],
            Venue::Outdoor,
        );

        let score = service.score_candidate(&festival, &[], &sunny());
        // 0.5 base + 0.1 weather + 0.2 festival
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn score_is_clamped_to_one() {
        let service = ScoringService::default();
        let festival = candidate(
            "Everything Festival",
            CandidateCategory::Festival,
            &["food", "music", "art", "history", "culture"],
            Venue::Either,
        );

        let interests: Vec<String> = ["food", "music", "art", "history", "culture"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let score = service.score_candidate(&festival, &interests, &sunny());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn every_candidate_is_scored_in_order() {
        let service = ScoringService::default();
        let pool = vec![
            candidate("A", CandidateCategory::Activity, &["a"], Venue::Indoor),
            candidate("B", CandidateCategory::Activity, &["b"], Venue::Indoor),
            candidate("C", CandidateCategory::Activity, &["c"], Venue::Indoor),
        ];

        let scored = service.score_candidates(&pool, &[], &sunny());
        assert_eq!(scored.len(), 3);
        let names: Vec<&str> = scored.iter().map(|s| s.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
