use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::candidate::{CandidateKey, ScoredCandidate};
use crate::models::trip::{DayPlan, SlotAssignment};

/// Cross-day deduplication state, scoped to one planning request. The used
/// sets track the current cycle through each pool and reset on exhaustion;
/// `ever_assigned` records the whole trip's history and never resets, so any
/// later pick of a recorded key is labeled a return visit.
#[derive(Debug, Default)]
pub struct SchedulerState {
    pub used_activities: HashSet<CandidateKey>,
    pub used_restaurants: HashSet<CandidateKey>,
    pub ever_assigned: HashSet<CandidateKey>,
}

impl SchedulerState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct SchedulingService;

impl SchedulingService {
    /// Build one DayPlan per calendar date in [start, end], filling each slot
    /// with the highest-scoring eligible candidate that has not been used
    /// elsewhere in the trip. Festivals running on a given date pre-empt that
    /// day's morning activity pick.
    pub fn build_itinerary(
        state: &mut SchedulerState,
        activities: &[Arc<ScoredCandidate>],
        restaurants: &[Arc<ScoredCandidate>],
        festivals: &[Arc<ScoredCandidate>],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Vec<DayPlan> {
        let mut days = Vec::new();

        for date in start_date.iter_days().take_while(|d| *d <= end_date) {
            days.push(Self::build_day(state, activities, restaurants, festivals, date));
        }

        days
    }

    fn build_day(
        state: &mut SchedulerState,
        activities: &[Arc<ScoredCandidate>],
        restaurants: &[Arc<ScoredCandidate>],
        festivals: &[Arc<ScoredCandidate>],
        date: NaiveDate,
    ) -> DayPlan {
        let mut day = DayPlan::empty(date);
        // Forbids one identity key occupying two slots on the same day, even
        // across the exhaustion reset.
        let mut day_used: HashSet<CandidateKey> = HashSet::new();

        // Festivals valid today take the morning slot over the generic pick.
        // A festival freed by an exhaustion reset is still a return visit.
        if let Some(festival) = Self::pick_festival(festivals, &state.used_activities, date) {
            let key = festival.candidate.key();
            let return_visit = state.ever_assigned.contains(&key);
            state.used_activities.insert(key.clone());
            day_used.insert(key.clone());
            state.ever_assigned.insert(key);
            day.morning = Some(SlotAssignment {
                candidate: festival.clone(),
                return_visit,
            });
        }

        if day.morning.is_none() {
            day.morning = Self::fill_slot(
                activities,
                &mut state.used_activities,
                &mut day_used,
                &mut state.ever_assigned,
            );
        }
        day.afternoon = Self::fill_slot(
            activities,
            &mut state.used_activities,
            &mut day_used,
            &mut state.ever_assigned,
        );

        day.lunch = Self::fill_slot(
            restaurants,
            &mut state.used_restaurants,
            &mut day_used,
            &mut state.ever_assigned,
        );
        day.evening = Self::fill_slot(
            restaurants,
            &mut state.used_restaurants,
            &mut day_used,
            &mut state.ever_assigned,
        );

        day
    }

    /// Highest-scoring unused festival whose date window covers `date`.
    fn pick_festival<'a>(
        festivals: &'a [Arc<ScoredCandidate>],
        used: &HashSet<CandidateKey>,
        date: NaiveDate,
    ) -> Option<&'a Arc<ScoredCandidate>> {
        let mut best: Option<&Arc<ScoredCandidate>> = None;

        for festival in festivals {
            let runs_today = festival
                .candidate
                .date_window
                .map(|window| window.contains(date))
                .unwrap_or(false);
            if !runs_today || used.contains(&festival.candidate.key()) {
                continue;
            }
            best = Some(Self::better_of(best, festival));
        }

        best
    }

    /// Fill one slot from a pool, honoring the cross-day used set and the
    /// within-day set. When the whole pool has been used once, the used set
    /// is cleared and selection retried. Any pick whose key already appears
    /// in the trip history is a return visit, whether or not the reset
    /// happened during this call. A slot stays empty only when the pool
    /// itself is empty or every candidate already appears elsewhere in the
    /// same day.
    fn fill_slot(
        pool: &[Arc<ScoredCandidate>],
        used: &mut HashSet<CandidateKey>,
        day_used: &mut HashSet<CandidateKey>,
        ever_assigned: &mut HashSet<CandidateKey>,
    ) -> Option<SlotAssignment> {
        if pool.is_empty() {
            return None;
        }

        let choice = match Self::pick_best(pool, used, day_used) {
            Some(choice) => choice,
            None => {
                // Pool exhausted across the trip: allow repeats from here on.
                used.clear();
                Self::pick_best(pool, used, day_used)?
            }
        };

        let candidate = choice.clone();
        let key = candidate.candidate.key();
        let return_visit = ever_assigned.contains(&key);
        used.insert(key.clone());
        day_used.insert(key.clone());
        ever_assigned.insert(key);

        Some(SlotAssignment {
            candidate,
            return_visit,
        })
    }

    /// Highest score wins; ties go to the higher rating, then to whichever
    /// candidate appeared first in the input pool. Only strict comparisons
    /// replace the running best, which keeps selection stable.
    fn pick_best<'a>(
        pool: &'a [Arc<ScoredCandidate>],
        used: &HashSet<CandidateKey>,
        day_used: &HashSet<CandidateKey>,
    ) -> Option<&'a Arc<ScoredCandidate>> {
        let mut best: Option<&Arc<ScoredCandidate>> = None;

        for candidate in pool {
            let key = candidate.candidate.key();
            if used.contains(&key) || day_used.contains(&key) {
                continue;
            }
            best = Some(Self::better_of(best, candidate));
        }

        best
    }

    fn better_of<'a>(
        current: Option<&'a Arc<ScoredCandidate>>,
        challenger: &'a Arc<ScoredCandidate>,
    ) -> &'a Arc<ScoredCandidate> {
        match current {
            None => challenger,
            Some(best) => {
                if challenger.score > best.score
                    || (challenger.score == best.score
                        && challenger.candidate.rating > best.candidate.rating)
                {
                    challenger
                } else {
                    best
                }
            }
        }
    }
}
