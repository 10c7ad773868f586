use chrono::{DateTime, Utc};
use crate::domain::models::meetup::Meetup;

/// Whether an already-subscribed meetup's interval intersects the candidate
/// interval. Three cases, all bounds inclusive: the existing meetup starts
/// inside the candidate window, ends inside it, or spans it entirely.
pub fn ranges_overlap(
    existing_start: DateTime<Utc>,
    existing_end: DateTime<Utc>,
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
) -> bool {
    let starts_within = existing_start >= candidate_start && existing_start <= candidate_end;
    let ends_within = existing_end >= candidate_start && existing_end <= candidate_end;
    let spans = existing_start <= candidate_start && existing_end >= candidate_end;

    starts_within || ends_within || spans
}

/// First subscribed meetup clashing with the candidate's time window, if any.
pub fn find_schedule_conflict<'a>(
    candidate: &Meetup,
    subscribed: &'a [Meetup],
) -> Option<&'a Meetup> {
    subscribed.iter().find(|existing| {
        ranges_overlap(
            existing.start_date,
            existing.end_date,
            candidate.start_date,
            candidate.end_date,
        )
    })
}
