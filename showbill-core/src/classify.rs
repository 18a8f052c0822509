//! Past/upcoming show classification.
//!
//! A show is never stored as "past" or "upcoming": classification happens
//! at read time against a wall-clock instant captured once per call, so the
//! same show can classify differently across calls. The rule is uniform
//! everywhere: a show is upcoming iff its start time is strictly after
//! `now`; everything else, including a start time equal to `now`, is past.

use chrono::NaiveDateTime;

/// Anything with a scheduled start instant.
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;
}

impl Scheduled for NaiveDateTime {
    fn start_time(&self) -> NaiveDateTime {
        *self
    }
}

/// Count shows that already started, with a single pass over the list.
///
/// O(n); recomputed on every invocation, no caching.
pub fn past_shows_count<T: Scheduled>(shows: &[T], now: NaiveDateTime) -> usize {
    shows.iter().filter(|s| !is_upcoming(*s, now)).count()
}

/// Count shows strictly in the future, with a single pass over the list.
pub fn upcoming_shows_count<T: Scheduled>(shows: &[T], now: NaiveDateTime) -> usize {
    shows.iter().filter(|s| is_upcoming(*s, now)).count()
}

/// Split a show list into (past, upcoming), preserving input order.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: NaiveDateTime) -> (Vec<T>, Vec<T>) {
    shows.into_iter().partition(|s| !is_upcoming(s, now))
}

fn is_upcoming<T: Scheduled>(show: &T, now: NaiveDateTime) -> bool {
    show.start_time() > now
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn strictly_later_is_upcoming() {
        let shows = vec![at(20)];
        assert_eq!(upcoming_shows_count(&shows, at(12)), 1);
        assert_eq!(past_shows_count(&shows, at(12)), 0);
    }

    #[test]
    fn strictly_earlier_is_past() {
        let shows = vec![at(8)];
        assert_eq!(upcoming_shows_count(&shows, at(12)), 0);
        assert_eq!(past_shows_count(&shows, at(12)), 1);
    }

    #[test]
    fn boundary_counts_as_past() {
        let shows = vec![at(12)];
        assert_eq!(upcoming_shows_count(&shows, at(12)), 0);
        assert_eq!(past_shows_count(&shows, at(12)), 1);
    }

    #[test]
    fn counts_always_sum_to_len() {
        let shows = vec![at(8), at(12), at(20), at(23)];
        let now = at(12);
        assert_eq!(
            past_shows_count(&shows, now) + upcoming_shows_count(&shows, now),
            shows.len()
        );
    }

    #[test]
    fn partition_matches_counts_and_keeps_order() {
        let shows = vec![at(8), at(20), at(9), at(21)];
        let now = at(12);
        let past_count = past_shows_count(&shows, now);
        let upcoming_count = upcoming_shows_count(&shows, now);

        let (past, upcoming) = partition_shows(shows, now);
        assert_eq!(past.len(), past_count);
        assert_eq!(upcoming.len(), upcoming_count);
        assert_eq!(past, vec![at(8), at(9)]);
        assert_eq!(upcoming, vec![at(20), at(21)]);
    }

    #[test]
    fn empty_list() {
        let shows: Vec<NaiveDateTime> = vec![];
        assert_eq!(past_shows_count(&shows, at(12)), 0);
        assert_eq!(upcoming_shows_count(&shows, at(12)), 0);
    }
}
