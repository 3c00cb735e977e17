//! Roster aggregation for the dashboard.
//!
//! Every figure here is derived from the locally recomputed hackatime +
//! stopwatch sum, not from the provider's `totalTimeCombinedHours` or
//! `totalCheckedTime`. The list view judges eligibility by checked time
//! instead; the two definitions are kept apart on purpose.

use crate::models::{
    DashboardStats, HistogramBucket, Participant, TopParticipant, TotalHours, ELIGIBILITY_HOURS,
};

/// Lower bounds and labels of the distribution buckets, highest first.
const BUCKETS: [(f64, &str); 5] = [
    (100.0, "100+"),
    (75.0, "75-100"),
    (50.0, "50-75"),
    (25.0, "25-50"),
    (0.0, "0-25"),
];

/// Number of rows in the leaderboard chart.
pub const TOP_N: usize = 10;

pub fn total_participants(roster: &[Participant]) -> usize {
    roster.len()
}

pub fn total_hours(roster: &[Participant]) -> TotalHours {
    let (hackatime, stopwatch) = roster.iter().fold((0.0, 0.0), |(h, s), p| {
        (h + p.hackatime_hours(), s + p.stopwatch_hours())
    });

    TotalHours {
        hackatime,
        stopwatch,
        combined: hackatime + stopwatch,
    }
}

/// Participants whose raw combined hours reach `threshold` (inclusive).
pub fn eligible_count(roster: &[Participant], threshold: f64) -> usize {
    roster
        .iter()
        .filter(|p| p.raw_combined_hours() >= threshold)
        .count()
}

/// Mean raw combined hours. NaN for an empty roster; callers guard.
pub fn average_hours(roster: &[Participant]) -> f64 {
    total_hours(roster).combined / roster.len() as f64
}

/// Index into `BUCKETS` for an hour count.
fn bucket_index(hours: f64) -> usize {
    BUCKETS
        .iter()
        .position(|(lower, _)| hours >= *lower)
        .unwrap_or(BUCKETS.len() - 1)
}

/// Partition the roster into the five hour ranges, lowest range first.
pub fn histogram(roster: &[Participant]) -> Vec<HistogramBucket> {
    let mut counts = [0usize; BUCKETS.len()];
    for participant in roster {
        counts[bucket_index(participant.raw_combined_hours())] += 1;
    }

    let total = roster.len();
    BUCKETS
        .iter()
        .zip(counts)
        .rev()
        .map(|(&(_, range), count)| HistogramBucket {
            range,
            count,
            percentage: percent_of(count, total),
        })
        .collect()
}

/// The `n` participants with the most raw combined hours. Ties keep roster order.
pub fn top_n(roster: &[Participant], n: usize) -> Vec<&Participant> {
    let mut ranked: Vec<&Participant> = roster.iter().collect();
    ranked.sort_by(|a, b| b.raw_combined_hours().total_cmp(&a.raw_combined_hours()));
    ranked.truncate(n);
    ranked
}

fn percent_of(part: usize, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    Some((part as f64 / total as f64 * 100.0).round() as u32)
}

/// Every dashboard figure for one roster snapshot.
pub fn summarize(roster: &[Participant]) -> DashboardStats {
    let total_participants = total_participants(roster);
    let total_hours = total_hours(roster);
    let eligible_participants = eligible_count(roster, ELIGIBILITY_HOURS);

    let average_hours = if roster.is_empty() {
        None
    } else {
        Some(average_hours(roster))
    };

    let top_participants = top_n(roster, TOP_N)
        .into_iter()
        .map(|p| TopParticipant {
            route_key: p.route_key(),
            label: p.chart_label(),
            hackatime_hours: p.hackatime_hours(),
            stopwatch_hours: p.stopwatch_hours(),
            combined_hours: p.raw_combined_hours(),
        })
        .collect();

    DashboardStats {
        total_participants,
        total_hours,
        eligible_participants,
        average_hours,
        percent_complete: percent_of(eligible_participants, total_participants),
        estimated_trips: (total_hours.combined / ELIGIBILITY_HOURS).round() as u64,
        histogram: histogram(roster),
        top_participants,
    }
}
