//! Dashboard summary figures.

use serde::Serialize;

/// Summed hours per tracking source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TotalHours {
    pub hackatime: f64,
    pub stopwatch: f64,
    pub combined: f64,
}

/// One slice of the hour distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBucket {
    pub range: &'static str,
    pub count: usize,
    /// Share of all participants, rounded; absent for an empty roster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

/// Leaderboard row for the top-N chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopParticipant {
    pub route_key: String,
    pub label: String,
    pub hackatime_hours: f64,
    pub stopwatch_hours: f64,
    pub combined_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_participants: usize,
    pub total_hours: TotalHours,
    pub eligible_participants: usize,
    pub average_hours: Option<f64>,
    pub percent_complete: Option<u32>,
    pub estimated_trips: u64,
    pub histogram: Vec<HistogramBucket>,
    pub top_participants: Vec<TopParticipant>,
}
