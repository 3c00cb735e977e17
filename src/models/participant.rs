//! Participant model matching the roster provider's neighbor records.

use serde::{Deserialize, Serialize};

/// Hour threshold a participant must reach to qualify for the trip.
pub const ELIGIBILITY_HOURS: f64 = 100.0;

/// One entry in the roster.
///
/// Every field except the identity is optional upstream; numeric hour
/// fields that are absent or `null` read as `0` through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_full_name: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_hackatime_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_stopwatch_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_combined_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_checked_time: Option<f64>,
}

/// Missing, negative and NaN hour counts all read as zero.
fn hours(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v > 0.0 => v,
        _ => 0.0,
    }
}

/// Treat empty strings the same as absent ones.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Participant {
    pub fn hackatime_hours(&self) -> f64 {
        hours(self.total_time_hackatime_hours)
    }

    pub fn stopwatch_hours(&self) -> f64 {
        hours(self.total_time_stopwatch_hours)
    }

    /// Provider-supplied combined figure, as shown in list and detail views.
    pub fn combined_hours(&self) -> f64 {
        hours(self.total_time_combined_hours)
    }

    pub fn checked_hours(&self) -> f64 {
        hours(self.total_checked_time)
    }

    /// Hackatime plus stopwatch, recomputed locally. The dashboard's
    /// statistics rank and bucket by this, never by `combined_hours`.
    pub fn raw_combined_hours(&self) -> f64 {
        self.hackatime_hours() + self.stopwatch_hours()
    }

    /// Eligibility as judged by the list and detail views.
    pub fn is_checked_eligible(&self) -> bool {
        self.checked_hours() >= ELIGIBILITY_HOURS
    }

    pub fn github(&self) -> Option<&str> {
        present(&self.github_username)
    }

    pub fn airport_code(&self) -> Option<&str> {
        present(&self.airport)
    }

    /// First Slack display name, if any.
    pub fn slack_name(&self) -> Option<&str> {
        self.slack_full_name
            .as_ref()
            .and_then(|names| names.first())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn github_url(&self) -> Option<String> {
        self.github().map(|login| format!("https://github.com/{}", login))
    }

    pub fn display_name(&self) -> &str {
        present(&self.full_name)
            .or_else(|| present(&self.username))
            .unwrap_or("Anonymous")
    }

    /// Short name used for chart axes.
    pub fn chart_label(&self) -> String {
        let name = present(&self.full_name).unwrap_or("Unknown");
        if name.chars().count() > 10 {
            let head: String = name.chars().take(10).collect();
            format!("{}...", head)
        } else {
            name.to_string()
        }
    }

    /// Key used to address this participant's profile.
    pub fn route_key(&self) -> String {
        if let Some(id) = present(&self.id) {
            return id.to_string();
        }
        if let Some(username) = present(&self.username) {
            return username.to_string();
        }
        urlencoding::encode(self.full_name.as_deref().unwrap_or_default()).into_owned()
    }

    /// Whether `key` addresses this participant, by any of the forms a
    /// profile link may have been built from.
    pub fn matches_route_key(&self, key: &str) -> bool {
        if present(&self.id) == Some(key) || present(&self.username) == Some(key) {
            return true;
        }
        match present(&self.full_name) {
            Some(name) => name == key || urlencoding::encode(name) == key,
            None => false,
        }
    }
}

/// Per-participant view served by the profile endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantProfile {
    pub participant: Participant,
    pub display_name: String,
    pub route_key: String,
    pub eligible: bool,
    pub progress_percent: u32,
    pub hours_remaining: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_name: Option<String>,
}

impl From<Participant> for ParticipantProfile {
    fn from(participant: Participant) -> Self {
        let checked = participant.checked_hours();
        let progress = (checked / ELIGIBILITY_HOURS * 100.0).round().min(100.0);

        Self {
            display_name: participant.display_name().to_string(),
            route_key: participant.route_key(),
            eligible: participant.is_checked_eligible(),
            progress_percent: progress as u32,
            hours_remaining: (ELIGIBILITY_HOURS - checked).max(0.0),
            github_url: participant.github_url(),
            slack_name: participant.slack_name().map(str::to_string),
            participant,
        }
    }
}
