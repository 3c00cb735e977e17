//! Query parameters for the participant list.

use serde::{Deserialize, Serialize};

/// Roster fields the participant list can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    TotalCheckedTime,
    TotalTimeHackatimeHours,
    TotalTimeStopwatchHours,
    TotalTimeCombinedHours,
    FullName,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TotalCheckedTime => "totalCheckedTime",
            SortKey::TotalTimeHackatimeHours => "totalTimeHackatimeHours",
            SortKey::TotalTimeStopwatchHours => "totalTimeStopwatchHours",
            SortKey::TotalTimeCombinedHours => "totalTimeCombinedHours",
            SortKey::FullName => "fullName",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "totalCheckedTime" => Some(SortKey::TotalCheckedTime),
            "totalTimeHackatimeHours" => Some(SortKey::TotalTimeHackatimeHours),
            "totalTimeStopwatchHours" => Some(SortKey::TotalTimeStopwatchHours),
            "totalTimeCombinedHours" => Some(SortKey::TotalTimeCombinedHours),
            "fullName" => Some(SortKey::FullName),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Current sort selection of a list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    /// Selecting the active key flips the order; any other key starts descending.
    pub fn select(self, key: SortKey) -> Self {
        if key == self.key {
            Self {
                key,
                order: self.order.toggled(),
            }
        } else {
            Self {
                key,
                order: SortOrder::Desc,
            }
        }
    }
}

/// Boolean narrowing flags. `false` means "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default)]
    pub eligible: bool,
    #[serde(default)]
    pub has_github: bool,
    #[serde(default)]
    pub has_airport: bool,
}

impl Filters {
    /// Number of flags switched on.
    pub fn active_count(&self) -> usize {
        [self.eligible, self.has_github, self.has_airport]
            .into_iter()
            .filter(|on| *on)
            .count()
    }
}

/// A complete, immutable description of one list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub sort: SortState,
}

impl Query {
    /// Drop the search text and every filter, keeping the sort.
    pub fn clear_filters(self) -> Self {
        Self {
            search_text: String::new(),
            filters: Filters::default(),
            sort: self.sort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::TotalCheckedTime);
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_select_same_key_toggles_order() {
        let state = SortState::default().select(SortKey::TotalCheckedTime);
        assert_eq!(state.order, SortOrder::Asc);
        let state = state.select(SortKey::TotalCheckedTime);
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_select_new_key_resets_to_desc() {
        let state = SortState {
            key: SortKey::TotalCheckedTime,
            order: SortOrder::Asc,
        }
        .select(SortKey::FullName);
        assert_eq!(state.key, SortKey::FullName);
        assert_eq!(state.order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_key_names_round_trip_through_serde() {
        for key in [
            SortKey::TotalCheckedTime,
            SortKey::TotalTimeHackatimeHours,
            SortKey::TotalTimeStopwatchHours,
            SortKey::TotalTimeCombinedHours,
            SortKey::FullName,
        ] {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json, key.as_str());
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str("airport"), None);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let query = Query {
            search_text: "jake".into(),
            filters: Filters {
                eligible: true,
                has_github: true,
                has_airport: false,
            },
            sort: SortState {
                key: SortKey::FullName,
                order: SortOrder::Asc,
            },
        };
        assert_eq!(query.filters.active_count(), 2);

        let cleared = query.clear_filters();
        assert!(cleared.search_text.is_empty());
        assert_eq!(cleared.filters.active_count(), 0);
        assert_eq!(cleared.sort.key, SortKey::FullName);
        assert_eq!(cleared.sort.order, SortOrder::Asc);
    }
}
