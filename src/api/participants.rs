//! Participant list and profile endpoints.

use axum::extract::{rejection::QueryRejection, Path, Query, State};
use serde::{Deserialize, Serialize};

use super::{snapshot, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    Filters, Participant, ParticipantProfile, Query as RosterQuery, SortKey, SortOrder, SortState,
};
use crate::{query, AppState};

/// Maximum number of participants returned in one page.
const MAX_PAGE_SIZE: usize = 500;

/// List query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Free-text search.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub eligible: bool,
    #[serde(default)]
    pub has_github: bool,
    #[serde(default)]
    pub has_airport: bool,
    /// Sort key (default: totalCheckedTime).
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` or `desc` (default: desc).
    #[serde(default)]
    pub order: Option<String>,
    /// Sort key the viewer just picked; toggles or resets `order`.
    #[serde(default)]
    pub select: Option<String>,
    /// Drop `q` and every filter flag.
    #[serde(default)]
    pub clear: bool,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: Option<usize>,
}

fn parse_sort_key(raw: Option<&str>) -> Result<Option<SortKey>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => SortKey::from_str(s)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown sort key: {}", s))),
    }
}

impl ListParams {
    /// Validate the raw parameters into an engine query.
    pub fn to_query(&self) -> Result<RosterQuery, AppError> {
        let key = parse_sort_key(self.sort.as_deref())?.unwrap_or_default();
        let order = match self.order.as_deref() {
            None | Some("") => SortOrder::default(),
            Some(s) => SortOrder::from_str(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown sort order: {}", s)))?,
        };

        let mut sort = SortState { key, order };
        if let Some(selected) = parse_sort_key(self.select.as_deref())? {
            sort = sort.select(selected);
        }

        let query = RosterQuery {
            search_text: self.q.clone().unwrap_or_default(),
            filters: Filters {
                eligible: self.eligible,
                has_github: self.has_github,
                has_airport: self.has_airport,
            },
            sort,
        };

        Ok(if self.clear {
            query.clear_filters()
        } else {
            query
        })
    }
}

/// One page of the filtered, sorted roster plus list-level counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantList {
    pub participants: Vec<Participant>,
    /// Roster size before filtering.
    pub total: usize,
    /// Participants whose checked time reaches the threshold.
    pub eligible: usize,
    /// Participants passing search and filters, before paging.
    pub matched: usize,
    pub active_filters: usize,
    pub sort: SortState,
    pub offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// GET /api/participants - Search, filter and sort the roster.
pub async fn list_participants(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<ParticipantList> {
    let Query(params) = params?;
    let roster_query = params.to_query()?;
    let limit = params.limit.map(|l| l.min(MAX_PAGE_SIZE));

    let (roster, fetched_at) = snapshot(&state).await?;

    let view = query::apply(&roster, &roster_query);
    let matched = view.len();
    let participants = view
        .into_iter()
        .skip(params.offset)
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    success(
        ParticipantList {
            participants,
            total: roster.len(),
            eligible: roster.iter().filter(|p| p.is_checked_eligible()).count(),
            matched,
            active_filters: roster_query.filters.active_count(),
            sort: roster_query.sort,
            offset: params.offset,
            limit,
        },
        fetched_at,
    )
}

/// GET /api/participants/{key} - Profile by id, username or name.
pub async fn get_participant(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<ParticipantProfile> {
    let (roster, fetched_at) = snapshot(&state).await?;

    let participant = roster
        .into_iter()
        .find(|p| p.matches_route_key(&key))
        .ok_or_else(|| AppError::NotFound(format!("Participant {} not found", key)))?;

    success(ParticipantProfile::from(participant), fetched_at)
}
