//! Search, filter and sort over a roster snapshot.
//!
//! `apply` is a pure function of `(roster, query)`: it never mutates the
//! roster and keeps no state between calls.

use std::cell::RefCell;
use std::cmp::Ordering;

use feruca::Collator;

use crate::models::{Filters, Participant, Query, SortKey, SortOrder, ELIGIBILITY_HOURS};

/// Case-insensitive substring match against name, GitHub login, first
/// Slack name and airport. Absent fields never match.
pub fn matches_search(participant: &Participant, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();

    [
        participant.full_name.as_deref(),
        participant.github_username.as_deref(),
        participant
            .slack_full_name
            .as_ref()
            .and_then(|names| names.first())
            .map(String::as_str),
        participant.airport.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Every enabled flag must hold.
pub fn matches_filters(participant: &Participant, filters: &Filters) -> bool {
    (!filters.eligible || participant.checked_hours() >= ELIGIBILITY_HOURS)
        && (!filters.has_github || participant.github().is_some())
        && (!filters.has_airport || participant.airport_code().is_some())
}

thread_local! {
    // Root-locale Unicode collation; `collate` needs `&mut`.
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

/// Locale-aware string ordering (CLDR root collation). Accents and case
/// only matter when the base letters tie, and lowercase sorts ahead of
/// uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    let ordering = COLLATOR.with(|collator| collator.borrow_mut().collate(a, b));

    ordering.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}

fn numeric_value(participant: &Participant, key: SortKey) -> f64 {
    match key {
        SortKey::TotalCheckedTime => participant.checked_hours(),
        SortKey::TotalTimeHackatimeHours => participant.hackatime_hours(),
        SortKey::TotalTimeStopwatchHours => participant.stopwatch_hours(),
        SortKey::TotalTimeCombinedHours => participant.combined_hours(),
        SortKey::FullName => 0.0,
    }
}

/// Ascending comparison of two participants on `key`.
pub fn compare(a: &Participant, b: &Participant, key: SortKey) -> Ordering {
    match key {
        SortKey::FullName => collate(
            a.full_name.as_deref().unwrap_or_default(),
            b.full_name.as_deref().unwrap_or_default(),
        ),
        _ => numeric_value(a, key).total_cmp(&numeric_value(b, key)),
    }
}

/// Filter, then stably sort, a roster according to `query`.
pub fn apply<'a>(roster: &'a [Participant], query: &Query) -> Vec<&'a Participant> {
    let mut view: Vec<&Participant> = roster
        .iter()
        .filter(|p| matches_search(p, &query.search_text) && matches_filters(p, &query.filters))
        .collect();

    let key = query.sort.key;
    match query.sort.order {
        SortOrder::Asc => view.sort_by(|a, b| compare(a, b, key)),
        SortOrder::Desc => view.sort_by(|a, b| compare(b, a, key)),
    }

    tracing::debug!(
        matched = view.len(),
        total = roster.len(),
        sort = key.as_str(),
        "Applied participant query"
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortState;

    fn named(id: &str, name: &str) -> Participant {
        Participant {
            id: Some(id.to_string()),
            full_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn ids(view: &[&Participant]) -> Vec<String> {
        view.iter().map(|p| p.id.clone().unwrap_or_default()).collect()
    }

    fn roster() -> Vec<Participant> {
        vec![
            Participant {
                github_username: Some("gitfinn".into()),
                total_checked_time: Some(120.0),
                total_time_hackatime_hours: Some(80.0),
                airport: Some("SFO".into()),
                ..named("finn", "Finn Mertens")
            },
            Participant {
                github_username: Some("jake-the-dog".into()),
                total_checked_time: Some(40.0),
                total_time_stopwatch_hours: Some(12.5),
                ..named("jake", "Jake")
            },
            Participant {
                github_username: Some("bubblegit".into()),
                total_checked_time: Some(100.0),
                slack_full_name: Some(vec!["PB".into(), "Princess".into()]),
                ..named("pb", "Bonnibel Bubblegum")
            },
            Participant {
                total_checked_time: None,
                airport: Some("LAX".into()),
                ..named("marcy", "Marceline")
            },
            Participant {
                username: Some("bmo".into()),
                slack_full_name: Some(vec!["Beemo Gitter".into()]),
                total_checked_time: Some(3.0),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_default_query_sorts_by_checked_time_descending() {
        let roster = roster();
        let view = apply(&roster, &Query::default());
        assert_eq!(ids(&view), vec!["finn", "pb", "jake", "", "marcy"]);
    }

    #[test]
    fn test_search_and_github_filter_sorted_by_name() {
        let roster = roster();
        let query = Query {
            search_text: "git".into(),
            filters: Filters {
                has_github: true,
                ..Default::default()
            },
            sort: SortState {
                key: SortKey::FullName,
                order: SortOrder::Asc,
            },
        };

        let view = apply(&roster, &query);
        assert_eq!(ids(&view), vec!["pb", "finn"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_checks_all_fields() {
        let roster = roster();
        let search = |text: &str| {
            let query = Query {
                search_text: text.into(),
                ..Default::default()
            };
            let mut found = ids(&apply(&roster, &query));
            found.sort();
            found
        };

        assert_eq!(search("MERTENS"), vec!["finn"]);
        assert_eq!(search("lax"), vec!["marcy"]);
        // Only the first Slack name is searched.
        assert_eq!(search("pb"), vec!["pb"]);
        assert!(search("princess").is_empty());
        assert_eq!(search("gitter"), vec![""]);
        assert!(search("nobody").is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let roster = roster();
        let filters = Filters {
            eligible: true,
            has_github: true,
            has_airport: true,
        };
        let query = Query {
            filters,
            ..Default::default()
        };

        let view = apply(&roster, &query);
        assert_eq!(ids(&view), vec!["finn"]);
        assert!(view.iter().all(|p| matches_filters(p, &filters)));
    }

    #[test]
    fn test_eligible_filter_uses_checked_time_inclusive() {
        let roster = roster();
        let query = Query {
            filters: Filters {
                eligible: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(ids(&apply(&roster, &query)), vec!["finn", "pb"]);
    }

    #[test]
    fn test_empty_strings_do_not_satisfy_presence_filters() {
        let roster = vec![Participant {
            github_username: Some(String::new()),
            airport: Some(String::new()),
            ..named("x", "X")
        }];
        let query = Query {
            filters: Filters {
                has_github: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(apply(&roster, &query).is_empty());
    }

    #[test]
    fn test_adjacent_pairs_respect_order() {
        let roster = roster();
        for key in [
            SortKey::TotalCheckedTime,
            SortKey::TotalTimeHackatimeHours,
            SortKey::TotalTimeStopwatchHours,
            SortKey::TotalTimeCombinedHours,
            SortKey::FullName,
        ] {
            for order in [SortOrder::Asc, SortOrder::Desc] {
                let query = Query {
                    sort: SortState { key, order },
                    ..Default::default()
                };
                let view = apply(&roster, &query);
                assert_eq!(view.len(), roster.len());
                for pair in view.windows(2) {
                    let ordering = compare(pair[0], pair[1], key);
                    match order {
                        SortOrder::Asc => assert_ne!(ordering, Ordering::Greater),
                        SortOrder::Desc => assert_ne!(ordering, Ordering::Less),
                    }
                }
            }
        }
    }

    #[test]
    fn test_apply_is_idempotent_and_leaves_roster_untouched() {
        let roster = roster();
        let before = roster.clone();
        let query = Query {
            search_text: "a".into(),
            sort: SortState {
                key: SortKey::FullName,
                order: SortOrder::Desc,
            },
            ..Default::default()
        };

        let first = ids(&apply(&roster, &query));
        let second = ids(&apply(&roster, &query));
        assert_eq!(first, second);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_empty_roster_yields_empty_view() {
        let query = Query {
            search_text: "anything".into(),
            ..Default::default()
        };
        assert!(apply(&[], &query).is_empty());
        assert!(apply(&[], &Query::default()).is_empty());
    }

    #[test]
    fn test_collate() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zed", "alpha"), Ordering::Greater);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("", "a"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
        assert_eq!(collate("Émile", "Eve"), Ordering::Less);
        assert_eq!(collate("Ángel", "Bob"), Ordering::Less);
    }

    #[test]
    fn test_name_sort_places_accented_names_by_base_letter() {
        let roster: Vec<Participant> = ["Zoe", "Émile", "Eve", "Ángel", "Bob"]
            .iter()
            .map(|name| named(name, name))
            .collect();
        let query = Query {
            sort: SortState {
                key: SortKey::FullName,
                order: SortOrder::Asc,
            },
            ..Default::default()
        };

        let view = apply(&roster, &query);
        assert_eq!(ids(&view), vec!["Ángel", "Bob", "Émile", "Eve", "Zoe"]);

        let query = Query {
            sort: SortState {
                key: SortKey::FullName,
                order: SortOrder::Desc,
            },
            ..Default::default()
        };
        let view = apply(&roster, &query);
        assert_eq!(ids(&view), vec!["Zoe", "Eve", "Émile", "Bob", "Ángel"]);
    }
}
