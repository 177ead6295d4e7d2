//! Per-season roster statistics.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::types::RosterRecord;

const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub total_players: usize,
    pub total_teams: usize,
    pub by_category: Vec<LabelCount>,
    /// Ten most common statuses; blank statuses are not counted.
    pub by_status: Vec<LabelCount>,
    /// Ten teams with the most players.
    pub top_teams: Vec<LabelCount>,
}

/// Count entries, most frequent first, ties broken by label.
fn ranked<'a, I>(labels: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut ranked: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|l, r| r.count.cmp(&l.count).then_with(|| l.label.cmp(&r.label)));
    ranked
}

pub fn summarize(records: &[RosterRecord]) -> RosterSummary {
    let categories: Vec<String> = records.iter().map(|r| r.category.to_string()).collect();

    let mut by_status = ranked(
        records
            .iter()
            .map(|r| r.current_status.trim())
            .filter(|s| !s.is_empty()),
    );
    by_status.truncate(TOP_N);

    let mut top_teams = ranked(records.iter().map(|r| r.team.as_str()));
    top_teams.truncate(TOP_N);

    RosterSummary {
        total_players: records.len(),
        total_teams: records
            .iter()
            .map(|r| r.team.as_str())
            .collect::<BTreeSet<_>>()
            .len(),
        by_category: ranked(categories.iter().map(String::as_str)),
        by_status,
        top_teams,
    }
}
