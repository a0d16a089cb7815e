// Selection of the repositories shown in the panel.
// Filters out forks and orders by stars, then by most recent update.

use std::cmp::Reverse;

use crate::github::Repository;

/// Extra filters applied on top of fork exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    pub exclude_archived: bool,
}

/// Rank `records` for display. Never mutates the input records.
pub fn rank(records: &[Repository], options: RankOptions) -> Vec<Repository> {
    let mut ranked: Vec<Repository> = records
        .iter()
        .filter(|r| !r.fork)
        .filter(|r| !(options.exclude_archived && r.archived))
        .cloned()
        .collect();

    ranked.sort_by_key(|r| (Reverse(r.stargazers_count), Reverse(r.updated_at)));
    ranked
}

/// Sum of stars across `repos`.
pub fn total_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| r.stargazers_count).sum()
}
