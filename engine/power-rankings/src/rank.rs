//! Competition ranking of per-roster metrics

use league_data::RosterId;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Per-roster numeric metric
pub type MetricMap = BTreeMap<RosterId, f64>;

/// Per-roster rank, 1 = best
pub type RankMap = BTreeMap<RosterId, u32>;

/// Which direction of a metric is better
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Lowest value gets rank 1
    Ascending,
    /// Highest value gets rank 1
    Descending,
}

/// Rank every roster in `metrics` using competition ("min") ranking
///
/// Equal values share the lowest ordinal position of their group, and the
/// next distinct value skips ahead by the group size (1, 2, 2, 4). Rosters
/// with equal values are ordered by ID, so the result never depends on
/// iteration order.
pub fn competition_rank(metrics: &MetricMap, order: RankOrder) -> RankMap {
    let mut entries: Vec<(RosterId, f64)> = metrics.iter().map(|(id, v)| (*id, *v)).collect();
    entries.sort_by(|(a_id, a), (b_id, b)| compare(*a, *b, order).then_with(|| a_id.cmp(b_id)));

    let mut ranks = RankMap::new();
    let mut previous: Option<(f64, u32)> = None;
    for (position, (roster_id, value)) in entries.into_iter().enumerate() {
        let rank = match previous {
            Some((prev_value, prev_rank)) if prev_value == value => prev_rank,
            _ => position as u32 + 1,
        };
        ranks.insert(roster_id, rank);
        previous = Some((value, rank));
    }
    ranks
}

fn compare(a: f64, b: f64, order: RankOrder) -> Ordering {
    match order {
        RankOrder::Ascending => a.total_cmp(&b),
        RankOrder::Descending => b.total_cmp(&a),
    }
}

/// Convert integer counts into a metric map
pub fn counts_to_metrics(counts: &BTreeMap<RosterId, u32>) -> MetricMap {
    counts.iter().map(|(id, count)| (*id, f64::from(*count))).collect()
}
