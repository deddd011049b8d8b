use std::collections::HashMap;

/// Sum a keyed stat breakdown, leaving out the named sub-stats.
///
/// An empty breakdown sums to 0, and integer addition is commutative, so the
/// result does not depend on map iteration order.
pub fn sum_stats(stats: &HashMap<String, i64>, exclude: &[&str]) -> i64 {
    stats
        .iter()
        .filter(|(key, _)| !exclude.contains(&key.as_str()))
        .map(|(_, value)| value)
        .sum()
}
