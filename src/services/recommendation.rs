use crate::models::fruit::ScoredFruit;

pub const DEFAULT_RECOMMENDATION_COUNT: usize = 3;

/// Best `n` fruits by climate score, highest first.
///
/// Equal scores keep their catalog order (`sort_by` is stable), so running
/// the selection again on its own output changes nothing.
pub fn select_top(scored: &[ScoredFruit], n: usize) -> Vec<ScoredFruit> {
    let mut ranked = scored.to_vec();
    ranked.sort_by(|a, b| b.climate_score.cmp(&a.climate_score));
    ranked.truncate(n);
    ranked
}
