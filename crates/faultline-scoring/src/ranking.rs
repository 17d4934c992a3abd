use std::cmp::Ordering;

use faultline_core::models::Score;

/// Sort scores by descending total, ties broken by ascending lab id, and
/// assign 1-based ranks.
pub fn rank_labs(mut scores: Vec<Score>) -> Vec<Score> {
    scores.sort_by(compare);
    for (position, score) in scores.iter_mut().enumerate() {
        score.rank = Some(position as u32 + 1);
    }
    scores
}

fn compare(a: &Score, b: &Score) -> Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| a.lab_id.cmp(&b.lab_id))
}
