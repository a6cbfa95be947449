use crate::summary::WorkoutSummary;

/// One summary line per workout, newline terminated
pub fn render(summaries: &[WorkoutSummary]) -> String {
    summaries
        .iter()
        .map(|summary| format!("{}\n", summary.get_message()))
        .collect()
}
