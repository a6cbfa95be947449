use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::summary::WorkoutSummary;

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "Workout")]
    training_type: String,
    #[tabled(rename = "Duration (h)")]
    duration: String,
    #[tabled(rename = "Distance (km)")]
    distance: String,
    #[tabled(rename = "Speed (km/h)")]
    speed: String,
    #[tabled(rename = "Calories")]
    calories: String,
}

/// ASCII table for terminal display
pub fn render(summaries: &[WorkoutSummary]) -> String {
    let rows = summaries.iter().map(|s| TableRow {
        training_type: s.training_type.clone(),
        duration: format!("{:.3}", s.duration),
        distance: format!("{:.3}", s.distance),
        speed: format!("{:.3}", s.speed),
        calories: format!("{:.3}", s.calories),
    });

    let mut table = Table::new(rows);
    table.with(Style::ascii());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_summaries;

    #[test]
    fn test_render_table() {
        let output = render(&sample_summaries());

        assert!(output.contains("Workout"));
        assert!(output.contains("Distance (km)"));
        assert!(output.contains("Swimming"));
        assert!(output.contains("699.750"));
    }
}
