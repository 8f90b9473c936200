//! Plain-text formatting of a run.

use lode_core::Mesh;
use lode_solvers::one_step::{Event, Solution, Status};

/// Formats the mesh as a comma-separated line.
pub fn mesh_line(mesh: &Mesh) -> String {
    let points: Vec<String> = mesh.iter().map(|t| format!("{t:.6}")).collect();
    format!("mesh: {}", points.join(", "))
}

/// Formats a single step as `old, new: [.., ..]`.
pub fn step_line(event: &Event) -> String {
    format!("old, new: [{:.6}, {:.6}]", event.previous, event.current)
}

/// Formats the final value, its error against `exact` and how the run ended.
pub fn summary(solution: &Solution, exact: f64) -> String {
    let mut lines = vec![
        format!("fdm value: {:.6}", solution.value),
        format!("exact value: {exact:.6}"),
        format!("abs error: {:.6e}", (solution.value - exact).abs()),
        format!("steps applied: {}", solution.steps),
    ];
    if solution.status == Status::StoppedByObserver {
        lines.push("stopped early: value left the divergence bound".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_line_lists_every_point() {
        let mesh = Mesh::new(4, 2.0).expect("valid mesh");

        assert_eq!(
            mesh_line(&mesh),
            "mesh: 0.000000, 0.500000, 1.000000, 1.500000, 2.000000"
        );
    }

    #[test]
    fn step_line_matches_reference_format() {
        let event = Event {
            step: 0,
            time: 0.0,
            previous: 2.0,
            current: 2.0,
        };

        assert_eq!(step_line(&event), "old, new: [2.000000, 2.000000]");
    }

    #[test]
    fn summary_reports_value_and_error() {
        let solution = Solution {
            status: Status::Complete,
            value: 3.5,
            steps: 10,
            mesh: Mesh::new(10, 1.0).expect("valid mesh"),
            history: Vec::new(),
        };

        let text = summary(&solution, 3.25);

        assert_eq!(
            text,
            "fdm value: 3.500000\nexact value: 3.250000\nabs error: 2.500000e-1\nsteps applied: 10"
        );
    }

    #[test]
    fn summary_flags_early_stop() {
        let solution = Solution {
            status: Status::StoppedByObserver,
            value: 256.0,
            steps: 4,
            mesh: Mesh::new(10, 1.0).expect("valid mesh"),
            history: Vec::new(),
        };

        let text = summary(&solution, 0.0);

        assert!(text.ends_with("stopped early: value left the divergence bound"));
    }
}
