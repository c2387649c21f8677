use std::path::Path;

use console::Style;
use tricolor_core::pipeline::ObservationReport;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_observation_summary(dir: &Path, report: &ObservationReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Observation composited"));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Folder"),
        s.path.apply_to(dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Aligned"),
        s.value.apply_to(if report.aligned { "yes" } else { "no (radius already explored)" })
    );
    println!(
        "  {:<14}green {} / red {} (radius {})",
        s.label.apply_to("Offsets"),
        s.value.apply_to(report.state.green),
        s.value.apply_to(report.state.red),
        report.state.max_radius
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Outputs"),
        s.value.apply_to(report.outputs.join(", "))
    );
    println!();
}
