//! Stats export as delimited label/value/unit rows

use crate::sim::{SimulationConfig, Stats};

/// Title row of the export
pub const EXPORT_TITLE: &str = "Cricket Projectile Motion Simulation Data";

/// One export row; empty rows are blank separators
pub type Row = Vec<String>;

fn row<const N: usize>(cells: [&str; N]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Result rows as (label, value, unit), values formatted to 2 decimals
pub fn stats_rows(stats: &Stats) -> Vec<(&'static str, String, &'static str)> {
    vec![
        ("Velocity X", format!("{:.2}", stats.velocity_x), "m/s"),
        ("Velocity Y", format!("{:.2}", stats.velocity_y), "m/s"),
        ("Max Height", format!("{:.2}", stats.max_height), "m"),
        ("Range (Distance)", format!("{:.2}", stats.range), "m"),
        ("Flight Time", format!("{:.2}", stats.elapsed_time), "s"),
        ("Current Height", format!("{:.2}", stats.current_height), "m"),
    ]
}

/// Every row of the export: header, parameters, then results
pub fn export_rows(config: &SimulationConfig, stats: &Stats, generated: &str) -> Vec<Row> {
    let angle = config.angle.to_string();
    let speed = config.speed.to_string();
    let gravity = config.gravity.to_string();
    let restitution = config.restitution.to_string();
    let mut rows = vec![
        row([EXPORT_TITLE]),
        row(["Generated:", generated]),
        Row::new(),
        row(["Parameter", "Value", "Unit"]),
        row(["Launch Angle", angle.as_str(), "°"]),
        row(["Initial Velocity", speed.as_str(), "m/s"]),
        row(["Gravity", gravity.as_str(), "m/s²"]),
        row(["Restitution", restitution.as_str(), ""]),
        Row::new(),
        row(["Results", "", ""]),
    ];
    rows.extend(
        stats_rows(stats)
            .into_iter()
            .map(|(label, value, unit)| row([label, value.as_str(), unit])),
    );
    rows
}

/// Comma-delimited export text, one row per line
pub fn stats_csv(config: &SimulationConfig, stats: &Stats, generated: &str) -> String {
    export_rows(config, stats, generated)
        .iter()
        .map(|r| r.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout() {
        let config = SimulationConfig::new(45.0, 28.0, 9.8, 0.6);
        let stats = Stats {
            velocity_x: 19.799,
            velocity_y: -3.0,
            max_height: 20.0,
            range: 80.123,
            elapsed_time: 4.0,
            current_height: 0.0,
        };
        let csv = stats_csv(&config, &stats, "2026-01-01 12:00");
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], EXPORT_TITLE);
        assert_eq!(lines[1], "Generated:,2026-01-01 12:00");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Parameter,Value,Unit");
        assert_eq!(lines[4], "Launch Angle,45,°");
        assert_eq!(lines[6], "Gravity,9.8,m/s²");
        assert_eq!(lines[9], "Results,,");
        assert_eq!(lines[10], "Velocity X,19.80,m/s");
        assert_eq!(lines[13], "Range (Distance),80.12,m");
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn test_zeroed_stats_rows() {
        let rows = stats_rows(&Stats::default());
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|(_, value, _)| value == "0.00"));
    }
}
