//! Display and formatting utilities for the advisor.
//!
//! This module provides functions for formatting numbers and durations and
//! for printing queues, production and points reports in a readable format.

use crate::models::{EnergyMatrix, PointsReport, QueueEntry, ResourceVector, Share};
use crate::optimizer::INFINITE_SCORE;

/// Formats a duration given in hours to a human-readable string.
///
/// # Arguments
///
/// * `hours` - Duration in hours
///
/// # Returns
///
/// A formatted string like "2d 3h 15m", "1h 30m", "15m" or "<1m"
///
/// # Example
///
/// ```
/// use oadvisor::display::format_duration;
///
/// assert_eq!(format_duration(51.25), "2d 3h 15m");
/// assert_eq!(format_duration(1.5), "1h 30m");
/// assert_eq!(format_duration(0.25), "15m");
/// assert_eq!(format_duration(0.001), "<1m");
/// ```
pub fn format_duration(hours: f64) -> String {
    if !hours.is_finite() {
        return "never".to_string();
    }
    let total_minutes = (hours * 60.0).round() as u64;
    let days = total_minutes / (24 * 60);
    let h = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, h, minutes)
    } else if h > 0 {
        format!("{}h {}m", h, minutes)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        "<1m".to_string()
    }
}

/// Inserts thousands separators into a number.
///
/// # Example
///
/// ```
/// use oadvisor::display::number_beautify;
///
/// assert_eq!(number_beautify(1234567), "1,234,567");
/// assert_eq!(number_beautify(-4200), "-4,200");
/// assert_eq!(number_beautify(999), "999");
/// ```
pub fn number_beautify(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn format_score(score: f64) -> String {
    if score >= INFINITE_SCORE {
        "-".to_string()
    } else {
        format!("{:.1}", score)
    }
}

/// Prints a ranked build queue.
pub fn display_queue(queue: &[QueueEntry]) {
    println!();
    println!("[BUILD QUEUE]");
    println!("----------------------------------------------------------------------------");
    println!(
        "{:>3} {:<24} {:<12} {:>5} {:>10} {:>7} {:>5} {:>10}",
        "#", "Item", "Planet", "Lv.", "Score", "Gain", "Sats", "Time"
    );
    println!("----------------------------------------------------------------------------");

    for (i, entry) in queue.iter().enumerate() {
        let marker = if entry.capacity_upgrade { "*" } else { "" };
        println!(
            "{:>3} {:<24} {:<12} {:>5} {:>10} {:>7} {:>5} {:>10}{}",
            i + 1,
            entry.name,
            entry.planet.as_deref().unwrap_or("(account)"),
            entry.level,
            format_score(entry.score),
            number_beautify(entry.gain),
            entry.required_satellites,
            format_duration(entry.build_time),
            marker
        );
    }

    if queue.iter().any(|e| e.capacity_upgrade) {
        println!();
        println!("  * a robotics/nanite upgrade pays for itself before this one");
    }
}

/// Prints hourly and daily production.
pub fn display_production(production: &ResourceVector) {
    let daily = production.daily();

    println!();
    println!("[PRODUCTION]");
    println!("----------------------------------------------------------------");
    println!("{:<12} {:>16} {:>16}", "", "Hourly", "Daily");
    println!(
        "{:<12} {:>16} {:>16}",
        "Metal",
        number_beautify(production.metal),
        number_beautify(daily.metal)
    );
    println!(
        "{:<12} {:>16} {:>16}",
        "Crystal",
        number_beautify(production.crystal),
        number_beautify(daily.crystal)
    );
    println!(
        "{:<12} {:>16} {:>16}",
        "Deuterium",
        number_beautify(production.deuterium),
        number_beautify(daily.deuterium)
    );
    println!("{:<12} {:>16}", "Energy", number_beautify(production.energy));
}

fn print_share(label: &str, share: &Share) {
    println!(
        "  {:<14} {:>18} {:>7.2}%",
        label,
        number_beautify(share.points),
        share.percent
    );
}

/// Prints the points breakdown of an account.
pub fn display_points(report: &PointsReport) {
    println!();
    println!("[POINTS]");
    println!("----------------------------------------------------------------");
    println!("  {:<14} {:>18}", "Total", number_beautify(report.total));
    print_share("Production", &report.production);
    print_share("Other", &report.other);
    print_share("Defense", &report.defense);
    print_share("Moons", &report.moons);
    print_share("Research", &report.research);
    print_share("Ships", &report.ships);

    println!();
    println!("[PLANETS]");
    println!("----------------------------------------------------------------");
    for planet in &report.planets {
        println!(
            "  {:<14} {:>18} {:>7.2}%",
            planet.points.name,
            number_beautify(planet.points.total),
            planet.percent
        );
    }

    println!();
    println!("[HIGHSCORE SPLIT]");
    println!("----------------------------------------------------------------");
    println!("  Economy:  {}", number_beautify(report.game_score.economy as i64));
    println!("  Military: {}", number_beautify(report.game_score.military as i64));
    println!("  Research: {}", number_beautify(report.game_score.research));
}

/// Prints the fusion reactor / energy technology grid.
pub fn display_energy_matrix(matrix: &EnergyMatrix) {
    println!();
    println!(
        "[ENERGY MATRIX] (fusion Lv.{}, energy technology Lv.{})",
        matrix.fusion_level, matrix.energy_level
    );
    println!("----------------------------------------------------------------");

    if let Some(first) = matrix.rows.first() {
        print!("{:<10}", "Fusion");
        for cell in &first.cells {
            print!(" {:>12}", format!("ET {}", cell.energy_level));
        }
        println!();
    }

    for row in &matrix.rows {
        print!("{:<10}", format!("Lv.{}", row.fusion_level));
        for cell in &row.cells {
            print!(" {:>12}", format!("{:.1}", cell.ratio));
        }
        println!();
    }
    println!();
    println!("  Values are MSE per energy unit gained (lower is better).");
}
