use std::fmt::{Error, Write as _};

use enrollment::{statistics::sorted_by_count, DashboardView, RosterPage};
use model::{locale::CURRENCY, statistics::CategoryCount};

const BAR_WIDTH: usize = 40;

pub fn dashboard(view: &DashboardView) -> Result<String, Error> {
    let overview = view.overview();
    let mut out = String::new();
    writeln!(out, "Individuals:    {}", overview.total_individuals)?;
    writeln!(out, "Locations:      {}", overview.locations)?;
    writeln!(out, "Training types: {}", overview.training_types)?;

    for (title, counts) in [
        ("By location", &view.stats.by_location),
        ("By gender", &view.stats.by_gender),
        ("By age", &view.stats.by_age),
        ("By training type", &view.stats.by_training_type),
    ] {
        out.push('\n');
        out.push_str(&chart(title, counts)?);
    }
    Ok(out)
}

/// Horizontal bar chart, largest category first.
pub fn chart(title: &str, counts: &[CategoryCount]) -> Result<String, Error> {
    let mut out = format!("{}\n", title);
    let counts = sorted_by_count(counts);
    let max = counts.first().map(|c| c.count).unwrap_or_default();
    let label_width = counts
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or_default();

    for count in &counts {
        let len = if max == 0 {
            0
        } else {
            (count.count * BAR_WIDTH).div_ceil(max)
        };
        writeln!(
            out,
            "  {:<width$} {} {}",
            count.name,
            "█".repeat(len),
            count.count,
            width = label_width
        )?;
    }
    Ok(out)
}

pub fn roster(page: &RosterPage) -> Result<String, Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{:>4}  {:<24} {:<20} {:<16} {:<8} {:<12} {:<14} {:>12}",
        "#", "Name", "Training", "Location", "Ages", "Phone", "Payment", "Share"
    )?;
    for row in page.rows() {
        let group = row.group;
        if row.is_first() {
            writeln!(
                out,
                "{:>4}  {:<24} {:<20} {:<16} {:<8} {:<12} {:<14} {:>12}",
                row.number,
                row.name,
                group.training_type_name().unwrap_or_default(),
                group.location_name().unwrap_or_default(),
                group.ages,
                group.contact_phone,
                group.payment_status.name(),
                format!("{}{}", row.share, CURRENCY),
            )?;
        } else {
            writeln!(
                out,
                "{:>4}  {:<24} {:<20} {:<16} {:<8} {:<12} {:<14} {:>12}",
                "",
                row.name,
                "",
                "",
                "",
                "",
                "",
                format!("{}{}", row.share, CURRENCY),
            )?;
        }
    }
    writeln!(out, "\nTotal paid: {}{}", page.total_paid, CURRENCY)?;
    Ok(out)
}
