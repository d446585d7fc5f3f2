use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, TimeZone};
use eyre::{Context as _, Result};
use log::info;
use model::{
    decimal::Decimal,
    locale::{DATE_FORMAT, SHEET_FILE_NAME, SHEET_HEADERS},
    registration::GroupRecord,
};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One line of the exported sheet. Record level columns are filled on the
/// first line of each record only, the way a merged cell would look.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportRow {
    pub last_name: String,
    pub first_name: String,
    pub school: String,
    pub teacher: String,
    pub team: String,
    pub training_type: String,
    pub ages: String,
    pub phone: String,
    pub location: String,
    pub status: String,
    pub amount: Decimal,
    pub date: String,
}

impl ExportRow {
    fn record(&self) -> [String; 12] {
        [
            self.last_name.clone(),
            self.first_name.clone(),
            self.school.clone(),
            self.teacher.clone(),
            self.team.clone(),
            self.training_type.clone(),
            self.ages.clone(),
            self.phone.clone(),
            self.location.clone(),
            self.status.clone(),
            self.amount.to_string(),
            self.date.clone(),
        ]
    }
}

/// Export rows with dates in the local timezone.
pub fn export_rows<'a, I>(groups: I) -> Vec<ExportRow>
where
    I: IntoIterator<Item = &'a GroupRecord>,
{
    export_rows_in(groups, &Local)
}

pub fn export_rows_in<'a, I, Tz>(groups: I, tz: &Tz) -> Vec<ExportRow>
where
    I: IntoIterator<Item = &'a GroupRecord>,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut rows = Vec::new();
    for group in groups {
        for index in 0..group.individual_count() {
            let mut row = ExportRow {
                last_name: group.last_name(index).to_owned(),
                first_name: group.first_name(index).to_owned(),
                amount: group.payment_share(index),
                ..Default::default()
            };
            if index == 0 {
                row.school = group.school_name.clone();
                row.teacher = group.teacher_name.clone();
                row.team = group.team_name.clone();
                row.training_type = group.training_type_name().unwrap_or_default().to_owned();
                row.ages = group.ages.clone();
                row.phone = group.contact_phone.clone();
                row.location = group.location_name().unwrap_or_default().to_owned();
                row.status = group.payment_status.to_string();
                row.date = group
                    .created_at
                    .map(|date| date.with_timezone(tz).format(DATE_FORMAT).to_string())
                    .unwrap_or_default();
            }
            rows.push(row);
        }
    }
    rows
}

/// Writes the rows as a single sheet with a header line. A byte order mark
/// is emitted first so spreadsheet programs pick up the encoding.
pub fn write_sheet<W: Write>(rows: &[ExportRow], mut out: W) -> Result<()> {
    out.write_all(UTF8_BOM)?;
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(SHEET_HEADERS)?;
    for row in rows {
        wtr.write_record(row.record())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the sheet into `dir` under the standard file name.
pub fn save_sheet(rows: &[ExportRow], dir: &Path) -> Result<PathBuf> {
    let path = dir.join(SHEET_FILE_NAME);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_sheet(rows, BufWriter::new(file))?;
    info!("Exported {} rows to {}", rows.len(), path.display());
    Ok(path)
}
