//! Attendance report export (Excel and JSON).

use std::path::{Path, PathBuf};

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use tracing::info;

use crate::error::Result;
use crate::models::AttendanceRecord;

/// Output format picked in the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    fn filter_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel Files",
            ExportFormat::Json => "JSON Files",
        }
    }
}

/// Export attendance history to Excel file.
pub fn export_attendance_history_to_excel(data: &[AttendanceRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Attendance History")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x3B82F6))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let headers = ["Subject", "Date", "Time", "Status", "Room", "Faculty"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_column_width(0, 22)?; // Subject
    worksheet.set_column_width(1, 12)?; // Date
    worksheet.set_column_width(2, 10)?; // Time
    worksheet.set_column_width(3, 10)?; // Status
    worksheet.set_column_width(4, 12)?; // Room
    worksheet.set_column_width(5, 18)?; // Faculty

    for (idx, record) in data.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &record.subject)?;
        worksheet.write_string(row, 1, record.date.format("%Y-%m-%d").to_string())?;
        worksheet.write_string(row, 2, &record.time)?;
        worksheet.write_string(row, 3, record.status.label())?;
        worksheet.write_string(row, 4, &record.room)?;
        worksheet.write_string(row, 5, &record.faculty)?;
    }

    if !data.is_empty() {
        let last_row = data.len() as u32;
        worksheet.autofilter(0, 0, last_row, 5)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    info!("Exported {} attendance records to {:?}", data.len(), path);
    Ok(())
}

/// Export attendance history as pretty-printed JSON.
pub fn export_attendance_history_to_json(data: &[AttendanceRecord], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content)?;
    info!("Exported {} attendance records to {:?}", data.len(), path);
    Ok(())
}

/// Write records in the given format.
pub fn export_attendance_history(data: &[AttendanceRecord], path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Excel => export_attendance_history_to_excel(data, path),
        ExportFormat::Json => export_attendance_history_to_json(data, path),
    }
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str, format: ExportFormat) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter(format.filter_name(), &[format.extension()])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str, format: ExportFormat) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.{ext}", ts = now.format("%Y%m%d_%H%M%S"), ext = format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("attendance", ExportFormat::Excel);
        assert!(name.starts_with("attendance_"));
        assert!(name.ends_with(".xlsx"));
        // attendance_ + YYYYmmdd_HHMMSS + .xlsx
        assert_eq!(name.len(), "attendance_".len() + 15 + ".xlsx".len());
    }

    #[test]
    fn test_excel_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.xlsx");
        export_attendance_history_to_excel(&mock::attendance_records(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_excel_export_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        export_attendance_history(&[], &path, ExportFormat::Excel).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_json_export_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let records = mock::attendance_records();
        export_attendance_history(&records, &path, ExportFormat::Json).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<AttendanceRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, records);
        assert!(content.contains("\"status\": \"absent\""));
    }
}
