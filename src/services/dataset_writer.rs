use std::{fs, path::Path};

use anyhow::Context;

use crate::domain::{CompanyRecord, COLUMNS};

/// Writes all records as one CSV file with a header row, replacing any previous file.
/// The parent directory is created if it doesn't exist yet.
pub fn save_companies_csv(records: &[CompanyRecord], file_path: &Path) -> anyhow::Result<()> {
    if let Some(folder_path) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(folder_path)
            .with_context(|| format!("Failed to create directory {}", folder_path.display()))?;
    }

    let mut writer = csv::Writer::from_path(file_path)
        .with_context(|| format!("Failed to open {}", file_path.display()))?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    log::info!("Data saved to {} ({} rows)", file_path.display(), records.len());
    Ok(())
}
