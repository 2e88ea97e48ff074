use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::schema::TableSchema;
use crate::ui::Ui;

/// Progress is reported every this many records
const PROGRESS_STEP: usize = 500;

pub struct CsvWriter {
    output_dir: PathBuf,
}

impl CsvWriter {
    pub fn new(output_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Path a table is written to
    pub fn table_path(&self, schema: &TableSchema) -> PathBuf {
        self.output_dir.join(schema.file_name)
    }

    /// Write one table: header row from the schema, then one line per record.
    /// Existing files are overwritten.
    pub fn write_table<R: Serialize>(
        &self,
        schema: &TableSchema,
        records: &[R],
        ui: &mut impl Ui,
    ) -> Result<u64> {
        let path = self.table_path(schema);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(&path)
            .with_context(|| format!("Failed to create: {:?}", path))?;

        writer
            .write_record(schema.column_names())
            .with_context(|| format!("Failed to write header of {}", schema.name))?;

        let total = records.len() as u64;
        for (idx, record) in records.iter().enumerate() {
            writer
                .serialize(record)
                .with_context(|| format!("Failed to write record {} of {}", idx + 1, schema.name))?;

            if (idx + 1) % PROGRESS_STEP == 0 {
                ui.set_progress(idx as u64 + 1, total, schema.name);
            }
        }

        writer
            .flush()
            .with_context(|| format!("Failed to flush: {:?}", path))?;

        ui.set_progress(total, total, schema.name);
        ui.log(format!("{}: {} records", schema.name, total));

        Ok(total)
    }
}
