//! Template CSV: headered, with the three columns the engine cares about
//! located by name. Every other column passes through untouched.

use std::path::Path;

use munimatch_recon::{RegionType, TemplateRow};

use crate::encoding::{read_file_as_utf8, UTF8_BOM};
use crate::error::LoadError;

pub const COL_REGION_TYPE: &str = "地域種別";
pub const COL_DISPLAY_NAME: &str = "名前";
pub const COL_FORMAL_NAME: &str = "正式名";

/// A loaded template file: full header and rows, plus the positions of
/// the columns the reconciliation rewrites.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
    region_type_idx: usize,
    display_idx: usize,
    formal_idx: usize,
}

impl TemplateFile {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = read_file_as_utf8(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn parse(content: &str, path: &str) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| LoadError::Csv {
                path: path.to_string(),
                message: e.to_string(),
            })?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let idx = |name: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_string(),
                    column: name.to_string(),
                })
        };

        let region_type_idx = idx(COL_REGION_TYPE)?;
        let display_idx = idx(COL_DISPLAY_NAME)?;
        let formal_idx = idx(COL_FORMAL_NAME)?;

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| LoadError::Csv {
                path: path.to_string(),
                message: e.to_string(),
            })?;
            records.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(Self {
            headers,
            records,
            region_type_idx,
            display_idx,
            formal_idx,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn field(record: &[String], idx: usize) -> String {
        record.get(idx).cloned().unwrap_or_default()
    }

    /// Engine-facing view of every row, in file order.
    pub fn rows(&self) -> Vec<TemplateRow> {
        self.records
            .iter()
            .map(|r| TemplateRow {
                region_type: RegionType::parse(&Self::field(r, self.region_type_idx)),
                display_name: Self::field(r, self.display_idx),
                formal_name: Self::field(r, self.formal_idx),
            })
            .collect()
    }

    /// Rewrite one row's display and formal name. Rows shorter than the
    /// rewritten columns are padded with empty fields first.
    pub fn apply(&mut self, row: usize, display_name: &str, formal_name: &str) {
        let width = self.display_idx.max(self.formal_idx) + 1;
        let record = &mut self.records[row];
        if record.len() < width {
            record.resize(width, String::new());
        }
        record[self.display_idx] = display_name.to_string();
        record[self.formal_idx] = formal_name.to_string();
    }

    /// Serialize with a leading UTF-8 BOM for spreadsheet-tool
    /// compatibility.
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>, LoadError> {
        let mut buf: Vec<u8> = UTF8_BOM.to_vec();
        {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(&mut buf);
            writer.write_record(&self.headers).map_err(|e| LoadError::Csv {
                path: "<output>".into(),
                message: e.to_string(),
            })?;
            for record in &self.records {
                writer.write_record(record).map_err(|e| LoadError::Csv {
                    path: "<output>".into(),
                    message: e.to_string(),
                })?;
            }
            writer.flush().map_err(|e| LoadError::Csv {
                path: "<output>".into(),
                message: e.to_string(),
            })?;
        }
        Ok(buf)
    }

    /// Write the whole file in one shot; nothing is written on error.
    pub fn write(&self, path: &Path) -> Result<(), LoadError> {
        let bytes = self.to_csv_bytes()?;
        std::fs::write(path, bytes).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
