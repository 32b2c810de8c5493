//! Municipality registry CSV: no header, six positional columns
//! (code, name, reading, prefecture code, prefecture, prefecture reading).

use std::path::Path;

use munimatch_recon::RawMunicipality;

use crate::encoding::read_file_as_utf8;
use crate::error::LoadError;

pub fn load_registry(path: &Path) -> Result<Vec<RawMunicipality>, LoadError> {
    let content = read_file_as_utf8(path)?;
    parse_registry(&content, &path.display().to_string())
}

pub fn parse_registry(content: &str, path: &str) -> Result<Vec<RawMunicipality>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::Csv {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        if record.len() < 6 {
            return Err(LoadError::ShortRow {
                path: path.to_string(),
                line: i + 1,
                found: record.len(),
            });
        }

        rows.push(RawMunicipality {
            code: record[0].to_string(),
            name: record[1].to_string(),
            reading: record[2].to_string(),
            prefecture_code: record[3].to_string(),
            prefecture: record[4].to_string(),
            prefecture_reading: record[5].to_string(),
        });
    }

    Ok(rows)
}
