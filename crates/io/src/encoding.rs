//! Encoding-tolerant text reading.

use std::path::Path;

use crate::error::LoadError;

/// UTF-8 byte-order marker. Written at the start of every output file so
/// spreadsheet tools detect the encoding; stripped on read.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Read a file as UTF-8, stripping a leading BOM if present.
///
/// The municipality registry is distributed as Shift_JIS, so on invalid
/// UTF-8 the buffer is re-decoded as Shift_JIS.
pub fn read_file_as_utf8(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(decode_utf8(bytes))
}

fn decode_utf8(bytes: Vec<u8>) -> String {
    let bytes = if bytes.starts_with(&UTF8_BOM) {
        bytes[UTF8_BOM.len()..].to_vec()
    } else {
        bytes
    };

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::SHIFT_JIS.decode(&bytes);
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_plain_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.csv");
        fs::write(&path, "気仙沼市,宮城県\n").unwrap();

        assert_eq!(read_file_as_utf8(&path).unwrap(), "気仙沼市,宮城県\n");
    }

    #[test]
    fn strips_leading_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.csv");
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("名前,正式名\n".as_bytes());
        fs::write(&path, bytes).unwrap();

        assert_eq!(read_file_as_utf8(&path).unwrap(), "名前,正式名\n");
    }

    #[test]
    fn falls_back_to_shift_jis() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sjis.csv");
        let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode("気仙沼市,宮城県\n");
        fs::write(&path, encoded).unwrap();

        assert_eq!(read_file_as_utf8(&path).unwrap(), "気仙沼市,宮城県\n");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_file_as_utf8(Path::new("/nonexistent/registry.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/registry.csv"));
    }
}
