use crate::domain::errors::RefitError;
use std::path::Path;

pub fn read_bytes(path: &Path) -> Result<Vec<u8>, RefitError> {
    std::fs::read(path).map_err(|e| RefitError::io(path, e))
}

/// Whole-file UTF-8 read; a missing file maps to `FileNotFound`.
pub fn read_text(path: &Path) -> Result<String, RefitError> {
    let raw = read_bytes(path)?;
    String::from_utf8(raw).map_err(|_| RefitError::Utf8(path.to_path_buf()))
}

/// Overwrites in place. No backup and no temp-file swap.
pub fn write_text(path: &Path, content: &str) -> Result<(), RefitError> {
    std::fs::write(path, content).map_err(|e| RefitError::io(path, e))
}

/// One char per byte (ISO-8859-1). Never fails.
pub fn decode_latin1(raw: &[u8]) -> String {
    raw.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::{decode_latin1, read_text, write_text};
    use crate::domain::errors::RefitError;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let tmp = TempDir::new().expect("temp dir");
        let err = read_text(&tmp.path().join("nope.js")).unwrap_err();
        assert!(matches!(err, RefitError::FileNotFound(_)));
    }

    #[test]
    fn invalid_utf8_is_its_own_error() {
        let tmp = TempDir::new().expect("temp dir");
        let p = tmp.path().join("bin.js");
        std::fs::write(&p, b"f\xffo").expect("write");
        assert!(matches!(read_text(&p), Err(RefitError::Utf8(_))));
    }

    #[test]
    fn write_then_read_keeps_bytes() {
        let tmp = TempDir::new().expect("temp dir");
        let p = tmp.path().join("a.js");
        write_text(&p, "line\r\nnext\n").expect("write");
        assert_eq!(read_text(&p).expect("read"), "line\r\nnext\n");
    }

    #[test]
    fn latin1_maps_each_byte_to_one_char() {
        assert_eq!(decode_latin1(&[0x63, 0x61, 0x66, 0xe9]), "café");
        assert_eq!(decode_latin1(&[0xff]).chars().count(), 1);
    }
}
