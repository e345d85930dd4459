//! Base64 encoding of whole inputs

use crate::error::{CodecError, CodecResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes in one MB for the size cap
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Read the file at `path` and return its contents as standard base64
///
/// Reading stops one byte past `max_mb`, so oversized files are never
/// loaded whole.
///
/// # Errors
/// Returns [`CodecError::File`] if the file cannot be read and
/// [`CodecError::FileTooBig`] if it is larger than `max_mb`
pub fn file_to_base64(path: impl AsRef<Path>, max_mb: Option<u64>) -> CodecResult<String> {
    let path = path.as_ref();
    let file_error = |source| CodecError::File {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(file_error)?;
    match reader_to_base64(file, max_mb) {
        Err(CodecError::Io(source)) => Err(file_error(source)),
        other => other,
    }
}

/// Drain `reader` and return everything read as standard base64
///
/// # Errors
/// Returns error if reading fails or more than `max_mb` is read
pub fn reader_to_base64<R: Read>(mut reader: R, max_mb: Option<u64>) -> CodecResult<String> {
    let mut bytes = Vec::new();
    match max_mb {
        // one byte past the cap is enough to tell it was exceeded
        Some(limit) => {
            let cap = limit.saturating_mul(BYTES_PER_MB).saturating_add(1);
            reader.take(cap).read_to_end(&mut bytes)?;
        }
        None => {
            reader.read_to_end(&mut bytes)?;
        }
    }
    encode_capped(&bytes, max_mb)
}

fn encode_capped(bytes: &[u8], max_mb: Option<u64>) -> CodecResult<String> {
    if let Some(limit) = max_mb {
        let size = bytes.len() as u64;
        if size > limit.saturating_mul(BYTES_PER_MB) {
            #[allow(clippy::cast_precision_loss)]
            let size_mb = size as f64 / BYTES_PER_MB as f64;
            return Err(CodecError::FileTooBig {
                size_mb,
                limit_mb: limit,
            });
        }
    }
    Ok(STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reader_contents() {
        assert_eq!(reader_to_base64(&b"hello"[..], None).unwrap(), "aGVsbG8=");
        assert_eq!(reader_to_base64(&b""[..], Some(1)).unwrap(), "");
    }

    #[test]
    fn rejects_oversized_reader() {
        let big = vec![0u8; usize::try_from(BYTES_PER_MB).unwrap() + 1];
        match reader_to_base64(big.as_slice(), Some(1)) {
            Err(CodecError::FileTooBig { limit_mb, .. }) => assert_eq!(limit_mb, 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn exact_cap_is_accepted() {
        let exact = vec![7u8; usize::try_from(BYTES_PER_MB).unwrap()];
        let encoded = reader_to_base64(exact.as_slice(), Some(1)).unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), exact);
    }

    #[test]
    fn zero_cap_allows_only_empty() {
        assert!(reader_to_base64(&b""[..], Some(0)).is_ok());
        assert!(matches!(
            reader_to_base64(&b"x"[..], Some(0)),
            Err(CodecError::FileTooBig { .. })
        ));
    }
}
