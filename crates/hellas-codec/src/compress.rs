//! zlib-compressed JSON

use crate::error::CodecResult;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use hellas_format::group_thousands;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Compression settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// zlib level, 0 (none) to 9 (best)
    pub level: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { level: 6 }
    }
}

impl CodecConfig {
    /// With compression level (clamped to 9)
    #[inline]
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level.min(9);
        self
    }
}

/// Sizes before and after compression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionStats {
    /// Serialized length
    pub raw: usize,
    /// Compressed length
    pub compressed: usize,
    /// `compressed / raw` (zero for empty input)
    pub ratio: f64,
}

impl CompressionStats {
    fn new(raw: usize, compressed: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let ratio = if raw == 0 {
            0.0
        } else {
            compressed as f64 / raw as f64
        };
        Self {
            raw,
            compressed,
            ratio,
        }
    }
}

impl std::fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let grouped = |n: usize| group_thousands(i64::try_from(n).unwrap_or(i64::MAX));
        write!(
            f,
            "len = {} compr={} ratio:{:.6}",
            grouped(self.raw),
            grouped(self.compressed),
            self.ratio
        )
    }
}

/// Serializes values to JSON and compresses them with zlib
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create codec with configuration
    #[inline]
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Serialize and compress `value`
    ///
    /// # Errors
    /// Returns error if `value` cannot be serialized
    pub fn compress<T: Serialize + ?Sized>(&self, value: &T) -> CodecResult<Vec<u8>> {
        let raw = serde_json::to_vec(value)?;
        self.deflate(&raw)
    }

    /// Like [`Codec::compress`], also reporting the sizes at INFO level
    ///
    /// # Errors
    /// Returns error if `value` cannot be serialized
    pub fn compress_with_stats<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> CodecResult<(Vec<u8>, CompressionStats)> {
        let raw = serde_json::to_vec(value)?;
        let packed = self.deflate(&raw)?;
        let stats = CompressionStats::new(raw.len(), packed.len());
        tracing::info!(
            raw = stats.raw,
            compressed = stats.compressed,
            ratio = stats.ratio,
            "{stats}"
        );
        Ok((packed, stats))
    }

    /// Decompress and deserialize bytes produced by [`Codec::compress`]
    ///
    /// # Errors
    /// Returns error if the bytes are not valid zlib or the JSON does not
    /// match `T`
    pub fn decompress<T: DeserializeOwned>(&self, bytes: &[u8]) -> CodecResult<T> {
        let raw = self.inflate(bytes)?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Compress the textual form of `value`
    ///
    /// Plain text usually compresses better than its JSON string encoding.
    ///
    /// # Errors
    /// Returns error if compression fails
    pub fn compress_str(&self, value: &str) -> CodecResult<Vec<u8>> {
        self.deflate(value.as_bytes())
    }

    /// Inverse of [`Codec::compress_str`]
    ///
    /// # Errors
    /// Returns error if the bytes are not valid zlib or not UTF-8
    pub fn decompress_str(&self, bytes: &[u8]) -> CodecResult<String> {
        let raw = self.inflate(bytes)?;
        String::from_utf8(raw)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err).into())
    }

    fn deflate(&self, raw: &[u8]) -> CodecResult<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.config.level));
        encoder.write_all(raw)?;
        Ok(encoder.finish()?)
    }

    #[allow(clippy::unused_self)]
    fn inflate(&self, bytes: &[u8]) -> CodecResult<Vec<u8>> {
        let mut raw = Vec::new();
        ZlibDecoder::new(bytes).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
