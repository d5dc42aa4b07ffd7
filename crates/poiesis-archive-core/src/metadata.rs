//! Technical metadata extraction
//!
//! This module provides structured extraction of technical metadata from
//! work file paths: MIME format detection, domain defaults for audio and
//! image works, and automated tagging suggestions. Paths are inspected
//! syntactically only; no file I/O occurs and the file need not exist.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Extension-to-MIME lookup table for formats the archive recognizes
static KNOWN_FORMATS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("wav", "audio/wav"),
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("pdf", "application/pdf"),
    ("md", "text/markdown"),
    ("txt", "text/plain"),
];

/// Keywords promoted to tags when found in a work's description
static TAG_KEYWORDS: &[&str] = &[
    "generative",
    "performance",
    "interactive",
    "installation",
    "collaboration",
];

/// Fallback MIME type for unrecognized extensions
pub const FALLBACK_FORMAT: &str = "application/octet-stream";

/// Sample rate assumed for audio works (Hz)
const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Color profile assumed for image works
const DEFAULT_COLOR_PROFILE: &str = "sRGB";

/// Technical attributes extracted from a work's source files
///
/// Produced fresh by the extractor per call; linking a record back to a
/// catalog entry is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalMetadata {
    /// MIME type of the source file
    pub file_format: String,

    /// Size of the source file in bytes
    pub file_size_bytes: u64,

    /// Named dimensions (e.g., "width"/"height"), if known
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dimensions: BTreeMap<String, u64>,

    /// Duration in seconds for time-based works
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,

    /// Color profile for image works
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_profile: Option<String>,

    /// Sample rate in Hz for audio works
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
}

impl TechnicalMetadata {
    /// Create metadata with the required fields and nothing else populated
    pub fn new(file_format: impl Into<String>, file_size_bytes: u64) -> Self {
        Self {
            file_format: file_format.into(),
            file_size_bytes,
            dimensions: BTreeMap::new(),
            duration_seconds: None,
            color_profile: None,
            sample_rate: None,
        }
    }

    /// Return a human-readable summary of technical attributes
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("Format: {}", self.file_format),
            format!("Size: {} bytes", group_thousands(self.file_size_bytes)),
        ];
        if !self.dimensions.is_empty() {
            let dims = self
                .dimensions
                .values()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join("x");
            parts.push(format!("Dimensions: {}", dims));
        }
        if let Some(duration) = self.duration_seconds {
            parts.push(format!("Duration: {:.1}s", duration));
        }
        parts.join(" | ")
    }
}

/// Format an integer with comma-grouped thousands (e.g., 2048000 -> "2,048,000")
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Get a file path's extension, lowercased and without its separator
fn extension_of(file_path: &str) -> Option<String> {
    Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Extracts technical and descriptive metadata from work files
///
/// Stateless: every method is a pure function of its inputs (the lookup
/// tables are fixed).
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Detect the MIME type of a file based on its extension
    ///
    /// Extension matching is case-insensitive. Unrecognized extensions
    /// (and paths without one) yield [`FALLBACK_FORMAT`].
    pub fn detect_format(&self, file_path: &str) -> &'static str {
        let Some(ext) = extension_of(file_path) else {
            return FALLBACK_FORMAT;
        };
        KNOWN_FORMATS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, mime)| *mime)
            .unwrap_or(FALLBACK_FORMAT)
    }

    /// Extract technical metadata from a file path and size
    ///
    /// Applies fixed domain defaults: audio formats get a 44100 Hz sample
    /// rate, image formats get an sRGB color profile. No decoding occurs.
    pub fn extract(&self, file_path: &str, file_size: u64) -> TechnicalMetadata {
        let detected_format = self.detect_format(file_path);
        let mut metadata = TechnicalMetadata::new(detected_format, file_size);

        if detected_format.starts_with("audio/") {
            metadata.sample_rate = Some(DEFAULT_SAMPLE_RATE);
        }
        if detected_format.starts_with("image/") {
            metadata.color_profile = Some(DEFAULT_COLOR_PROFILE.to_string());
        }

        metadata
    }

    /// Suggest tags based on file attributes and description
    ///
    /// Tags are, in order: the top-level MIME category, the lowercased
    /// extension (if any), then each fixed keyword found case-insensitively
    /// in the description. Duplicates are removed, keeping first occurrence.
    pub fn suggest_tags(&self, file_path: &str, description: &str) -> Vec<String> {
        let mime = self.detect_format(file_path);
        let category = mime.split('/').next().unwrap_or(mime);

        let mut tags = vec![category.to_string()];
        if let Some(ext) = extension_of(file_path) {
            tags.push(ext);
        }

        let description = description.to_lowercase();
        for keyword in TAG_KEYWORDS {
            if description.contains(keyword) {
                tags.push((*keyword).to_string());
            }
        }

        let mut seen = HashSet::new();
        tags.retain(|tag| seen.insert(tag.clone()));
        tags
    }
}
