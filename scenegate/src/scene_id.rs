//! Scene identifier syntax checks.
//!
//! Identifiers are opaque to the catalog, but a deployment can require them
//! to match a naming pattern before any catalog work is done. Sentinel-1 IW
//! SLC product names look like
//! `S1A_IW_SLC__1SDV_20200518T172837_20200518T172904_032622_03C745_8B6F`.

use regex::Regex;

/// Pattern for Sentinel-1 IW single-look-complex product names.
pub const SENTINEL1_SLC_PATTERN: &str = concat!(
    "^S1[AB]_IW_SLC__1S[SD][VH]",
    "_[0-9]{8}T[0-9]{6}_[0-9]{8}T[0-9]{6}",
    "_[0-9]{6}_[0-9A-F]{6}_[0-9A-F]{4}$"
);

/// A compiled scene-name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    /// Compiles a pattern. Anchor it with `^...$` to match whole names.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The Sentinel-1 IW SLC naming pattern.
    pub fn sentinel1_slc() -> Self {
        Self::new(SENTINEL1_SLC_PATTERN).expect("SENTINEL1_SLC_PATTERN is a valid regex")
    }

    /// True if `scene_id` is well formed.
    pub fn matches(&self, scene_id: &str) -> bool {
        self.regex.is_match(scene_id)
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
