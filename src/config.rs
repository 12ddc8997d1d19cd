use crate::error::Res;
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Index of coincidence of English text.
pub const ENGLISH_IC: f64 = 0.0667;
/// How close the averaged IC of a split has to get to `ENGLISH_IC`.
pub const IC_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub english_ic: f64,
    pub ic_tolerance: f64,
    /// Caps the key length search below the ciphertext length.
    pub max_key_length: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            english_ic: ENGLISH_IC,
            ic_tolerance: IC_TOLERANCE,
            max_key_length: None,
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml(content: &str) -> Res<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Res<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Largest key length the search will try for a ciphertext of `ciphertext_len` letters.
    pub fn key_length_bound(&self, ciphertext_len: usize) -> usize {
        match self.max_key_length {
            Some(max) if max > 0 => max.min(ciphertext_len),
            _ => ciphertext_len,
        }
    }
}
