//! String-keyed effect parameters from template data.
//!
//! Numeric lookups never fail: a missing or malformed value reads as zero
//! (or `false`), matching how content data is authored.

use std::collections::HashMap;

/// Raw `name → value` parameter map of one effect definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EffectParams(HashMap<String, String>);

impl EffectParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.trim())
    }

    pub fn get_f64(&self, key: &str) -> f64 {
        self.get_str(key)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    pub fn get_i32(&self, key: &str) -> i32 {
        self.get_str(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub fn get_u32(&self, key: &str) -> u32 {
        self.get_str(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Accepts `true`/`false` (any case) and `1`/`0`.
    pub fn get_bool(&self, key: &str) -> bool {
        match self.get_str(key) {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            _ => false,
        }
    }

    /// Comma-separated list with empty entries dropped.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get_str(key)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
