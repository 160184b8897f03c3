//! Configuration for the PowerPC decoder.
//!
//! This module defines the per-decoder settings. It provides:
//! 1. **Defaults:** Baseline byte order and feature set.
//! 2. **Structures:** `DecoderConfig`, the single input to `Decoder::new`.
//! 3. **Enums:** Byte order, optional ISA features and target presets.
//!
//! Configuration is supplied as JSON (`DecoderConfig::from_json`) or built
//! from a `Target` preset for the common cases.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration values used when a field is omitted.
mod defaults {
    use super::{Endianness, FeatureSet};

    /// Big-endian, as on 32-bit and classic 64-bit PowerPC targets.
    pub const ENDIANNESS: Endianness = Endianness::Big;

    /// No optional encodings enabled.
    pub const FEATURES: FeatureSet = FeatureSet::empty();
}

/// Byte order of instruction words in the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Most significant byte first.
    #[serde(alias = "Big", alias = "BE", alias = "be")]
    Big,
    /// Least significant byte first.
    #[serde(alias = "Little", alias = "LE", alias = "le")]
    Little,
}

impl Default for Endianness {
    fn default() -> Self {
        defaults::ENDIANNESS
    }
}

/// Optional encodings a target may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// 8-byte prefixed instructions (ISA 3.1).
    #[serde(alias = "PrefixInstrs")]
    PrefixInstrs,
    /// Signal Processing Engine encodings in the opcode-4 space.
    #[serde(alias = "SPE")]
    Spe,
}

impl Feature {
    /// Bit assigned to this feature inside a `FeatureSet`.
    const fn bit(self) -> u32 {
        match self {
            Self::PrefixInstrs => 1 << 0,
            Self::Spe => 1 << 1,
        }
    }
}

/// Immutable set of enabled features.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Vec<Feature>")]
pub struct FeatureSet {
    bits: u32,
}

impl FeatureSet {
    /// A set with no features enabled.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns a copy of this set with `feature` enabled.
    #[must_use]
    pub const fn with(self, feature: Feature) -> Self {
        Self {
            bits: self.bits | feature.bit(),
        }
    }

    /// Returns true if `feature` is enabled.
    pub const fn contains(self, feature: Feature) -> bool {
        self.bits & feature.bit() != 0
    }
}

impl From<Vec<Feature>> for FeatureSet {
    fn from(features: Vec<Feature>) -> Self {
        features.into_iter().collect()
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for feature in [Feature::PrefixInstrs, Feature::Spe] {
            if self.contains(feature) {
                let _ = set.entry(&feature);
            }
        }
        set.finish()
    }
}

/// Target presets, one per supported PowerPC variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// 32-bit big-endian PowerPC.
    Ppc32,
    /// 64-bit big-endian PowerPC.
    Ppc64,
    /// 64-bit little-endian PowerPC.
    #[serde(alias = "ppc64el")]
    Ppc64Le,
}

impl Target {
    /// Byte order of instruction words on this target.
    pub const fn endianness(self) -> Endianness {
        match self {
            Self::Ppc32 | Self::Ppc64 => Endianness::Big,
            Self::Ppc64Le => Endianness::Little,
        }
    }
}

/// Root decoder configuration.
///
/// Fixed for the lifetime of a `Decoder`; decode calls never mutate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DecoderConfig {
    /// Byte order of instruction words.
    #[serde(default)]
    pub endianness: Endianness,

    /// Enabled optional encodings.
    #[serde(default)]
    pub features: FeatureSet,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            endianness: defaults::ENDIANNESS,
            features: defaults::FEATURES,
        }
    }
}

impl DecoderConfig {
    /// Configuration for a target preset with no optional features.
    pub const fn for_target(target: Target) -> Self {
        Self {
            endianness: target.endianness(),
            features: defaults::FEATURES,
        }
    }

    /// Returns a copy of this configuration with `feature` enabled.
    #[must_use]
    pub const fn with_feature(mut self, feature: Feature) -> Self {
        self.features = self.features.with(feature);
        self
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
