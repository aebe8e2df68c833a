//! Generated identifiers for document features.
//!
//! Every point and path in a [`Document`](super::Document) is keyed by a
//! random version-4 style identifier (`xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`,
//! with `y` one of `8`, `9`, `a`, `b`). Identifiers are fresh on every parse
//! and carry no meaning; no collision detection is performed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a formatted identifier, hyphens included.
pub const FEATURE_ID_LEN: usize = 36;

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A unique key for a point or a path in the canonical document.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        Self::from_bits(rand::random::<u128>())
    }

    /// Builds an identifier from 128 random bits.
    ///
    /// The version nibble is forced to `4` and the top two bits of the
    /// variant nibble to `10`; the remaining 122 bits are taken as given.
    pub fn from_bits(bits: u128) -> Self {
        let bits = (bits & !(0xF_u128 << 76)) | (0x4_u128 << 76);
        let bits = (bits & !(0xC_u128 << 60)) | (0x8_u128 << 60);

        let hex = format!("{bits:032x}");
        let mut out = String::with_capacity(FEATURE_ID_LEN);
        out.push_str(&hex[0..8]);
        out.push('-');
        out.push_str(&hex[8..12]);
        out.push('-');
        out.push_str(&hex[12..16]);
        out.push('-');
        out.push_str(&hex[16..20]);
        out.push('-');
        out.push_str(&hex[20..32]);
        Self(out)
    }

    /// Wraps an existing key without checking its layout.
    ///
    /// Used when reading documents back from JSON; see
    /// [`FeatureId::is_well_formed`] to check it.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier matches the generated layout.
    pub fn is_well_formed(&self) -> bool {
        let bytes = self.0.as_bytes();
        if bytes.len() != FEATURE_ID_LEN {
            return false;
        }

        bytes.iter().enumerate().all(|(i, &b)| match i {
            _ if HYPHEN_POSITIONS.contains(&i) => b == b'-',
            14 => b == b'4',
            19 => matches!(b, b'8' | b'9' | b'a' | b'b'),
            _ => b.is_ascii_digit() || (b'a'..=b'f').contains(&b),
        })
    }
}

impl fmt::Debug for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureId({})", self.0)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
