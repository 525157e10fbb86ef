//! The ordered trust scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Trust level held by a subject or required by a resource.
///
/// Levels form a total order: `Sandbox < Standard < Trusted < Core`.
/// Ordering is defined by [`rank()`](TrustLevel::rank), not by declaration
/// order, so inserting a level means assigning it an explicit rank.
///
/// ```rust
/// use marketguard::TrustLevel;
///
/// assert!(TrustLevel::Trusted > TrustLevel::Standard);
/// assert_eq!("CORE".parse::<TrustLevel>().unwrap(), TrustLevel::Core);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    /// New or unverified subjects; the lowest level.
    #[default]
    Sandbox,

    /// Ordinary verified subjects.
    Standard,

    /// Subjects with an established track record.
    Trusted,

    /// Platform-level subjects; the highest level.
    Core,
}

impl TrustLevel {
    /// Every level, lowest first.
    pub const ALL: [TrustLevel; 4] = [
        TrustLevel::Sandbox,
        TrustLevel::Standard,
        TrustLevel::Trusted,
        TrustLevel::Core,
    ];

    /// Returns the position of this level on the trust scale.
    #[inline]
    pub const fn rank(self) -> u8 {
        match self {
            TrustLevel::Sandbox => 0,
            TrustLevel::Standard => 1,
            TrustLevel::Trusted => 2,
            TrustLevel::Core => 3,
        }
    }

    /// Returns the lowercase name used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            TrustLevel::Sandbox => "sandbox",
            TrustLevel::Standard => "standard",
            TrustLevel::Trusted => "trusted",
            TrustLevel::Core => "core",
        }
    }

    /// Returns `true` if this level meets or exceeds `required`.
    #[inline]
    pub fn satisfies(self, required: TrustLevel) -> bool {
        self.rank() >= required.rank()
    }
}

impl PartialOrd for TrustLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TrustLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrustLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TrustLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::invalid_argument(format!("unknown trust level '{}'", trimmed)))
    }
}
