// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Privacy feature flags controlling what the vendor SDK may collect.

use serde::{Deserialize, Serialize};

/// A set of vendor privacy features, stored as a bit mask.
///
/// Each feature can be independently enabled or disabled; the SDK only
/// collects data for features that are on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrivacyFeatures(u32);

impl PrivacyFeatures {
    pub const NONE: Self = Self(0);
    pub const IN_APP_AUTOMATION: Self = Self(1);
    pub const MESSAGE_CENTER: Self = Self(1 << 1);
    pub const PUSH: Self = Self(1 << 2);
    pub const CHAT: Self = Self(1 << 3);
    pub const ANALYTICS: Self = Self(1 << 4);
    pub const TAGS_AND_ATTRIBUTES: Self = Self(1 << 5);
    pub const CONTACTS: Self = Self(1 << 6);
    pub const LOCATION: Self = Self(1 << 7);
    pub const ALL: Self = Self(0xff);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Look up a single feature by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "IN_APP_AUTOMATION" => Some(Self::IN_APP_AUTOMATION),
            "MESSAGE_CENTER" => Some(Self::MESSAGE_CENTER),
            "PUSH" => Some(Self::PUSH),
            "CHAT" => Some(Self::CHAT),
            "ANALYTICS" => Some(Self::ANALYTICS),
            "TAGS_AND_ATTRIBUTES" => Some(Self::TAGS_AND_ATTRIBUTES),
            "CONTACTS" => Some(Self::CONTACTS),
            "LOCATION" => Some(Self::LOCATION),
            _ => None,
        }
    }

    /// Build a feature set from a list of names.
    ///
    /// The literals `"ALL"` and `"NONE"` override the whole set, with `ALL`
    /// winning when both appear. Unknown and empty names are dropped.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut all = false;
        let mut none = false;
        let mut set = Self::NONE;
        for name in names {
            match name.as_ref().to_ascii_uppercase().as_str() {
                "ALL" => all = true,
                "NONE" => none = true,
                other => {
                    if let Some(feature) = Self::from_name(other) {
                        set = set.union(feature);
                    }
                }
            }
        }
        if all {
            Self::ALL
        } else if none {
            Self::NONE
        } else {
            set
        }
    }
}

impl std::ops::BitOr for PrivacyFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
