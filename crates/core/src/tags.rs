// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tag ownership scope.

use serde::{Deserialize, Serialize};

/// Who owns a tag-group edit: the device channel or the cross-device
/// named user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagScope {
    Channel,
    NamedUser,
}
