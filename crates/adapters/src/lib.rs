// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters over the vendor engagement SDK

pub mod sdk;
pub mod traced;

pub use sdk::{EngageAdapter, NoOpEngageAdapter, SdkError};
pub use traced::TracedEngage;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use sdk::{EngageCall, FakeEngageAdapter};
