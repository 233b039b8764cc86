// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! engage-bridge: remote-command dispatch onto the engagement SDK facade
//!
//! The host analytics framework delivers a comma-separated command string and
//! a JSON payload per invocation; this crate translates each command into a
//! call on an injected [`EngageAdapter`](engage_adapters::EngageAdapter),
//! isolating failures per command and signalling completion to the host
//! exactly once.

pub mod command;
pub mod config;
pub mod dispatch;

pub use command::{split_commands, Command, SEPARATOR};
pub use config::parse_options;
pub use dispatch::{CommandBridge, DispatchError, HostResponse};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake_host;
#[cfg(any(test, feature = "test-support"))]
pub use fake_host::FakeHostResponse;
