// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host response for testing

use engage_core::Payload;

use crate::dispatch::HostResponse;

/// Host response double: hands out a canned payload and counts completion
/// signals.
#[derive(Debug, Default)]
pub struct FakeHostResponse {
    payload: Option<Payload>,
    sent: usize,
}

impl FakeHostResponse {
    pub fn new(payload: Payload) -> Self {
        Self {
            payload: Some(payload),
            sent: 0,
        }
    }

    /// A response carrying no request payload at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// How many times the completion signal fired.
    pub fn sent(&self) -> usize {
        self.sent
    }
}

impl HostResponse for FakeHostResponse {
    fn request_payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    fn send(&mut self) {
        self.sent += 1;
    }
}
