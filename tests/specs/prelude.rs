// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for behavioral specs.

use engage_adapters::{EngageCall, FakeEngageAdapter};
use engage_bridge::{CommandBridge, FakeHostResponse};
use engage_core::Payload;

/// Route bridge logs through the test harness when `RUST_LOG` asks for them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a [`Payload`] from inline JSON, panicking on non-objects.
pub fn payload(value: serde_json::Value) -> Payload {
    Payload::try_from(value).unwrap()
}

/// A bridge wired to a fresh recording fake.
pub struct Harness {
    pub sdk: FakeEngageAdapter,
    pub bridge: CommandBridge<FakeEngageAdapter>,
}

impl Harness {
    pub fn new() -> Self {
        init_tracing();
        let sdk = FakeEngageAdapter::new();
        let bridge = CommandBridge::new(sdk.clone());
        Self { sdk, bridge }
    }

    /// Run one invocation, returning recorded calls and send count.
    pub async fn invoke(&self, value: serde_json::Value) -> (Vec<EngageCall>, usize) {
        let mut response = FakeHostResponse::new(payload(value));
        self.bridge.on_invoke(&mut response).await;
        (self.sdk.calls(), response.sent())
    }
}
