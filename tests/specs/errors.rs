// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure isolation: commands are best-effort, the completion signal is not.

use engage_adapters::EngageCall;
use engage_bridge::FakeHostResponse;
use serde_json::json;

use crate::prelude::{payload, Harness};

#[tokio::test]
async fn sdk_failure_in_one_command_spares_the_rest() {
    let harness = Harness::new();
    harness.sdk.fail_on("identify_user");

    let (calls, sent) = harness
        .invoke(json!({
            "command_name": "setnameduser,trackscreenview",
            "named_user_identifier": "user",
            "screen_name": "home",
        }))
        .await;

    assert_eq!(sent, 1);
    assert_eq!(
        calls,
        vec![EngageCall::TrackScreenView {
            screen_name: "home".into()
        }]
    );
}

#[tokio::test]
async fn missing_fields_across_the_whole_batch_still_signal_completion() {
    let harness = Harness::new();
    let (calls, sent) = harness
        .invoke(json!({
            "command_name": "trackevent,setnameduser,addtag,setattributes",
        }))
        .await;

    assert!(calls.is_empty());
    assert_eq!(sent, 1);
}

#[tokio::test]
async fn wrong_typed_fields_are_per_command_failures() {
    let harness = Harness::new();
    let (calls, sent) = harness
        .invoke(json!({
            "command_name": "setchanneltags,addtag",
            "channel_tags": "not-an-array",
            "channel_tag": "still_fine",
        }))
        .await;

    assert_eq!(sent, 1);
    assert_eq!(
        calls,
        vec![EngageCall::AddTag {
            tag: "still_fine".into()
        }]
    );
}

#[tokio::test]
async fn every_command_failing_still_sends_exactly_once() {
    let harness = Harness::new();
    harness.sdk.fail_on("set_analytics_enabled");
    harness.sdk.fail_on("set_location_enabled");

    let mut response = FakeHostResponse::new(payload(json!({
        "command_name": "enableanalytics,enablelocation",
    })));
    harness.bridge.on_invoke(&mut response).await;

    assert!(harness.sdk.calls().is_empty());
    assert_eq!(response.sent(), 1);
}
