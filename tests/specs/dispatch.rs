// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end dispatch behavior across command batches.

use engage_adapters::EngageCall;
use engage_core::TagScope;
use serde_json::json;

use crate::prelude::Harness;

#[tokio::test]
async fn mixed_batch_runs_in_input_order() {
    let harness = Harness::new();
    let (calls, sent) = harness
        .invoke(json!({
            "command_name": "setnameduser,addtag,trackevent",
            "named_user_identifier": "user_1234",
            "channel_tag": "vip",
            "event_name": "purchase",
            "event_value": 19.99,
        }))
        .await;

    assert_eq!(sent, 1);
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        EngageCall::IdentifyUser {
            id: "user_1234".into()
        }
    );
    assert_eq!(calls[1], EngageCall::AddTag { tag: "vip".into() });
    assert_eq!(
        calls[2],
        EngageCall::TrackEvent {
            name: "purchase".into(),
            value: Some(19.99),
            properties: None,
        }
    );
}

#[tokio::test]
async fn duplicate_tokens_run_each_time() {
    let harness = Harness::new();
    let (calls, _) = harness
        .invoke(json!({
            "command_name": "addtag,addtag",
            "channel_tag": "repeat",
        }))
        .await;

    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn tag_group_edits_share_one_payload() {
    let harness = Harness::new();
    let (calls, _) = harness
        .invoke(json!({
            "command_name": "addtaggroup,removetaggroup",
            "tag_group": "loyalty",
            "channel_tags": ["gold"],
        }))
        .await;

    assert_eq!(
        calls,
        vec![
            EngageCall::AddTagGroup {
                group: "loyalty".into(),
                tags: vec!["gold".into()],
                scope: TagScope::Channel,
            },
            EngageCall::RemoveTagGroup {
                group: "loyalty".into(),
                tags: vec!["gold".into()],
                scope: TagScope::Channel,
            },
        ]
    );
}

#[tokio::test]
async fn whole_batch_of_unknown_tokens_is_a_quiet_no_op() {
    let harness = Harness::new();
    let (calls, sent) = harness
        .invoke(json!({"command_name": "foo,bar,baz"}))
        .await;

    assert!(calls.is_empty());
    assert_eq!(sent, 1);
}

#[tokio::test]
async fn consecutive_invocations_are_independent() {
    let harness = Harness::new();

    let (_, first_sent) = harness
        .invoke(json!({"command_name": "enableanalytics"}))
        .await;
    let (calls, second_sent) = harness
        .invoke(json!({"command_name": "disableanalytics"}))
        .await;

    assert_eq!(first_sent, 1);
    assert_eq!(second_sent, 1);
    assert_eq!(
        calls,
        vec![
            EngageCall::SetAnalyticsEnabled { enabled: true },
            EngageCall::SetAnalyticsEnabled { enabled: false },
        ]
    );
}
