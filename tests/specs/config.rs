// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Initialize flows: the whole payload doubles as the configuration document.

use engage_adapters::EngageCall;
use engage_core::{LogLevel, PrivacyFeatures};
use serde_json::json;

use crate::prelude::Harness;

#[tokio::test]
async fn initialize_consumes_the_whole_payload_as_config() {
    let harness = Harness::new();
    let (calls, sent) = harness
        .invoke(json!({
            "command_name": "initialize",
            "productionAppKey": "prod_key",
            "productionAppSecret": "prod_secret",
            "developmentAppKey": "dev_key",
            "developmentAppSecret": "dev_secret",
            "isInProduction": true,
            "site": "EU",
            "enabledFeatures": ["PUSH", "ANALYTICS"],
            "productionLogLevel": "warn",
            "developmentLogLevel": "debug",
            "isAnalyticsEnabled": true,
            "defaultChannel": "news",
        }))
        .await;

    assert_eq!(sent, 1);
    let [EngageCall::Initialize { options }] = &calls[..] else {
        panic!("expected one initialize call, got {calls:?}");
    };
    assert_eq!(options.production_app_key.as_deref(), Some("prod_key"));
    assert_eq!(options.development_app_key.as_deref(), Some("dev_key"));
    assert_eq!(options.in_production, Some(true));
    assert_eq!(options.site.as_deref(), Some("EU"));
    assert_eq!(
        options.enabled_features,
        Some(PrivacyFeatures::PUSH | PrivacyFeatures::ANALYTICS)
    );
    assert_eq!(options.production_log_level, Some(LogLevel::Warn));
    assert_eq!(options.development_log_level, Some(LogLevel::Debug));
    assert_eq!(options.analytics_enabled, Some(true));
    assert_eq!(options.default_notification_channel.as_deref(), Some("news"));
}

#[tokio::test]
async fn initialize_then_commands_in_one_batch() {
    let harness = Harness::new();
    let (calls, _) = harness
        .invoke(json!({
            "command_name": "initialize,enableuserpushnotifications",
            "isDataCollectionEnabled": true,
        }))
        .await;

    assert_eq!(calls.len(), 2);
    let EngageCall::Initialize { options } = &calls[0] else {
        panic!("expected initialize first, got {calls:?}");
    };
    assert_eq!(options.enabled_features, Some(PrivacyFeatures::ALL));
    assert_eq!(calls[1], EngageCall::SetUserPushEnabled { enabled: true });
}

#[tokio::test]
async fn initialize_with_unknown_log_level_defaults_to_error() {
    let harness = Harness::new();
    let (calls, _) = harness
        .invoke(json!({
            "command_name": "initialize",
            "logLevel": "shouting",
        }))
        .await;

    let [EngageCall::Initialize { options }] = &calls[..] else {
        panic!("expected one initialize call, got {calls:?}");
    };
    assert_eq!(options.log_level, Some(LogLevel::Error));
}
