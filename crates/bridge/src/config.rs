// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Translation from the host configuration document to [`SdkOptions`].
//!
//! The configuration document uses flat camelCase keys matching the vendor
//! builder surface. Recognized keys are coerced and set; absent keys keep
//! vendor defaults; malformed values are logged and skipped so one bad key
//! never loses the rest of the configuration.

use engage_core::{LogLevel, Payload, PrivacyFeatures, SdkOptions};
use url::Url;

/// Configuration document keys, camelCase per the vendor builder surface.
pub mod config_keys {
    pub const PRODUCTION_APP_KEY: &str = "productionAppKey";
    pub const PRODUCTION_APP_SECRET: &str = "productionAppSecret";
    pub const DEVELOPMENT_APP_KEY: &str = "developmentAppKey";
    pub const DEVELOPMENT_APP_SECRET: &str = "developmentAppSecret";
    pub const SITE: &str = "site";
    pub const ENABLED_FEATURES: &str = "enabledFeatures";
    pub const IS_DATA_COLLECTION_ENABLED: &str = "isDataCollectionEnabled";
    pub const RESET_ENABLED_FEATURES: &str = "resetEnabledFeatures";
    pub const IS_IN_PRODUCTION: &str = "isInProduction";
    pub const INITIAL_CONFIG_URL: &str = "initialConfigUrl";
    pub const REQUIRE_INITIAL_REMOTE_CONFIG_ENABLED: &str = "requireInitialRemoteConfigEnabled";
    pub const LOG_LEVEL: &str = "logLevel";
    pub const DEVELOPMENT_LOG_LEVEL: &str = "developmentLogLevel";
    pub const PRODUCTION_LOG_LEVEL: &str = "productionLogLevel";
    pub const IS_ANALYTICS_ENABLED: &str = "isAnalyticsEnabled";
    pub const DEFAULT_CHANNEL: &str = "defaultChannel";
    pub const CHANNEL_CREATION_DELAY_ENABLED: &str = "channelCreationDelayEnabled";
    pub const ALLOWED_TRANSPORTS: &str = "allowedTransports";
    pub const FCM_FIREBASE_APP_NAME: &str = "fcmFirebaseAppName";
    pub const APP_STORE_URI: &str = "appStoreUri";
    pub const AUTO_PAUSE_IN_APP_AUTOMATION_ON_LAUNCH: &str = "autoPauseInAppAutomationOnLaunch";
    pub const BACKGROUND_REPORTING_INTERVAL_MS: &str = "backgroundReportingIntervalMS";
    pub const CHANNEL_CAPTURE_ENABLED: &str = "channelCaptureEnabled";
    pub const EXTENDED_BROADCASTS_ENABLED: &str = "extendedBroadcastsEnabled";
    pub const URL_ALLOW_LIST: &str = "urlAllowList";
    pub const URL_ALLOW_LIST_SCOPE_JAVASCRIPT_INTERFACE: &str =
        "urlAllowListScopeJavaScriptInterface";
    pub const URL_ALLOW_LIST_SCOPE_OPEN_URL: &str = "urlAllowListScopeOpenUrl";
}

/// Build vendor options from a configuration document.
///
/// The legacy `isDataCollectionEnabled` switch maps to all-features-on /
/// all-features-off, and only applies when the newer `enabledFeatures` key
/// is absent.
pub fn parse_options(config: &Payload) -> SdkOptions {
    let mut options = SdkOptions::default();

    options.production_app_key = config.opt_string(config_keys::PRODUCTION_APP_KEY);
    options.production_app_secret = config.opt_string(config_keys::PRODUCTION_APP_SECRET);
    options.development_app_key = config.opt_string(config_keys::DEVELOPMENT_APP_KEY);
    options.development_app_secret = config.opt_string(config_keys::DEVELOPMENT_APP_SECRET);
    options.site = config.opt_string(config_keys::SITE);

    if config.contains(config_keys::ENABLED_FEATURES) {
        match config.opt_strings(config_keys::ENABLED_FEATURES) {
            Some(names) => {
                options.enabled_features = Some(PrivacyFeatures::from_names(&names));
            }
            None => {
                tracing::warn!(
                    key = config_keys::ENABLED_FEATURES,
                    "expected an array of feature names; ignoring"
                );
            }
        }
    } else if let Some(enabled) = config.opt_boolean(config_keys::IS_DATA_COLLECTION_ENABLED) {
        // Backward compatibility: the old switch is all-on / all-off.
        options.enabled_features = Some(if enabled {
            PrivacyFeatures::ALL
        } else {
            PrivacyFeatures::NONE
        });
    }

    options.reset_enabled_features = config.opt_boolean(config_keys::RESET_ENABLED_FEATURES);
    options.in_production = config.opt_boolean(config_keys::IS_IN_PRODUCTION);
    options.initial_config_url = config.opt_string(config_keys::INITIAL_CONFIG_URL);
    options.require_initial_remote_config =
        config.opt_boolean(config_keys::REQUIRE_INITIAL_REMOTE_CONFIG_ENABLED);

    options.log_level = log_level(config, config_keys::LOG_LEVEL);
    options.development_log_level = log_level(config, config_keys::DEVELOPMENT_LOG_LEVEL);
    options.production_log_level = log_level(config, config_keys::PRODUCTION_LOG_LEVEL);

    options.analytics_enabled = config.opt_boolean(config_keys::IS_ANALYTICS_ENABLED);
    options.default_notification_channel = config.opt_string(config_keys::DEFAULT_CHANNEL);
    options.channel_creation_delay_enabled =
        config.opt_boolean(config_keys::CHANNEL_CREATION_DELAY_ENABLED);
    options.allowed_transports = config.opt_strings(config_keys::ALLOWED_TRANSPORTS);
    options.fcm_firebase_app_name = config.opt_string(config_keys::FCM_FIREBASE_APP_NAME);

    if let Some(raw) = config.opt_string(config_keys::APP_STORE_URI) {
        match Url::parse(&raw) {
            Ok(uri) => options.app_store_uri = Some(uri),
            Err(e) => {
                tracing::warn!(uri = raw.as_str(), error = %e, "invalid app store URI");
            }
        }
    }

    options.auto_pause_in_app_automation =
        config.opt_boolean(config_keys::AUTO_PAUSE_IN_APP_AUTOMATION_ON_LAUNCH);

    if let Some(interval) = config.opt_integer(config_keys::BACKGROUND_REPORTING_INTERVAL_MS) {
        if interval > 0 {
            options.background_reporting_interval_ms = Some(interval);
        }
    }

    options.channel_capture_enabled = config.opt_boolean(config_keys::CHANNEL_CAPTURE_ENABLED);
    options.extended_broadcasts_enabled =
        config.opt_boolean(config_keys::EXTENDED_BROADCASTS_ENABLED);

    options.url_allow_list = url_allow_list(config, config_keys::URL_ALLOW_LIST);
    options.url_allow_list_scope_javascript_interface =
        url_allow_list(config, config_keys::URL_ALLOW_LIST_SCOPE_JAVASCRIPT_INTERFACE);
    options.url_allow_list_scope_open_url =
        url_allow_list(config, config_keys::URL_ALLOW_LIST_SCOPE_OPEN_URL);

    options
}

/// Unrecognized level names warn and fall back to `Error` rather than
/// silently clearing the field.
fn log_level(config: &Payload, key: &str) -> Option<LogLevel> {
    let name = config.opt_string(key)?;
    match LogLevel::parse(&name) {
        Some(level) => Some(level),
        None => {
            tracing::warn!(
                key,
                value = name.as_str(),
                "unknown log level, defaulting to error; valid values: trace, debug, info, warn, error, none"
            );
            Some(LogLevel::Error)
        }
    }
}

/// Allow lists are only set when present and non-empty.
fn url_allow_list(config: &Payload, key: &str) -> Option<Vec<String>> {
    config.opt_strings(key).filter(|list| !list.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
