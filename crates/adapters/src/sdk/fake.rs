// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake SDK adapter for deterministic testing

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;

use engage_core::{AttributeValue, NotificationOption, PropertyValue, SdkOptions, TagScope};

use super::{EngageAdapter, SdkError};

/// Recorded call to [`FakeEngageAdapter`]
#[derive(Debug, Clone, PartialEq)]
pub enum EngageCall {
    Initialize {
        options: SdkOptions,
    },
    SetChannelTags {
        tags: Vec<String>,
    },
    SetNamedUserTags {
        group: String,
        tags: Vec<String>,
    },
    AddTag {
        tag: String,
    },
    RemoveTag {
        tag: String,
    },
    AddTagGroup {
        group: String,
        tags: Vec<String>,
        scope: TagScope,
    },
    RemoveTagGroup {
        group: String,
        tags: Vec<String>,
        scope: TagScope,
    },
    SetAttributes {
        attributes: IndexMap<String, AttributeValue>,
    },
    IdentifyUser {
        id: String,
    },
    SetUserPushEnabled {
        enabled: bool,
    },
    SetPushNotificationOptions {
        options: Vec<NotificationOption>,
        channel_id: Option<String>,
    },
    SetQuietTimeEnabled {
        enabled: bool,
    },
    SetQuietTime {
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    },
    SetCustomIdentifiers {
        identifiers: IndexMap<String, String>,
    },
    EnableAdvertisingIds {
        id: String,
        limit_ad_tracking: bool,
    },
    TrackScreenView {
        screen_name: String,
    },
    TrackEvent {
        name: String,
        value: Option<f64>,
        properties: Option<IndexMap<String, PropertyValue>>,
    },
    SetAnalyticsEnabled {
        enabled: bool,
    },
    SetLocationEnabled {
        enabled: bool,
    },
    SetBackgroundLocationEnabled {
        enabled: bool,
    },
    SetInAppMessagingEnabled {
        enabled: bool,
    },
    SetInAppMessagingPaused {
        paused: bool,
    },
    SetInAppDisplayInterval {
        seconds: i64,
    },
    DisplayMessageCenter {
        message_id: Option<String>,
    },
}

struct FakeEngageState {
    calls: Vec<EngageCall>,
    fail_ops: HashSet<&'static str>,
}

/// Fake SDK adapter for testing
///
/// Records every call in order and can be told to fail specific operations.
#[derive(Clone)]
pub struct FakeEngageAdapter {
    inner: Arc<Mutex<FakeEngageState>>,
}

impl Default for FakeEngageAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeEngageState {
                calls: Vec::new(),
                fail_ops: HashSet::new(),
            })),
        }
    }
}

impl FakeEngageAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls, in order.
    pub fn calls(&self) -> Vec<EngageCall> {
        self.inner.lock().calls.clone()
    }

    /// Clear recorded calls.
    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    /// Make the named operation fail with [`SdkError::CallFailed`].
    /// Operation names match the trait method names, e.g. `"track_event"`.
    pub fn fail_on(&self, op: &'static str) {
        self.inner.lock().fail_ops.insert(op);
    }

    fn record(&self, op: &'static str, call: EngageCall) -> Result<(), SdkError> {
        let mut inner = self.inner.lock();
        if inner.fail_ops.contains(op) {
            return Err(SdkError::CallFailed(format!("injected failure: {op}")));
        }
        inner.calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl EngageAdapter for FakeEngageAdapter {
    async fn initialize(&self, options: SdkOptions) -> Result<(), SdkError> {
        self.record("initialize", EngageCall::Initialize { options })
    }

    async fn set_channel_tags(&self, tags: Vec<String>) -> Result<(), SdkError> {
        self.record("set_channel_tags", EngageCall::SetChannelTags { tags })
    }

    async fn set_named_user_tags(&self, group: &str, tags: Vec<String>) -> Result<(), SdkError> {
        self.record(
            "set_named_user_tags",
            EngageCall::SetNamedUserTags {
                group: group.to_string(),
                tags,
            },
        )
    }

    async fn add_tag(&self, tag: &str) -> Result<(), SdkError> {
        self.record(
            "add_tag",
            EngageCall::AddTag {
                tag: tag.to_string(),
            },
        )
    }

    async fn remove_tag(&self, tag: &str) -> Result<(), SdkError> {
        self.record(
            "remove_tag",
            EngageCall::RemoveTag {
                tag: tag.to_string(),
            },
        )
    }

    async fn add_tag_group(
        &self,
        group: &str,
        tags: Vec<String>,
        scope: TagScope,
    ) -> Result<(), SdkError> {
        self.record(
            "add_tag_group",
            EngageCall::AddTagGroup {
                group: group.to_string(),
                tags,
                scope,
            },
        )
    }

    async fn remove_tag_group(
        &self,
        group: &str,
        tags: Vec<String>,
        scope: TagScope,
    ) -> Result<(), SdkError> {
        self.record(
            "remove_tag_group",
            EngageCall::RemoveTagGroup {
                group: group.to_string(),
                tags,
                scope,
            },
        )
    }

    async fn set_attributes(
        &self,
        attributes: IndexMap<String, AttributeValue>,
    ) -> Result<(), SdkError> {
        self.record("set_attributes", EngageCall::SetAttributes { attributes })
    }

    async fn identify_user(&self, id: &str) -> Result<(), SdkError> {
        self.record(
            "identify_user",
            EngageCall::IdentifyUser { id: id.to_string() },
        )
    }

    async fn set_user_push_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        self.record(
            "set_user_push_enabled",
            EngageCall::SetUserPushEnabled { enabled },
        )
    }

    async fn set_push_notification_options(
        &self,
        options: Vec<NotificationOption>,
        channel_id: Option<&str>,
    ) -> Result<(), SdkError> {
        self.record(
            "set_push_notification_options",
            EngageCall::SetPushNotificationOptions {
                options,
                channel_id: channel_id.map(str::to_string),
            },
        )
    }

    async fn set_quiet_time_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        self.record(
            "set_quiet_time_enabled",
            EngageCall::SetQuietTimeEnabled { enabled },
        )
    }

    async fn set_quiet_time(
        &self,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<(), SdkError> {
        self.record(
            "set_quiet_time",
            EngageCall::SetQuietTime {
                start_hour,
                start_minute,
                end_hour,
                end_minute,
            },
        )
    }

    async fn set_custom_identifiers(
        &self,
        identifiers: IndexMap<String, String>,
    ) -> Result<(), SdkError> {
        self.record(
            "set_custom_identifiers",
            EngageCall::SetCustomIdentifiers { identifiers },
        )
    }

    async fn enable_advertising_ids(
        &self,
        id: &str,
        limit_ad_tracking: bool,
    ) -> Result<(), SdkError> {
        self.record(
            "enable_advertising_ids",
            EngageCall::EnableAdvertisingIds {
                id: id.to_string(),
                limit_ad_tracking,
            },
        )
    }

    async fn track_screen_view(&self, screen_name: &str) -> Result<(), SdkError> {
        self.record(
            "track_screen_view",
            EngageCall::TrackScreenView {
                screen_name: screen_name.to_string(),
            },
        )
    }

    async fn track_event(
        &self,
        name: &str,
        value: Option<f64>,
        properties: Option<IndexMap<String, PropertyValue>>,
    ) -> Result<(), SdkError> {
        self.record(
            "track_event",
            EngageCall::TrackEvent {
                name: name.to_string(),
                value,
                properties,
            },
        )
    }

    async fn set_analytics_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        self.record(
            "set_analytics_enabled",
            EngageCall::SetAnalyticsEnabled { enabled },
        )
    }

    async fn set_location_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        self.record(
            "set_location_enabled",
            EngageCall::SetLocationEnabled { enabled },
        )
    }

    async fn set_background_location_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        self.record(
            "set_background_location_enabled",
            EngageCall::SetBackgroundLocationEnabled { enabled },
        )
    }

    async fn set_in_app_messaging_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        self.record(
            "set_in_app_messaging_enabled",
            EngageCall::SetInAppMessagingEnabled { enabled },
        )
    }

    async fn set_in_app_messaging_paused(&self, paused: bool) -> Result<(), SdkError> {
        self.record(
            "set_in_app_messaging_paused",
            EngageCall::SetInAppMessagingPaused { paused },
        )
    }

    async fn set_in_app_display_interval(&self, seconds: i64) -> Result<(), SdkError> {
        self.record(
            "set_in_app_display_interval",
            EngageCall::SetInAppDisplayInterval { seconds },
        )
    }

    async fn display_message_center(&self, message_id: Option<&str>) -> Result<(), SdkError> {
        self.record(
            "display_message_center",
            EngageCall::DisplayMessageCenter {
                message_id: message_id.map(str::to_string),
            },
        )
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
