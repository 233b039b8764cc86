// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use async_trait::async_trait;
use indexmap::IndexMap;
use tracing::Instrument;

use engage_core::{AttributeValue, NotificationOption, PropertyValue, SdkOptions, TagScope};

use crate::sdk::{EngageAdapter, SdkError};

/// Wrapper that adds tracing to any [`EngageAdapter`]
#[derive(Clone)]
pub struct TracedEngage<A> {
    inner: A,
}

impl<A> TracedEngage<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
}

fn log_result(op: &'static str, result: Result<(), SdkError>) -> Result<(), SdkError> {
    match &result {
        Ok(()) => tracing::debug!(op, "sdk call ok"),
        Err(e) => tracing::error!(op, error = %e, "sdk call failed"),
    }
    result
}

#[async_trait]
impl<A: EngageAdapter> EngageAdapter for TracedEngage<A> {
    async fn initialize(&self, options: SdkOptions) -> Result<(), SdkError> {
        async {
            tracing::info!(
                in_production = ?options.in_production,
                features = ?options.enabled_features,
                "starting"
            );
            let start = std::time::Instant::now();
            let result = self.inner.initialize(options).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "sdk initialized"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "initialize failed"),
            }
            result
        }
        .instrument(tracing::info_span!("sdk.initialize"))
        .await
    }

    async fn set_channel_tags(&self, tags: Vec<String>) -> Result<(), SdkError> {
        log_result("set_channel_tags", self.inner.set_channel_tags(tags).await)
    }

    async fn set_named_user_tags(&self, group: &str, tags: Vec<String>) -> Result<(), SdkError> {
        log_result(
            "set_named_user_tags",
            self.inner.set_named_user_tags(group, tags).await,
        )
    }

    async fn add_tag(&self, tag: &str) -> Result<(), SdkError> {
        log_result("add_tag", self.inner.add_tag(tag).await)
    }

    async fn remove_tag(&self, tag: &str) -> Result<(), SdkError> {
        log_result("remove_tag", self.inner.remove_tag(tag).await)
    }

    async fn add_tag_group(
        &self,
        group: &str,
        tags: Vec<String>,
        scope: TagScope,
    ) -> Result<(), SdkError> {
        log_result(
            "add_tag_group",
            self.inner.add_tag_group(group, tags, scope).await,
        )
    }

    async fn remove_tag_group(
        &self,
        group: &str,
        tags: Vec<String>,
        scope: TagScope,
    ) -> Result<(), SdkError> {
        log_result(
            "remove_tag_group",
            self.inner.remove_tag_group(group, tags, scope).await,
        )
    }

    async fn set_attributes(
        &self,
        attributes: IndexMap<String, AttributeValue>,
    ) -> Result<(), SdkError> {
        log_result("set_attributes", self.inner.set_attributes(attributes).await)
    }

    async fn identify_user(&self, id: &str) -> Result<(), SdkError> {
        log_result("identify_user", self.inner.identify_user(id).await)
    }

    async fn set_user_push_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        log_result(
            "set_user_push_enabled",
            self.inner.set_user_push_enabled(enabled).await,
        )
    }

    async fn set_push_notification_options(
        &self,
        options: Vec<NotificationOption>,
        channel_id: Option<&str>,
    ) -> Result<(), SdkError> {
        log_result(
            "set_push_notification_options",
            self.inner
                .set_push_notification_options(options, channel_id)
                .await,
        )
    }

    async fn set_quiet_time_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        log_result(
            "set_quiet_time_enabled",
            self.inner.set_quiet_time_enabled(enabled).await,
        )
    }

    async fn set_quiet_time(
        &self,
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<(), SdkError> {
        log_result(
            "set_quiet_time",
            self.inner
                .set_quiet_time(start_hour, start_minute, end_hour, end_minute)
                .await,
        )
    }

    async fn set_custom_identifiers(
        &self,
        identifiers: IndexMap<String, String>,
    ) -> Result<(), SdkError> {
        log_result(
            "set_custom_identifiers",
            self.inner.set_custom_identifiers(identifiers).await,
        )
    }

    async fn enable_advertising_ids(
        &self,
        id: &str,
        limit_ad_tracking: bool,
    ) -> Result<(), SdkError> {
        log_result(
            "enable_advertising_ids",
            self.inner.enable_advertising_ids(id, limit_ad_tracking).await,
        )
    }

    async fn track_screen_view(&self, screen_name: &str) -> Result<(), SdkError> {
        log_result(
            "track_screen_view",
            self.inner.track_screen_view(screen_name).await,
        )
    }

    async fn track_event(
        &self,
        name: &str,
        value: Option<f64>,
        properties: Option<IndexMap<String, PropertyValue>>,
    ) -> Result<(), SdkError> {
        log_result(
            "track_event",
            self.inner.track_event(name, value, properties).await,
        )
    }

    async fn set_analytics_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        log_result(
            "set_analytics_enabled",
            self.inner.set_analytics_enabled(enabled).await,
        )
    }

    async fn set_location_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        log_result(
            "set_location_enabled",
            self.inner.set_location_enabled(enabled).await,
        )
    }

    async fn set_background_location_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        log_result(
            "set_background_location_enabled",
            self.inner.set_background_location_enabled(enabled).await,
        )
    }

    async fn set_in_app_messaging_enabled(&self, enabled: bool) -> Result<(), SdkError> {
        log_result(
            "set_in_app_messaging_enabled",
            self.inner.set_in_app_messaging_enabled(enabled).await,
        )
    }

    async fn set_in_app_messaging_paused(&self, paused: bool) -> Result<(), SdkError> {
        log_result(
            "set_in_app_messaging_paused",
            self.inner.set_in_app_messaging_paused(paused).await,
        )
    }

    async fn set_in_app_display_interval(&self, seconds: i64) -> Result<(), SdkError> {
        log_result(
            "set_in_app_display_interval",
            self.inner.set_in_app_display_interval(seconds).await,
        )
    }

    async fn display_message_center(&self, message_id: Option<&str>) -> Result<(), SdkError> {
        log_result(
            "display_message_center",
            self.inner.display_message_center(message_id).await,
        )
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
