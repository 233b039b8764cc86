// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command dispatcher: one host invocation in, a best-effort batch of
//! SDK calls out.

use thiserror::Error;

use engage_adapters::{EngageAdapter, SdkError};
use engage_core::{AttributeValue, NotificationOption, Payload, PayloadError, PropertyValue, TagScope};

use crate::command::{keys, split_commands, Command};
use crate::config::parse_options;

/// Per-command failures caught at the dispatch boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Sdk(#[from] SdkError),
}

/// One invocation from the host framework: a request payload plus the
/// completion signal the host waits on.
pub trait HostResponse {
    /// The payload for this invocation, if the host supplied one.
    fn request_payload(&self) -> Option<&Payload>;

    /// Signal the host that the batch has been processed.
    fn send(&mut self);
}

/// Dispatches host command batches onto an injected SDK facade.
pub struct CommandBridge<A> {
    sdk: A,
}

impl<A: EngageAdapter> CommandBridge<A> {
    pub fn new(sdk: A) -> Self {
        Self { sdk }
    }

    /// Access the underlying adapter.
    pub fn sdk(&self) -> &A {
        &self.sdk
    }

    /// Process one host invocation.
    ///
    /// Tokens run in input order; a failing command is logged and skipped
    /// without disturbing the rest. The completion signal fires exactly
    /// once, after the whole batch, even when every command fails.
    pub async fn on_invoke<R: HostResponse + ?Sized>(&self, response: &mut R) {
        if let Some(payload) = response.request_payload().cloned() {
            for token in split_commands(&payload) {
                let Some(command) = Command::lookup(&token) else {
                    continue;
                };
                tracing::debug!(command = command.name(), "handling command");
                if let Err(e) = self.run(command, &payload).await {
                    tracing::warn!(command = command.name(), error = %e, "command failed");
                }
            }
        }
        response.send();
    }

    async fn run(&self, command: Command, payload: &Payload) -> Result<(), DispatchError> {
        match command {
            Command::Initialize => {
                self.sdk.initialize(parse_options(payload)).await?;
            }
            Command::TrackEvent => {
                let name = payload.string(keys::EVENT_NAME)?;
                let value = payload.opt_number(keys::EVENT_VALUE);
                let properties = payload
                    .opt_object(keys::EVENT_PROPERTIES)
                    .map(|props| PropertyValue::map_from(&props));
                self.sdk.track_event(&name, value, properties).await?;
            }
            Command::TrackScreenView => {
                let screen = payload.string(keys::SCREEN_NAME)?;
                self.sdk.track_screen_view(&screen).await?;
            }
            Command::SetNamedUser => {
                let id = payload.string(keys::NAMED_USER_IDENTIFIER)?;
                self.sdk.identify_user(&id).await?;
            }
            Command::SetCustomIdentifiers => {
                let identifiers = payload.string_map(keys::CUSTOM_IDENTIFIERS)?;
                self.sdk.set_custom_identifiers(identifiers).await?;
            }
            Command::EnableAdvertisingIdentifiers => {
                let id = payload.string(keys::GOOGLE_ADID)?;
                let limited = payload.boolean(keys::GOOGLE_LIMIT_AD_TRACKING)?;
                self.sdk.enable_advertising_ids(&id, limited).await?;
            }
            Command::SetInAppMessagingDisplayInterval => {
                let seconds = payload.integer(keys::IN_APP_MESSAGING_DISPLAY_INTERVAL)?;
                self.sdk.set_in_app_display_interval(seconds).await?;
            }
            Command::SetPushNotificationOptions => {
                let names = payload.strings(keys::PUSH_NOTIFICATION_OPTIONS)?;
                let channel = payload.opt_string(keys::CHANNEL_ID);
                self.sdk
                    .set_push_notification_options(
                        NotificationOption::parse_all(&names),
                        channel.as_deref(),
                    )
                    .await?;
            }
            Command::EnableUserPushNotifications => {
                self.sdk.set_user_push_enabled(true).await?;
                if let Some(names) = payload.opt_strings(keys::PUSH_NOTIFICATION_OPTIONS) {
                    let channel = payload.opt_string(keys::CHANNEL_ID);
                    self.sdk
                        .set_push_notification_options(
                            NotificationOption::parse_all(&names),
                            channel.as_deref(),
                        )
                        .await?;
                }
            }
            Command::DisableUserPushNotifications => {
                self.sdk.set_user_push_enabled(false).await?;
            }
            Command::SetQuietTimeStart => {
                // All four components are required; a partial window is no window.
                let quiet = payload.object(keys::QUIET)?;
                let start_hour = time_component(&quiet, keys::START_HOUR)?;
                let start_minute = time_component(&quiet, keys::START_MINUTE)?;
                let end_hour = time_component(&quiet, keys::END_HOUR)?;
                let end_minute = time_component(&quiet, keys::END_MINUTE)?;
                self.sdk
                    .set_quiet_time(start_hour, start_minute, end_hour, end_minute)
                    .await?;
            }
            Command::EnableQuietTime => self.sdk.set_quiet_time_enabled(true).await?,
            Command::DisableQuietTime => self.sdk.set_quiet_time_enabled(false).await?,
            Command::SetChannelTags => {
                let tags = payload.strings(keys::CHANNEL_TAGS)?;
                self.sdk.set_channel_tags(tags).await?;
            }
            Command::SetNamedUserTags => {
                let group = payload.string(keys::TAG_GROUP)?;
                let tags = payload.strings(keys::NAMED_USER_TAGS)?;
                self.sdk.set_named_user_tags(&group, tags).await?;
            }
            Command::AddTag => {
                let tag = payload.string(keys::CHANNEL_TAG)?;
                self.sdk.add_tag(&tag).await?;
            }
            Command::RemoveTag => {
                let tag = payload.string(keys::CHANNEL_TAG)?;
                self.sdk.remove_tag(&tag).await?;
            }
            Command::AddTagGroup => {
                let group = payload.string(keys::TAG_GROUP)?;
                // Channel and named-user arrays are independent; either may
                // fire alone, and absence of one never blocks the other.
                if let Some(tags) = payload.opt_strings(keys::CHANNEL_TAGS) {
                    self.sdk
                        .add_tag_group(&group, tags, TagScope::Channel)
                        .await?;
                }
                if let Some(tags) = payload.opt_strings(keys::NAMED_USER_TAGS) {
                    self.sdk
                        .add_tag_group(&group, tags, TagScope::NamedUser)
                        .await?;
                }
            }
            Command::RemoveTagGroup => {
                let group = payload.string(keys::TAG_GROUP)?;
                if let Some(tags) = payload.opt_strings(keys::CHANNEL_TAGS) {
                    self.sdk
                        .remove_tag_group(&group, tags, TagScope::Channel)
                        .await?;
                }
                if let Some(tags) = payload.opt_strings(keys::NAMED_USER_TAGS) {
                    self.sdk
                        .remove_tag_group(&group, tags, TagScope::NamedUser)
                        .await?;
                }
            }
            Command::SetAttributes => {
                let attributes = payload.object(keys::ATTRIBUTES)?;
                self.sdk
                    .set_attributes(AttributeValue::map_from(&attributes))
                    .await?;
            }
            Command::DisplayMessageCenter => {
                let message_id = payload.opt_string(keys::MESSAGE_ID);
                self.sdk
                    .display_message_center(message_id.as_deref())
                    .await?;
            }
            Command::EnableAnalytics => self.sdk.set_analytics_enabled(true).await?,
            Command::DisableAnalytics => self.sdk.set_analytics_enabled(false).await?,
            Command::EnableInAppMessaging => self.sdk.set_in_app_messaging_enabled(true).await?,
            Command::DisableInAppMessaging => self.sdk.set_in_app_messaging_enabled(false).await?,
            Command::PauseInAppMessaging => self.sdk.set_in_app_messaging_paused(true).await?,
            Command::UnpauseInAppMessaging => self.sdk.set_in_app_messaging_paused(false).await?,
            Command::EnableLocation => self.sdk.set_location_enabled(true).await?,
            Command::DisableLocation => self.sdk.set_location_enabled(false).await?,
            Command::EnableBackgroundLocation => {
                self.sdk.set_background_location_enabled(true).await?
            }
            Command::DisableBackgroundLocation => {
                self.sdk.set_background_location_enabled(false).await?
            }
        }
        Ok(())
    }
}

/// Clock components are small non-negative ints; anything else is malformed.
fn time_component(quiet: &Payload, key: &str) -> Result<u32, PayloadError> {
    u32::try_from(quiet.integer(key)?).map_err(|_| PayloadError::WrongType {
        key: key.to_string(),
        expected: "non-negative integer",
    })
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
