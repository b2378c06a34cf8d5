// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control commands.
//!
//! One method per device command. Each validates its inputs, builds the
//! request envelope and delegates to the session; nothing touches the
//! network when validation fails.

use crate::client::Client;
use crate::command::{
    AdjustmentRequest, CMD_CLEAR, CMD_SOURCE_SELECT, ColorRequest, ComponentStateRequest,
    EffectRequest, Envelope, ImageRequest, InstanceRequest, ProcessingRequest, SourceAutoRequest,
    VideoModeRequest,
};
use crate::error::{Result, ValueError};
use crate::types::{Adjustment, Effect, Image, InstanceCommand, LedMappingMode, VideoMode};

impl Client {
    /// Sets a static color for all LEDs.
    ///
    /// `color` is `[R, G, B]` or a repeated `[R, G, B, R, G, B, ...]`
    /// sequence addressing individual LEDs. `duration` is in
    /// milliseconds; `None` keeps the color until the priority is
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] for fewer than 2 color components, a
    /// priority below 1, an origin shorter than 3 characters or a
    /// negative duration.
    pub async fn set_color(
        &self,
        color: &[u8],
        priority: i32,
        origin: &str,
        duration: Option<i32>,
    ) -> Result<()> {
        if color.len() < 2 {
            return Err(ValueError::ColorRequired(color.len()).into());
        }
        validate(priority, origin, duration)?;

        self.send(&ColorRequest::new(color, priority, origin, duration))
            .await
    }

    /// Starts an effect by name, with optional overridden arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] for invalid priority, origin or duration.
    pub async fn set_effect(
        &self,
        effect: &Effect,
        priority: i32,
        origin: &str,
        duration: Option<i32>,
    ) -> Result<()> {
        validate(priority, origin, duration)?;

        self.send(&EffectRequest::new(effect, priority, origin, duration))
            .await
    }

    /// Displays a single image.
    ///
    /// When the image carries no format it is sent as `"auto"`, letting
    /// the server detect the encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] for invalid priority, origin or duration.
    pub async fn set_image(
        &self,
        mut image: Image,
        priority: i32,
        origin: &str,
        duration: Option<i32>,
    ) -> Result<()> {
        validate(priority, origin, duration)?;

        if image.format.is_none() {
            image.format = Some("auto".to_string());
        }

        self.send(&ImageRequest::new(image, priority, origin, duration))
            .await
    }

    /// Clears a priority, reverting `set_color`, `set_effect` or
    /// `set_image`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn clear_priority(&self, priority: i32) -> Result<()> {
        self.send(&Envelope {
            command: CMD_CLEAR,
            priority: Some(priority),
            ..Envelope::default()
        })
        .await
    }

    /// Selects the visible source manually by priority.
    ///
    /// The priority is not validated locally; the server decides whether
    /// it names a registered source.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn set_source(&self, priority: i32) -> Result<()> {
        self.send(&Envelope {
            command: CMD_SOURCE_SELECT,
            priority: Some(priority),
            ..Envelope::default()
        })
        .await
    }

    /// Lets the server pick the visible source by priority again.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn set_source_auto(&self) -> Result<()> {
        self.send(&SourceAutoRequest::new()).await
    }

    /// Updates color calibration values.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn set_adjustment(&self, adjustment: &Adjustment) -> Result<()> {
        self.send(&AdjustmentRequest::new(adjustment)).await
    }

    /// Switches the LED mapping mode for the incoming image.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn set_led_mapping(&self, mode: LedMappingMode) -> Result<()> {
        self.send(&ProcessingRequest::new(mode)).await
    }

    /// Switches the video mode.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn set_video_mode(&self, mode: VideoMode) -> Result<()> {
        self.send(&VideoModeRequest::new(mode)).await
    }

    /// Enables or disables a component at runtime.
    ///
    /// Some components never switch; see
    /// [`Component::switchable`](crate::Component::switchable).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn set_component_state(&self, component: &str, enabled: bool) -> Result<()> {
        self.send(&ComponentStateRequest::new(component, enabled))
            .await
    }

    /// Starts, stops or switches to an LED hardware instance.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an undecodable reply or a
    /// server-reported failure.
    pub async fn set_instance(&self, instance: i32, command: InstanceCommand) -> Result<()> {
        self.send(&InstanceRequest::new(instance, command)).await
    }
}

fn validate(priority: i32, origin: &str, duration: Option<i32>) -> Result<()> {
    if priority < 1 {
        return Err(ValueError::InvalidPriority(priority).into());
    }

    if origin.len() < 3 {
        return Err(ValueError::InvalidOrigin(origin.to_string()).into());
    }

    if let Some(duration) = duration {
        if duration < 0 {
            return Err(ValueError::InvalidDuration(duration).into());
        }
    }

    Ok(())
}
