// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Live server state returned by the `serverinfo` command.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::{Adjustment, Effect};

/// Components that the server refuses to enable or disable at runtime.
const NON_SWITCHABLE_COMPONENTS: [&str; 5] =
    ["color", "effect", "image", "flatbufserver", "protoserver"];

/// Live state of the Hyperion server.
///
/// Returned by [`Client::server_info`](crate::Client::server_info). Fields
/// missing from the server reply decode to their empty defaults, so the
/// same shape works across server versions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerInfo {
    /// Effects currently running.
    #[serde(rename = "activeEffects")]
    pub active_effects: Vec<ActiveEffect>,

    /// Static colors currently shown, as raw value objects.
    #[serde(rename = "activeLedColor")]
    pub active_led_color: Vec<serde_json::Value>,

    /// Components and their enabled state.
    pub components: Vec<Component>,

    /// Color calibration per LED hardware instance.
    #[serde(rename = "adjustment")]
    pub adjustments: Vec<Adjustment>,

    /// Effects known to the server.
    pub effects: Vec<Effect>,

    /// Active LED mapping mode.
    #[serde(rename = "imageToLedMappingType")]
    pub image_to_led_mapping_type: String,

    /// Active video mode.
    #[serde(rename = "videomode")]
    pub video_mode: String,

    /// Registered priority sources.
    pub priorities: Vec<PrioritySource>,

    /// Whether the visible source is selected automatically.
    #[serde(rename = "priorities_autoselect")]
    pub priorities_autoselect: bool,

    /// LED hardware instances and their state.
    #[serde(rename = "instance")]
    pub instances: Vec<Instance>,

    /// Grabber availability by kind.
    pub grabbers: Grabbers,

    /// LED device driver availability.
    #[serde(rename = "ledDevices")]
    pub led_devices: LedDevices,

    /// Physical LED layout.
    pub leds: Vec<Led>,

    /// Advertised network services.
    pub services: Vec<String>,
}

impl ServerInfo {
    /// Returns the user-created effects.
    #[must_use]
    pub fn user_effects(&self) -> Vec<&Effect> {
        self.effects.iter().filter(|e| e.is_user_provided()).collect()
    }

    /// Returns the effects shipped with the server.
    #[must_use]
    pub fn system_effects(&self) -> Vec<&Effect> {
        self.effects.iter().filter(|e| e.is_system_provided()).collect()
    }

    /// Finds an instance by id.
    #[must_use]
    pub fn find_instance(&self, instance: i32) -> Option<&Instance> {
        self.instances.iter().find(|i| i.instance == instance)
    }
}

/// A component of the server and its enabled state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Component {
    /// Whether the component is currently enabled.
    pub enabled: bool,

    /// Component identifier, e.g. `LEDDEVICE` or `SMOOTHING`.
    pub name: String,
}

impl Component {
    /// Whether the component can be enabled or disabled at runtime via
    /// [`Client::set_component_state`](crate::Client::set_component_state).
    #[must_use]
    pub fn switchable(&self) -> bool {
        let name = self.name.to_lowercase();
        !NON_SWITCHABLE_COMPONENTS.contains(&name.as_str())
    }
}

/// An effect that is currently running.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActiveEffect {
    /// Script path of the effect.
    pub script: String,

    /// Effect name.
    pub name: String,

    /// Priority the effect runs at.
    pub priority: i32,

    /// Remaining runtime in milliseconds, negative for endless.
    pub timeout: i32,

    /// Arguments the effect was started with.
    pub args: HashMap<String, serde_json::Value>,
}

/// A registered priority source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrioritySource {
    /// Whether the source is registered and sending data.
    pub active: bool,

    /// Whether the source is currently shown.
    pub visible: bool,

    /// Component that owns the source.
    #[serde(rename = "componentId")]
    pub component_id: String,

    /// Origin string the source registered with.
    pub origin: String,

    /// Human readable owner description.
    pub owner: String,

    /// Priority level of the source.
    pub priority: i32,

    /// Current color value, when the source is a static color.
    pub value: PriorityValue,

    /// Remaining duration in milliseconds.
    #[serde(rename = "duration_ms")]
    pub duration: i32,
}

/// Color value of a static-color priority source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriorityValue {
    /// Color in HSL space.
    #[serde(rename = "HSL")]
    pub hsl: Vec<f64>,

    /// Color in RGB space.
    #[serde(rename = "RGB")]
    pub rgb: Vec<u8>,
}

/// An LED hardware instance and its state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Instance {
    /// Instance id.
    pub instance: i32,

    /// Whether the instance is running.
    pub running: bool,

    /// Display name of the instance.
    #[serde(rename = "friendly_name")]
    pub name: String,
}

/// Grabber state grouped by kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Grabbers {
    /// Audio grabbers.
    pub audio: Grabber,

    /// Screen grabbers.
    pub screen: Grabber,

    /// Video grabbers.
    pub video: Grabber,
}

/// Active and available grabbers of one kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Grabber {
    /// Currently active grabbers.
    pub active: Vec<String>,

    /// Grabbers available on this system.
    pub available: Vec<String>,
}

/// Available LED device drivers.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LedDevices {
    /// Driver names the server was built with.
    pub available: Vec<String>,
}

/// Position of a single LED in scan-area coordinates.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Led {
    /// Left edge of the scan area, 0.0 to 1.0.
    pub hmin: f64,

    /// Right edge of the scan area, 0.0 to 1.0.
    pub hmax: f64,

    /// Top edge of the scan area, 0.0 to 1.0.
    pub vmin: f64,

    /// Bottom edge of the scan area, 0.0 to 1.0.
    pub vmax: f64,
}
