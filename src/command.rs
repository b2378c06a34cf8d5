// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outgoing request envelopes.
//!
//! Every request shares the flat [`Envelope`] base; command-specific
//! fields are merged at the same JSON level via `#[serde(flatten)]`.

use serde::Serialize;

use crate::types::{Adjustment, Effect, Image, InstanceCommand, LedMappingMode, VideoMode};

pub(crate) const CMD_COLOR: &str = "color";
pub(crate) const CMD_EFFECT: &str = "effect";
pub(crate) const CMD_IMAGE: &str = "image";
pub(crate) const CMD_CLEAR: &str = "clear";
pub(crate) const CMD_SOURCE_SELECT: &str = "sourceselect";
pub(crate) const CMD_ADJUSTMENT: &str = "adjustment";
pub(crate) const CMD_PROCESSING: &str = "processing";
pub(crate) const CMD_VIDEO_MODE: &str = "videomode";
pub(crate) const CMD_COMPONENT_STATE: &str = "componentstate";
pub(crate) const CMD_INSTANCE: &str = "instance";
pub(crate) const CMD_SERVER_INFO: &str = "serverinfo";
pub(crate) const CMD_SYSTEM_INFO: &str = "sysinfo";

/// Fields common to every request.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct Envelope {
    pub command: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcommand: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tan: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
}

impl Envelope {
    pub(crate) fn source(priority: i32, origin: &str, duration: Option<i32>) -> Self {
        Self {
            priority: Some(priority),
            origin: Some(origin.to_string()),
            duration,
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ColorRequest<'a> {
    #[serde(flatten)]
    envelope: Envelope,
    color: &'a [u8],
}

impl<'a> ColorRequest<'a> {
    pub(crate) fn new(color: &'a [u8], priority: i32, origin: &str, duration: Option<i32>) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_COLOR,
                ..Envelope::source(priority, origin, duration)
            },
            color,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EffectRequest<'a> {
    #[serde(flatten)]
    envelope: Envelope,
    effect: &'a Effect,
}

impl<'a> EffectRequest<'a> {
    pub(crate) fn new(
        effect: &'a Effect,
        priority: i32,
        origin: &str,
        duration: Option<i32>,
    ) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_EFFECT,
                ..Envelope::source(priority, origin, duration)
            },
            effect,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageRequest {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(flatten)]
    image: Image,
}

impl ImageRequest {
    pub(crate) fn new(image: Image, priority: i32, origin: &str, duration: Option<i32>) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_IMAGE,
                ..Envelope::source(priority, origin, duration)
            },
            image,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SourceAutoRequest {
    #[serde(flatten)]
    envelope: Envelope,
    auto: bool,
}

impl SourceAutoRequest {
    pub(crate) fn new() -> Self {
        Self {
            envelope: Envelope {
                command: CMD_SOURCE_SELECT,
                ..Envelope::default()
            },
            auto: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AdjustmentRequest<'a> {
    #[serde(flatten)]
    envelope: Envelope,
    adjustment: &'a Adjustment,
}

impl<'a> AdjustmentRequest<'a> {
    pub(crate) fn new(adjustment: &'a Adjustment) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_ADJUSTMENT,
                ..Envelope::default()
            },
            adjustment,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProcessingRequest {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(rename = "mappingType")]
    mapping_type: LedMappingMode,
}

impl ProcessingRequest {
    pub(crate) fn new(mapping_type: LedMappingMode) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_PROCESSING,
                ..Envelope::default()
            },
            mapping_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct VideoModeRequest {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(rename = "videoMode")]
    video_mode: VideoMode,
}

impl VideoModeRequest {
    pub(crate) fn new(video_mode: VideoMode) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_VIDEO_MODE,
                ..Envelope::default()
            },
            video_mode,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ComponentStateRequest<'a> {
    #[serde(flatten)]
    envelope: Envelope,
    componentstate: ComponentState<'a>,
}

#[derive(Debug, Serialize)]
struct ComponentState<'a> {
    component: &'a str,
    state: bool,
}

impl<'a> ComponentStateRequest<'a> {
    pub(crate) fn new(component: &'a str, state: bool) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_COMPONENT_STATE,
                ..Envelope::default()
            },
            componentstate: ComponentState { component, state },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct InstanceRequest {
    #[serde(flatten)]
    envelope: Envelope,
    instance: i32,
}

impl InstanceRequest {
    pub(crate) fn new(instance: i32, command: InstanceCommand) -> Self {
        Self {
            envelope: Envelope {
                command: CMD_INSTANCE,
                subcommand: Some(command.as_str()),
                ..Envelope::default()
            },
            instance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_request_shape() {
        let request = ColorRequest::new(&[0, 0, 0], 20, "test 1", None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"command": "color", "priority": 20, "origin": "test 1", "color": [0, 0, 0]})
        );
    }

    #[test]
    fn color_request_with_duration() {
        let request = ColorRequest::new(&[255, 0, 0], 50, "my app", Some(5000));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "command": "color",
                "priority": 50,
                "origin": "my app",
                "duration": 5000,
                "color": [255, 0, 0]
            })
        );
    }

    #[test]
    fn effect_request_shape() {
        let effect = Effect::new("Blue mood blobs").with_arg("color-end", vec![200, 200, 200]);
        let request = EffectRequest::new(&effect, 20, "test 1", Some(50));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "command": "effect",
                "priority": 20,
                "origin": "test 1",
                "duration": 50,
                "effect": {"name": "Blue mood blobs", "args": {"color-end": [200, 200, 200]}}
            })
        );
    }

    #[test]
    fn image_request_merges_fields_flat() {
        let image = Image::from_base64("pixel", "AAEC").with_format("auto");
        let request = ImageRequest::new(image, 20, "test 1", None);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "command": "image",
                "priority": 20,
                "origin": "test 1",
                "imagedata": "AAEC",
                "format": "auto",
                "name": "pixel"
            })
        );
    }

    #[test]
    fn clear_request_shape() {
        let request = Envelope {
            command: CMD_CLEAR,
            priority: Some(10),
            ..Envelope::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"command": "clear", "priority": 10})
        );
    }

    #[test]
    fn source_auto_request_shape() {
        assert_eq!(
            serde_json::to_value(SourceAutoRequest::new()).unwrap(),
            json!({"command": "sourceselect", "auto": true})
        );
    }

    #[test]
    fn adjustment_request_shape() {
        let adjustment = Adjustment {
            backlight_colored: Some(true),
            green: Some([0, 236, 0]),
            ..Adjustment::default()
        };
        let request = AdjustmentRequest::new(&adjustment);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "command": "adjustment",
                "adjustment": {"backlightColored": true, "green": [0, 236, 0]}
            })
        );
    }

    #[test]
    fn processing_request_shape() {
        let request = ProcessingRequest::new(LedMappingMode::DominantColorAdvanced);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"command": "processing", "mappingType": "dominant_color_advanced"})
        );
    }

    #[test]
    fn video_mode_request_shape() {
        let request = VideoModeRequest::new(VideoMode::ThreeDSideBySide);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"command": "videomode", "videoMode": "3DSBS"})
        );
    }

    #[test]
    fn component_state_request_shape() {
        let request = ComponentStateRequest::new("LEDDEVICE", true);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "command": "componentstate",
                "componentstate": {"component": "LEDDEVICE", "state": true}
            })
        );
    }

    #[test]
    fn instance_request_shape() {
        let request = InstanceRequest::new(0, InstanceCommand::SwitchTo);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"command": "instance", "subcommand": "switchTo", "instance": 0})
        );
    }

    #[test]
    fn info_request_shape() {
        let request = Envelope {
            command: CMD_SERVER_INFO,
            tan: Some(1),
            ..Envelope::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"command": "serverinfo", "tan": 1})
        );
    }
}
