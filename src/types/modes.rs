// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enumerated mode switches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// LED mapping mode for the incoming image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedMappingMode {
    /// Simple mean color per LED.
    #[serde(rename = "multicolor_mean")]
    MulticolorMean,
    /// One mean color applied to all LEDs.
    #[serde(rename = "unicolor_mean")]
    UnicolorMean,
    /// Squared mean color per LED.
    #[serde(rename = "multicolor_mean_squared")]
    MulticolorMeanSquared,
    /// Dominant color per LED.
    #[serde(rename = "dominant_color")]
    DominantColor,
    /// Advanced dominant color per LED.
    #[serde(rename = "dominant_color_advanced")]
    DominantColorAdvanced,
}

impl LedMappingMode {
    /// Returns the wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MulticolorMean => "multicolor_mean",
            Self::UnicolorMean => "unicolor_mean",
            Self::MulticolorMeanSquared => "multicolor_mean_squared",
            Self::DominantColor => "dominant_color",
            Self::DominantColorAdvanced => "dominant_color_advanced",
        }
    }
}

impl fmt::Display for LedMappingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video mode of the incoming stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoMode {
    /// Plain 2D.
    #[serde(rename = "2D")]
    TwoD,
    /// 3D side-by-side.
    #[serde(rename = "3DSBS")]
    ThreeDSideBySide,
    /// 3D top-and-bottom.
    #[serde(rename = "3DTAB")]
    ThreeDTopAndBottom,
}

impl VideoMode {
    /// Returns the wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwoD => "2D",
            Self::ThreeDSideBySide => "3DSBS",
            Self::ThreeDTopAndBottom => "3DTAB",
        }
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subcommand of the `instance` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceCommand {
    /// Start the instance.
    #[serde(rename = "startInstance")]
    Start,
    /// Stop the instance.
    #[serde(rename = "stopInstance")]
    Stop,
    /// Switch API context to the instance.
    #[serde(rename = "switchTo")]
    SwitchTo,
}

impl InstanceCommand {
    /// Returns the wire name of the subcommand.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "startInstance",
            Self::Stop => "stopInstance",
            Self::SwitchTo => "switchTo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn mapping_mode_wire_names() {
        assert_eq!(
            serde_json::to_value(LedMappingMode::DominantColorAdvanced).unwrap(),
            json!("dominant_color_advanced")
        );
        assert_eq!(LedMappingMode::MulticolorMean.to_string(), "multicolor_mean");
    }

    #[test]
    fn video_mode_wire_names() {
        assert_eq!(serde_json::to_value(VideoMode::TwoD).unwrap(), json!("2D"));
        assert_eq!(
            serde_json::to_value(VideoMode::ThreeDSideBySide).unwrap(),
            json!("3DSBS")
        );
    }

    #[test]
    fn instance_command_wire_names() {
        assert_eq!(InstanceCommand::Start.as_str(), "startInstance");
        assert_eq!(InstanceCommand::Stop.as_str(), "stopInstance");
        assert_eq!(
            serde_json::to_value(InstanceCommand::SwitchTo).unwrap(),
            json!("switchTo")
        );
    }
}
