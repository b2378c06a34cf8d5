// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color calibration adjustment.

use serde::{Deserialize, Serialize};

/// Color calibration values.
///
/// Every field is optional; only set fields are transmitted, so a partial
/// adjustment updates just those values on the server. The same shape is
/// returned inside [`ServerInfo`](crate::ServerInfo) for each LED hardware
/// instance.
///
/// # Examples
///
/// ```
/// use hyperion_lib::Adjustment;
///
/// let adjustment = Adjustment {
///     backlight_colored: Some(true),
///     green: Some([0, 236, 0]),
///     ..Adjustment::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Adjustment {
    /// Keep color information in the backlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlight_colored: Option<bool>,

    /// Backlight threshold percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlight_threshold: Option<i32>,

    /// Overall brightness percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<i32>,

    /// Brightness compensation percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_compensation: Option<i32>,

    /// Brightness gain factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness_gain: Option<f64>,

    /// Calibrated blue channel as `[R, G, B]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue: Option<[u8; 3]>,

    /// Calibrated cyan channel as `[R, G, B]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cyan: Option<[u8; 3]>,

    /// Gamma curve for the blue channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma_blue: Option<f64>,

    /// Gamma curve for the green channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma_green: Option<f64>,

    /// Gamma curve for the red channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma_red: Option<f64>,

    /// Calibrated green channel as `[R, G, B]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<[u8; 3]>,

    /// Identifier of the adjustment profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Calibrated magenta channel as `[R, G, B]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magenta: Option<[u8; 3]>,

    /// Calibrated red channel as `[R, G, B]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<[u8; 3]>,

    /// Saturation gain factor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation_gain: Option<f64>,

    /// Calibrated white channel as `[R, G, B]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white: Option<[u8; 3]>,

    /// Calibrated yellow channel as `[R, G, B]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yellow: Option<[u8; 3]>,
}
