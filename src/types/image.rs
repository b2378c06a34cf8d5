// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single image payload.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A single image to display, sent via
/// [`Client::set_image`](crate::Client::set_image).
///
/// The image data travels base64 encoded. When no format is set the
/// client defaults it to `"auto"`, letting the server detect the encoding.
///
/// # Examples
///
/// ```
/// use hyperion_lib::Image;
///
/// // From raw encoded bytes (e.g. a PNG file read from disk)
/// let image = Image::from_raw("logo", &[0x89, 0x50, 0x4E, 0x47]);
///
/// // From an already base64 encoded string, with an explicit format
/// let image = Image::from_base64("logo", "iVBORw0KGgo=").with_format("png");
/// assert_eq!(image.format.as_deref(), Some("png"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Base64 encoded image data.
    #[serde(rename = "imagedata")]
    pub data: String,

    /// Image format, e.g. `"png"`. `None` becomes `"auto"` when sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Display name of the image.
    pub name: String,
}

impl Image {
    /// Creates an image from already base64 encoded data.
    #[must_use]
    pub fn from_base64(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            format: None,
            name: name.into(),
        }
    }

    /// Creates an image from raw bytes, base64 encoding them.
    #[must_use]
    pub fn from_raw(name: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            data: STANDARD.encode(bytes),
            format: None,
            name: name.into(),
        }
    }

    /// Sets an explicit image format.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
