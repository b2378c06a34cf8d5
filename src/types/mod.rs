// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domain types exchanged with the Hyperion server.
//!
//! These are the payload shapes carried inside the JSON-RPC envelope:
//! named effects, single images, color calibration adjustments, and the
//! enumerated mode switches.

mod adjustment;
mod effect;
mod image;
mod modes;

pub use adjustment::Adjustment;
pub use effect::Effect;
pub use image::Image;
pub use modes::{InstanceCommand, LedMappingMode, VideoMode};
