// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named effect descriptor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named effect, optionally with overridden arguments.
///
/// Used both to start an effect via
/// [`Client::set_effect`](crate::Client::set_effect) and as part of the
/// effect list in [`ServerInfo`](crate::ServerInfo).
///
/// # Examples
///
/// ```
/// use hyperion_lib::Effect;
///
/// let effect = Effect::new("Blue mood blobs")
///     .with_arg("color-end", vec![200, 200, 200]);
///
/// assert_eq!(effect.name, "Blue mood blobs");
/// assert!(effect.args.contains_key("color-end"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect name as registered on the server.
    pub name: String,

    /// Optional argument overrides for the effect script.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub args: HashMap<String, serde_json::Value>,

    /// Path of the effect definition file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Path of the effect script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl Effect {
    /// Creates an effect referring to the given server-side name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds an argument override.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Sets the effect definition file path.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the effect script path.
    #[must_use]
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Whether this is a user-created effect (definition file under an
    /// absolute path).
    #[must_use]
    pub fn is_user_provided(&self) -> bool {
        self.file.as_deref().is_some_and(|f| f.starts_with('/'))
    }

    /// Whether this effect ships with the server (definition file under
    /// the `:` resource prefix).
    #[must_use]
    pub fn is_system_provided(&self) -> bool {
        self.file.as_deref().is_some_and(|f| f.starts_with(':'))
    }
}
