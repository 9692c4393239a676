// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod plugin;
pub mod value;

pub use plugin::{ConfigError, PluginConfig};
