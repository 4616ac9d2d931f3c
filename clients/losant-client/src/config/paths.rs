// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Get the losant configuration directory
///
/// Priority:
/// 1. LOSANT_CONFIG_DIR environment variable
/// 2. Platform config dir (~/.config/losant/ on Linux)
/// 3. ~/.losant/
pub fn config_dir() -> PathBuf {
    config_dir_with(|name| std::env::var(name).ok())
}

/// [`config_dir`] with variables read through `lookup`
pub fn config_dir_with<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("LOSANT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("losant"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".losant")
        })
}

/// Get the path to the client config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}
