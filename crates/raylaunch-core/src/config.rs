// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::artifact::CollisionPolicy;
use crate::error::LaunchError;
use crate::profile::DEFAULT_PROFILE;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "Launcher.toml";

/// Represents the structure of the `Launcher.toml` file.
///
/// Every key is optional; missing keys take the defaults below.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Directory receiving the captured images.
    pub output_dir: PathBuf,
    /// Profile used when the command line names none.
    pub default_profile: String,
    /// Build tool executable. Falls back to `$CARGO`, then `cargo`.
    pub cargo: Option<PathBuf>,
    /// Forwarded to Cargo as `--package`.
    pub package: Option<String>,
    /// Forwarded to Cargo as `--manifest-path`.
    pub manifest_path: Option<PathBuf>,
    /// Example sources, relative to the manifest directory.
    pub examples_dir: PathBuf,
    pub create_output_dir: bool,
    pub on_collision: CollisionPolicy,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            default_profile: DEFAULT_PROFILE.to_string(),
            cargo: None,
            package: None,
            manifest_path: None,
            examples_dir: PathBuf::from("examples"),
            create_output_dir: false,
            on_collision: CollisionPolicy::Overwrite,
        }
    }
}

impl LauncherConfig {
    /// Loads the configuration from `path`.
    /// If the file does not exist, it returns the default configuration.
    pub fn load(path: &Path) -> Result<Self, LaunchError> {
        if !path.exists() {
            log::debug!("No '{}' found. Using default configuration.", path.display());
            return Ok(Self::default());
        }

        log::debug!("Found '{}'. Loading configuration.", path.display());
        let contents = fs::read_to_string(path).map_err(|e| LaunchError::io(path, e))?;
        Self::from_toml(&contents).map_err(|message| LaunchError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string().trim_end().to_string())
    }

    /// The Cargo executable to invoke.
    pub fn cargo_program(&self) -> PathBuf {
        self.cargo
            .clone()
            .or_else(|| env::var_os("CARGO").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("cargo"))
    }

    /// Directory holding the manifest, or the working directory.
    pub fn project_root(&self) -> PathBuf {
        self.manifest_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    pub fn examples_root(&self) -> PathBuf {
        self.project_root().join(&self.examples_dir)
    }
}
