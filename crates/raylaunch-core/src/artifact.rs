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

//! Naming and writing of the captured image files.

use crate::error::LaunchError;
use crate::name::ExampleName;
use crate::variant::Encoding;
use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Whole seconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EpochSeconds(i64);

impl EpochSeconds {
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EpochSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `<output_dir>/<example>-<epoch>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath(PathBuf);

impl OutputPath {
    pub fn new(
        output_dir: &Path,
        example: &ExampleName,
        timestamp: EpochSeconds,
        extension: &str,
    ) -> Self {
        Self(output_dir.join(format!("{}-{}.{}", example, timestamp, extension)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for OutputPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// What to do when the output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Replace the existing file.
    #[default]
    Overwrite,
    /// Leave the existing file alone and report a collision.
    Fail,
}

/// A written output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Makes sure `dir` is a directory, creating it only when `create` is set.
pub fn ensure_output_dir(dir: &Path, create: bool) -> Result<(), LaunchError> {
    if dir.is_dir() {
        return Ok(());
    }
    if !create || dir.exists() {
        return Err(LaunchError::OutputDirMissing(dir.to_path_buf()));
    }
    log::info!("Creating output directory '{}'", dir.display());
    fs::create_dir_all(dir).map_err(|e| LaunchError::io(dir, e))
}

/// Persists the captured stream at `path` without transforming it.
pub fn write_artifact(
    path: &OutputPath,
    captured: &[u8],
    encoding: Encoding,
    policy: CollisionPolicy,
) -> Result<Artifact, LaunchError> {
    let bytes = encoding.prepare(captured);
    let path = path.as_path();

    let mut options = OpenOptions::new();
    options.write(true);
    match policy {
        CollisionPolicy::Overwrite => {
            options.create(true).truncate(true);
        }
        CollisionPolicy::Fail => {
            options.create_new(true);
        }
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            LaunchError::Collision(path.to_path_buf())
        } else {
            LaunchError::io(path, e)
        }
    })?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| LaunchError::io(path, e))?;

    log::debug!("Wrote {} bytes to '{}'", bytes.len(), path.display());
    Ok(Artifact {
        path: path.to_path_buf(),
        bytes_written: bytes.len(),
    })
}
