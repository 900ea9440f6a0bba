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

//! Error type shared by every launch stage.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// The stage of a launch that ran an external process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Compiling the example.
    Build,
    /// Running the example and capturing its output.
    Run,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Build => f.write_str("Build"),
            Step::Run => f.write_str("Run"),
        }
    }
}

/// Errors raised while planning, running or persisting a launch.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Invalid {kind} name '{value}': {reason}")]
    InvalidName {
        kind: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Invalid configuration in '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Output directory '{}' does not exist", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("Failed to execute '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{step} step failed: {}", describe_exit(.code))]
    ToolFailed { step: Step, code: Option<i32> },

    #[error("Cargo reported no executable for example '{0}'")]
    ExecutableNotFound(String),

    #[error("Refusing to overwrite existing file '{}'", .0.display())]
    Collision(PathBuf),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code the launcher should terminate with.
    ///
    /// A failed external step hands its own code through unchanged. A child
    /// killed by a signal, or any failure owned by the launcher itself, maps to `1`.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchError::ToolFailed {
                code: Some(code), ..
            } => u8::try_from(*code)
                .ok()
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    }
}
