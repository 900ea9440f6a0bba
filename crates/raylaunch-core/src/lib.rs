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

//! Core of `raylaunch`: builds a renderer example with Cargo, runs it, and
//! writes its standard output to `output/<example>-<epoch>.<ext>`.

#![warn(missing_debug_implementations)]

pub mod artifact;
pub mod config;
pub mod discovery;
pub mod error;
pub mod launcher;
pub mod messages;
pub mod name;
pub mod plan;
pub mod profile;
pub mod runner;
pub mod variant;

pub use artifact::{Artifact, CollisionPolicy, EpochSeconds, OutputPath};
pub use config::{LauncherConfig, CONFIG_FILE_NAME};
pub use error::{LaunchError, Step};
pub use launcher::Launcher;
pub use name::ExampleName;
pub use plan::{LaunchPlan, LaunchRequest, LaunchSteps};
pub use profile::{BuildProfile, DEFAULT_PROFILE};
pub use runner::{ProcessRunner, ToolCommand, ToolRunner};
pub use variant::{Encoding, Variant};
