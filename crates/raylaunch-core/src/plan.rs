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

//! Turns a launch request into the concrete commands and output path.

use crate::artifact::{EpochSeconds, OutputPath};
use crate::config::LauncherConfig;
use crate::error::LaunchError;
use crate::messages::MESSAGE_FORMAT;
use crate::name::ExampleName;
use crate::profile::BuildProfile;
use crate::runner::ToolCommand;
use crate::variant::{Encoding, Variant};

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub variant: Variant,
    pub example: ExampleName,
    pub profile: Option<String>,
}

impl LaunchRequest {
    pub fn new(variant: Variant, example: ExampleName) -> Self {
        Self {
            variant,
            example,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// The external processes of a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchSteps {
    /// `cargo run`, which builds and runs in one go.
    Run(ToolCommand),
    /// `cargo build` emitting JSON messages, then the executable it reports.
    BuildThenRun(ToolCommand),
}

/// Everything needed to carry out one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub profile: BuildProfile,
    pub steps: LaunchSteps,
    pub output: OutputPath,
    pub encoding: Encoding,
}

impl LaunchPlan {
    pub fn new(
        request: &LaunchRequest,
        config: &LauncherConfig,
        timestamp: EpochSeconds,
    ) -> Result<Self, LaunchError> {
        let variant = request.variant;
        let profile =
            variant.resolve_profile(request.profile.as_deref(), &config.default_profile)?;
        let output = OutputPath::new(
            &config.output_dir,
            &request.example,
            timestamp,
            variant.extension(),
        );

        let steps = match variant {
            Variant::Ppm | Variant::Release => {
                LaunchSteps::Run(cargo(config, "run", &profile, &request.example))
            }
            Variant::Png => LaunchSteps::BuildThenRun(
                cargo(config, "build", &profile, &request.example).arg(MESSAGE_FORMAT),
            ),
        };

        Ok(Self {
            profile,
            steps,
            output,
            encoding: variant.encoding(),
        })
    }
}

fn cargo(
    config: &LauncherConfig,
    subcommand: &str,
    profile: &BuildProfile,
    example: &ExampleName,
) -> ToolCommand {
    let mut command = ToolCommand::new(config.cargo_program())
        .arg(subcommand)
        .args(profile.cargo_args())
        .args(["--example", example.as_str()]);
    if let Some(package) = &config.package {
        command = command.args(["--package", package.as_str()]);
    }
    if let Some(manifest) = &config.manifest_path {
        command = command.arg("--manifest-path").arg(manifest);
    }
    command
}
