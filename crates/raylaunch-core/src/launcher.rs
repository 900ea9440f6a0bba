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

//! The build, run and persist sequence.

use crate::artifact::{ensure_output_dir, write_artifact, Artifact, EpochSeconds};
use crate::config::LauncherConfig;
use crate::discovery::discover_examples;
use crate::error::{LaunchError, Step};
use crate::messages::find_example_executable;
use crate::plan::{LaunchPlan, LaunchRequest, LaunchSteps};
use crate::runner::{ToolCommand, ToolRunner};

/// Builds an example, runs it and saves what it printed.
///
/// Each launch is one linear pass: plan, check the output directory, build,
/// run, write. The png variant runs the executable Cargo reports for the
/// example, wherever its target directory lives. The first failure ends the launch; nothing is retried.
#[derive(Debug)]
pub struct Launcher<R> {
    config: LauncherConfig,
    runner: R,
}

impl<R: ToolRunner> Launcher<R> {
    pub fn new(config: LauncherConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Launches with the timestamp taken now, before anything is built.
    pub fn launch(&self, request: &LaunchRequest) -> Result<Artifact, LaunchError> {
        self.launch_at(request, EpochSeconds::now())
    }

    pub fn launch_at(
        &self,
        request: &LaunchRequest,
        timestamp: EpochSeconds,
    ) -> Result<Artifact, LaunchError> {
        let plan = self.plan(request, timestamp)?;
        log::info!(
            "Launching example '{}' ({} variant, profile {}) -> {}",
            request.example,
            request.variant,
            plan.profile,
            plan.output
        );

        ensure_output_dir(&self.config.output_dir, self.config.create_output_dir)?;

        let captured = match &plan.steps {
            LaunchSteps::Run(run) => self.runner.capture(run, Step::Run)?,
            LaunchSteps::BuildThenRun(build) => {
                let messages = self.runner.capture(build, Step::Build)?;
                let executable = find_example_executable(&messages, &request.example)?;
                self.runner.capture(&ToolCommand::new(executable), Step::Run)?
            }
        };

        if !request.variant.matches_signature(&captured) {
            log::warn!(
                "Output of '{}' does not look like a {} image; saving it anyway",
                request.example,
                request.variant.extension()
            );
        }

        write_artifact(
            &plan.output,
            &captured,
            plan.encoding,
            self.config.on_collision,
        )
    }

    pub fn plan(
        &self,
        request: &LaunchRequest,
        timestamp: EpochSeconds,
    ) -> Result<LaunchPlan, LaunchError> {
        LaunchPlan::new(request, &self.config, timestamp)
    }

    pub fn examples(&self) -> Result<Vec<String>, LaunchError> {
        discover_examples(&self.config.examples_root())
    }
}
