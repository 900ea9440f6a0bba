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

// Renders a renderer example into output/<example>-<epoch>.<ext>
// Run with: raylaunch <ppm|release|png> <example> [profile]

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use helpers::print_error;
use raylaunch_core::{
    CollisionPolicy, ExampleName, LaunchError, LaunchRequest, LauncherConfig, Variant,
    CONFIG_FILE_NAME,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "raylaunch",
    version,
    about = "Builds and runs a renderer example, saving its output as a timestamped image",
    arg_required_else_help = true
)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options that override `Launcher.toml`.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Configuration file.
    #[arg(long, global = true, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Directory receiving the captured images.
    #[arg(long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Package containing the example.
    #[arg(short, long, global = true, value_name = "SPEC")]
    package: Option<String>,

    /// Path to the project's Cargo.toml.
    #[arg(long, global = true, value_name = "PATH")]
    manifest_path: Option<PathBuf>,

    /// Create the output directory if it does not exist.
    #[arg(long, global = true)]
    create_output_dir: bool,

    /// Fail instead of overwriting an image from the same second.
    #[arg(long, global = true)]
    no_clobber: bool,
}

impl ConfigArgs {
    fn load(&self) -> Result<LauncherConfig> {
        let mut config = LauncherConfig::load(&self.config).with_context(|| {
            format!(
                "Failed to load configuration from '{}'",
                self.config.display()
            )
        })?;

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.package.is_some() {
            config.package = self.package.clone();
        }
        if self.manifest_path.is_some() {
            config.manifest_path = self.manifest_path.clone();
        }
        if self.create_output_dir {
            config.create_output_dir = true;
        }
        if self.no_clobber {
            config.on_collision = CollisionPolicy::Fail;
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an example under a profile and save its stdout as PPM text.
    Ppm {
        example: ExampleName,
        /// Build profile [default: dev-raytrace, or `default_profile` from the config]
        profile: Option<String>,
    },
    /// Run an example with --release and save its stdout as PPM text.
    Release { example: ExampleName },
    /// Build an example, run the compiled binary and save its stdout as PNG bytes.
    Png {
        example: ExampleName,
        /// Build profile [default: dev-raytrace, or `default_profile` from the config]
        profile: Option<String>,
    },
    /// List the examples found in the project.
    List,
}

impl Commands {
    fn into_request(self) -> Option<LaunchRequest> {
        let (variant, example, profile) = match self {
            Commands::Ppm { example, profile } => (Variant::Ppm, example, profile),
            Commands::Release { example } => (Variant::Release, example, None),
            Commands::Png { example, profile } => (Variant::Png, example, profile),
            Commands::List => return None,
        };
        let mut request = LaunchRequest::new(variant, example);
        request.profile = profile;
        Some(request)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.overrides.load()?;
    log::debug!("Effective configuration: {:?}", config);

    match cli.command.into_request() {
        Some(request) => commands::launch::launch(config, request),
        None => commands::list::list(config),
    }
}

/// The child's own exit code when an external step failed, `1` otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<LaunchError>()
        .map_or(1, LaunchError::exit_code)
}

fn main() -> ExitCode {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::from(exit_code(&err))
        }
    }
}
