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

use crate::helpers::*;
use anyhow::{Context, Result};
use raylaunch_core::{LaunchRequest, Launcher, LauncherConfig, ProcessRunner, Variant};
use std::time::Instant;

pub fn launch(config: LauncherConfig, request: LaunchRequest) -> Result<()> {
    let (emoji, color, info) = match request.variant {
        Variant::Ppm => (
            CAMERA,
            BLUE,
            "Running the example with `cargo run` and saving stdout as PPM text",
        ),
        Variant::Release => (
            CAMERA,
            MAGENTA,
            "Running the example optimized (--release) and saving stdout as PPM text",
        ),
        Variant::Png => (
            HAMMER,
            YELLOW,
            "Building the example, then saving the binary's stdout as PNG bytes",
        ),
    };
    print_task_start(&format!("Rendering {}", request.example), emoji, color);
    print_info(info);

    let start_time = Instant::now();
    let launcher = Launcher::new(config, ConsoleRunner::new(ProcessRunner));
    let artifact = launcher
        .launch(&request)
        .with_context(|| format!("Failed to render example '{}'", request.example))?;

    print_success(&format!(
        "{} Saved '{}' ({}) in {:.2}s",
        FRAME,
        artifact.path.display(),
        format_size(artifact.bytes_written),
        start_time.elapsed().as_secs_f64()
    ));
    Ok(())
}
