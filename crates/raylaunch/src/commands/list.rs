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
use raylaunch_core::{Launcher, LauncherConfig, ProcessRunner};

pub fn list(config: LauncherConfig) -> Result<()> {
    print_task_start("Available Examples", MAGNIFIER, CYAN);

    let root = config.examples_root();
    let launcher = Launcher::new(config, ProcessRunner);
    let examples = launcher
        .examples()
        .with_context(|| format!("Failed to scan '{}'", root.display()))?;

    if examples.is_empty() {
        print_error(&format!("No examples found in '{}'.", root.display()));
        return Ok(());
    }

    for name in &examples {
        println!("  {}•{} {}", BOLD, RESET, name);
    }
    print_success(&format!(
        "{} examples found in '{}'",
        examples.len(),
        root.display()
    ));
    Ok(())
}
