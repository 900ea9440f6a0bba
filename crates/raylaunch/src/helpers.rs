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

use raylaunch_core::{LaunchError, Step, ToolCommand, ToolRunner};
use std::time::Instant;

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const BLUE: &str = "\x1b[34m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

// Visual symbols
pub const CHECK: &str = "✓";
pub const CROSS: &str = "✗";
pub const HAMMER: &str = "🔨";
pub const CAMERA: &str = "📷";
pub const MAGNIFIER: &str = "🔍";
pub const FRAME: &str = "🖼";

pub fn print_task_start(task_name: &str, emoji: &str, color: &str) {
    println!(
        "\n{}{}━━━ {} {} {}━━━{}",
        BOLD, color, emoji, task_name, emoji, RESET
    );
}

pub fn print_info(message: &str) {
    println!("{}💡 Info:{} {}", BOLD, RESET, message);
}

pub fn print_success(message: &str) {
    println!("{}{} {} {}{}", BOLD, GREEN, CHECK, message, RESET);
}

pub fn print_error(message: &str) {
    println!("{}{} {} {}{}", BOLD, RED, CROSS, message, RESET);
}

pub fn print_command_info(command: &ToolCommand) {
    println!("{}{}📋 Command:{} {}", BOLD, CYAN, RESET, command);
}

/// Wraps a [`ToolRunner`] and reports each command and its duration on the console.
#[derive(Debug)]
pub struct ConsoleRunner<R> {
    inner: R,
}

impl<R: ToolRunner> ConsoleRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    fn timed<T>(
        &self,
        command: &ToolCommand,
        step: Step,
        run: impl FnOnce(&R) -> Result<T, LaunchError>,
    ) -> Result<T, LaunchError> {
        let start_time = Instant::now();
        print_command_info(command);

        let result = run(&self.inner);
        let duration = start_time.elapsed();

        match &result {
            Ok(_) => print_success(&format!(
                "{} completed in {:.2}s",
                step,
                duration.as_secs_f64()
            )),
            Err(_) => print_error(&format!(
                "{} failed after {:.2}s",
                step,
                duration.as_secs_f64()
            )),
        }
        result
    }
}

impl<R: ToolRunner> ToolRunner for ConsoleRunner<R> {
    fn capture(&self, command: &ToolCommand, step: Step) -> Result<Vec<u8>, LaunchError> {
        self.timed(command, step, |inner| inner.capture(command, step))
    }
}

/// Human-readable byte count, e.g. `1.50 KB`.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let size = bytes as f64;
    if size >= KB * KB {
        format!("{:.2} MB", size / (KB * KB))
    } else if size >= KB {
        format!("{:.2} KB", size / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl ToolRunner for Echo {
        fn capture(&self, command: &ToolCommand, step: Step) -> Result<Vec<u8>, LaunchError> {
            match step {
                Step::Build => Ok(command.args_lossy().join(" ").into_bytes()),
                Step::Run => Err(LaunchError::ToolFailed {
                    step,
                    code: Some(4),
                }),
            }
        }
    }

    #[test]
    fn console_runner_passes_results_through() {
        let runner = ConsoleRunner::new(Echo);
        let command = ToolCommand::new("cargo").arg("build");

        assert_eq!(runner.capture(&command, Step::Build).unwrap(), b"build");
        let err = runner.capture(&command, Step::Run).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn sizes_are_human_readable() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
