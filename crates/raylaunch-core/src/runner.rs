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

//! External process execution.
//!
//! [`ToolRunner`] is the seam between the launch sequence and the operating
//! system. [`ProcessRunner`] is the real implementation; tests substitute a
//! scripted one.

use crate::error::{LaunchError, Step};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// One external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Arguments as lossy strings, handy for display and assertions.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Runs external processes on behalf of the launcher.
pub trait ToolRunner {
    /// Runs `command` to completion and returns everything it wrote to stdout.
    /// Stderr stays attached to the terminal.
    fn capture(&self, command: &ToolCommand, step: Step) -> Result<Vec<u8>, LaunchError>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn capture(&self, command: &ToolCommand, step: Step) -> Result<Vec<u8>, LaunchError> {
        (**self).capture(command, step)
    }
}

/// Spawns real child processes and blocks until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    fn spawn_error(command: &ToolCommand, source: std::io::Error) -> LaunchError {
        LaunchError::Spawn {
            program: command.program.display().to_string(),
            source,
        }
    }

    fn check(status: ExitStatus, step: Step) -> Result<(), LaunchError> {
        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::ToolFailed {
                step,
                code: status.code(),
            })
        }
    }
}

impl ToolRunner for ProcessRunner {
    fn capture(&self, command: &ToolCommand, step: Step) -> Result<Vec<u8>, LaunchError> {
        log::debug!("{} step (capturing stdout): {}", step, command);
        let output = command
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| Self::spawn_error(command, e))?;
        Self::check(output.status, step)?;
        log::debug!("Captured {} bytes from stdout", output.stdout.len());
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_program_and_args() {
        let command = ToolCommand::new("cargo").args(["run", "--example", "ch01"]);
        assert_eq!(command.to_string(), "cargo run --example ch01");
        assert_eq!(command.args_lossy(), ["run", "--example", "ch01"]);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let command = ToolCommand::new("raylaunch-definitely-not-a-real-program");
        let err = ProcessRunner.capture(&command, Step::Run).unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn capture_returns_raw_stdout() {
        let command = ToolCommand::new("sh").args(["-c", "printf 'P3\\n1 1\\n255\\n\\377'"]);
        let stdout = ProcessRunner.capture(&command, Step::Run).unwrap();
        assert_eq!(stdout, b"P3\n1 1\n255\n\xff");
    }

    #[cfg(unix)]
    #[test]
    fn failing_child_reports_its_exit_code() {
        let command = ToolCommand::new("sh").args(["-c", "exit 3"]);
        let err = ProcessRunner.capture(&command, Step::Build).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::ToolFailed {
                step: Step::Build,
                code: Some(3)
            }
        ));
        assert_eq!(err.exit_code(), 3);
    }
}
