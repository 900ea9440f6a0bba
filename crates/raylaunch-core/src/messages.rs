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

//! Reads the JSON messages `cargo build --message-format=json-render-diagnostics`
//! prints on stdout.
//!
//! Cargo knows where it put the compiled example (workspace target dir,
//! `build.target-dir`, `--target` triples), so the path is taken from its
//! `compiler-artifact` message instead of being guessed.

use crate::error::LaunchError;
use crate::name::ExampleName;
use serde::Deserialize;
use std::path::PathBuf;

/// Message format that keeps diagnostics human-readable on stderr.
pub const MESSAGE_FORMAT: &str = "--message-format=json-render-diagnostics";

#[derive(Deserialize, Debug)]
struct Message {
    reason: String,
    #[serde(default)]
    target: Option<Target>,
    #[serde(default)]
    executable: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
struct Target {
    name: String,
    #[serde(default)]
    kind: Vec<String>,
}

/// Finds the executable Cargo produced for `example` in its build output.
pub fn find_example_executable(
    stdout: &[u8],
    example: &ExampleName,
) -> Result<PathBuf, LaunchError> {
    let mut executable = None;

    for line in stdout.split(|b| *b == b'\n') {
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let message: Message = match serde_json::from_slice(line) {
            Ok(message) => message,
            Err(e) => {
                log::trace!("Skipping non-JSON build output line: {}", e);
                continue;
            }
        };
        if message.reason != "compiler-artifact" {
            continue;
        }
        let is_example = message.target.as_ref().is_some_and(|target| {
            target.name == example.as_str() && target.kind.iter().any(|kind| kind == "example")
        });
        if is_example && message.executable.is_some() {
            executable = message.executable;
        }
    }

    match executable {
        Some(path) => {
            log::debug!("Cargo built '{}' at '{}'", example, path.display());
            Ok(path)
        }
        None => Err(LaunchError::ExecutableNotFound(example.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> ExampleName {
        ExampleName::parse("earth").unwrap()
    }

    const BUILD_OUTPUT: &str = concat!(
        r#"{"reason":"compiler-artifact","package_id":"rand 0.8.5","target":{"kind":["lib"],"crate_types":["lib"],"name":"rand","src_path":"/src/lib.rs"},"executable":null,"fresh":true}"#,
        "\n",
        r#"{"reason":"compiler-artifact","package_id":"ray-tracing-one-weekend 0.1.0","target":{"kind":["example"],"crate_types":["bin"],"name":"earth","src_path":"/ws/ray-tracing-one-weekend/examples/earth.rs"},"profile":{"opt_level":"3"},"executable":"/ws/target/dev-raytrace/examples/earth","fresh":false}"#,
        "\n",
        r#"{"reason":"build-finished","success":true}"#,
        "\n"
    );

    #[test]
    fn picks_example_executable_from_workspace_target() {
        let path = find_example_executable(BUILD_OUTPUT.as_bytes(), &earth()).unwrap();
        assert_eq!(path, PathBuf::from("/ws/target/dev-raytrace/examples/earth"));
    }

    #[test]
    fn ignores_other_targets_and_noise() {
        let output = format!("warning: not json\n\n{}", BUILD_OUTPUT);
        let quads = ExampleName::parse("quads").unwrap();

        assert!(find_example_executable(output.as_bytes(), &earth()).is_ok());
        assert!(matches!(
            find_example_executable(output.as_bytes(), &quads),
            Err(LaunchError::ExecutableNotFound(name)) if name == "quads"
        ));
    }

    #[test]
    fn empty_output_has_no_executable() {
        assert!(matches!(
            find_example_executable(b"", &earth()),
            Err(LaunchError::ExecutableNotFound(_))
        ));
    }
}
