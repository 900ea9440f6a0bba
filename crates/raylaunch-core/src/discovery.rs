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

use crate::error::LaunchError;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the examples Cargo would auto-discover under `examples_dir`.
///
/// That is every `*.rs` file directly inside it, plus every sub-directory
/// holding a `main.rs`. Shared helper directories without `main.rs` are
/// skipped. A missing directory yields an empty list.
pub fn discover_examples(examples_dir: &Path) -> Result<Vec<String>, LaunchError> {
    if !examples_dir.is_dir() {
        log::debug!(
            "Examples directory '{}' not found",
            examples_dir.display()
        );
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(examples_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| LaunchError::io(examples_dir, io::Error::from(e)))?;
        let path = entry.path();

        let name = if entry.file_type().is_file() {
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }
            path.file_stem()
        } else if entry.file_type().is_dir() && path.join("main.rs").is_file() {
            path.file_name()
        } else {
            None
        };

        if let Some(name) = name.and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }

    names.sort();
    names.dedup();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_files_and_main_directories() {
        let dir = tempdir().unwrap();
        let examples = dir.path();
        fs::write(examples.join("quads.rs"), "fn main() {}").unwrap();
        fs::write(examples.join("bouncing_spheres.rs"), "fn main() {}").unwrap();
        fs::write(examples.join("README.md"), "# examples").unwrap();
        fs::create_dir(examples.join("common")).unwrap();
        fs::write(examples.join("common").join("mod.rs"), "").unwrap();
        fs::create_dir(examples.join("final_scene")).unwrap();
        fs::write(examples.join("final_scene").join("main.rs"), "fn main() {}").unwrap();

        let found = discover_examples(examples).unwrap();

        assert_eq!(found, ["bouncing_spheres", "final_scene", "quads"]);
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let found = discover_examples(&dir.path().join("examples")).unwrap();
        assert!(found.is_empty());
    }
}
