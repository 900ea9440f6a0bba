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

//! The three launch modes and the output encoding each one implies.

use crate::error::LaunchError;
use crate::profile::BuildProfile;
use std::fmt;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// How captured output is written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8 text, written as produced.
    Text,
    /// Raw bytes, written as produced.
    Binary,
}

impl Encoding {
    /// Returns the bytes to persist, always exactly as captured.
    ///
    /// Text that is not valid UTF-8 is still written; it only logs a warning.
    pub fn prepare<'a>(&self, captured: &'a [u8]) -> &'a [u8] {
        if let Encoding::Text = self {
            if let Err(e) = std::str::from_utf8(captured) {
                log::warn!(
                    "Captured text output is not valid UTF-8 ({}); writing it unchanged",
                    e
                );
            }
        }
        captured
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `cargo run` under a chosen profile, saved as PPM text.
    Ppm,
    /// `cargo run --release`, saved as PPM text. Takes no profile.
    Release,
    /// `cargo build` then the compiled binary, saved as raw PNG bytes.
    Png,
}

impl Variant {
    pub fn extension(self) -> &'static str {
        match self {
            Variant::Ppm | Variant::Release => "ppm",
            Variant::Png => "png",
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Variant::Ppm | Variant::Release => Encoding::Text,
            Variant::Png => Encoding::Binary,
        }
    }

    pub fn accepts_profile(self) -> bool {
        !matches!(self, Variant::Release)
    }

    /// Picks the build profile for this variant.
    ///
    /// The release variant always builds optimized; a requested profile is ignored.
    pub fn resolve_profile(
        self,
        requested: Option<&str>,
        default: &str,
    ) -> Result<BuildProfile, LaunchError> {
        if !self.accepts_profile() {
            if let Some(requested) = requested {
                log::warn!(
                    "Ignoring profile '{}': the release variant always builds with --release",
                    requested
                );
            }
            return Ok(BuildProfile::Release);
        }
        BuildProfile::named(requested.unwrap_or(default))
    }

    /// Whether `captured` starts like the image format this variant saves.
    ///
    /// The renderers emit `P3`; binary `P6` is tolerated, not expected.
    pub fn matches_signature(self, captured: &[u8]) -> bool {
        match self {
            Variant::Ppm | Variant::Release => {
                captured.starts_with(b"P3") || captured.starts_with(b"P6")
            }
            Variant::Png => captured.starts_with(PNG_SIGNATURE),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Ppm => f.write_str("ppm"),
            Variant::Release => f.write_str("release"),
            Variant::Png => f.write_str("png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DEFAULT_PROFILE;

    #[test]
    fn extensions_and_encodings() {
        assert_eq!(Variant::Ppm.extension(), "ppm");
        assert_eq!(Variant::Release.extension(), "ppm");
        assert_eq!(Variant::Png.extension(), "png");
        assert_eq!(Variant::Ppm.encoding(), Encoding::Text);
        assert_eq!(Variant::Release.encoding(), Encoding::Text);
        assert_eq!(Variant::Png.encoding(), Encoding::Binary);
    }

    #[test]
    fn release_variant_ignores_requested_profile() {
        let profile = Variant::Release
            .resolve_profile(Some("dev"), DEFAULT_PROFILE)
            .unwrap();
        assert_eq!(profile, BuildProfile::Release);
    }

    #[test]
    fn other_variants_fall_back_to_default_profile() {
        let profile = Variant::Ppm.resolve_profile(None, DEFAULT_PROFILE).unwrap();
        assert_eq!(profile, BuildProfile::Named("dev-raytrace".into()));

        let profile = Variant::Png.resolve_profile(Some("release"), DEFAULT_PROFILE).unwrap();
        assert_eq!(profile, BuildProfile::Named("release".into()));
    }

    #[test]
    fn text_encoding_keeps_non_utf8_bytes() {
        let ascii = b"P3\n1 1\n255\n0 0 0\n";
        assert_eq!(Encoding::Text.prepare(ascii), ascii);

        let binary_ppm = b"P6\n1 1\n255\n\xff\x80\x00";
        assert_eq!(Encoding::Text.prepare(binary_ppm), binary_ppm);
    }

    #[test]
    fn binary_encoding_passes_bytes_through() {
        let bytes = [0x89, 0xff, 0x00, 0x0a];
        assert_eq!(Encoding::Binary.prepare(&bytes), &bytes);
    }

    #[test]
    fn signature_sniffing() {
        assert!(Variant::Ppm.matches_signature(b"P3\n2 2\n255\n"));
        assert!(Variant::Release.matches_signature(b"P6\n2 2\n255\n"));
        assert!(!Variant::Ppm.matches_signature(b"hello"));
        assert!(Variant::Png.matches_signature(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"));
        assert!(!Variant::Png.matches_signature(b"P3\n"));
    }
}
