//! Conversion context shared by rendering and export
//!
//! `Config` replaces process-wide settings: it is passed by reference into
//! every render and export call and read at the moment of the call.

use bitflags::bitflags;
use std::path::{Path, PathBuf};

bitflags! {
    /// Document markers a given export call emits around its content
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "config-file", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "config-file", serde(transparent))]
    pub struct BracketSet: u8 {
        /// `\begin{document}`
        const BEGIN = 0b01;
        /// `\end{document}`
        const END = 0b10;
    }
}

/// Settings for rendering and exporting
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-file", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct Config {
    /// Add whitespace and newlines to generated markup
    pub pretty_printing: bool,
    /// Directory export targets are resolved against
    pub save_location: PathBuf,
    /// Bracket set used when an export call does not pass one
    pub default_brackets: BracketSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty_printing: false,
            save_location: PathBuf::from("."),
            default_brackets: BracketSet::empty(),
        }
    }
}

impl Config {
    /// Create a config with pretty printing enabled
    pub fn pretty() -> Self {
        Self {
            pretty_printing: true,
            ..Default::default()
        }
    }

    pub fn with_pretty_printing(mut self, pretty_printing: bool) -> Self {
        self.pretty_printing = pretty_printing;
        self
    }

    pub fn with_save_location(mut self, save_location: impl AsRef<Path>) -> Self {
        self.save_location = save_location.as_ref().to_path_buf();
        self
    }

    pub fn with_default_brackets(mut self, brackets: BracketSet) -> Self {
        self.default_brackets = brackets;
        self
    }

    /// Full path of `filename` inside the save location
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.save_location.join(filename)
    }
}

/// Returns `text` under pretty printing and nothing otherwise
///
/// Used to compose markup by hand, e.g. a newline between two rendered
/// matrices that should only appear in pretty output.
pub fn pretty_print<'a>(text: &'a str, config: &Config) -> &'a str {
    if config.pretty_printing {
        text
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.pretty_printing);
        assert_eq!(config.save_location, PathBuf::from("."));
        assert!(config.default_brackets.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = Config::pretty()
            .with_save_location("out")
            .with_default_brackets(BracketSet::BEGIN | BracketSet::END);
        assert!(config.pretty_printing);
        assert_eq!(config.target_path("a.tex"), Path::new("out").join("a.tex"));
        assert!(config.default_brackets.contains(BracketSet::END));
    }

    #[test]
    fn test_pretty_print_helper() {
        assert_eq!(pretty_print("\n", &Config::pretty()), "\n");
        assert_eq!(pretty_print("\n", &Config::default()), "");
    }
}
