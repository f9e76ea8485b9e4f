use crate::error::{Result, ScratchyError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_BEGIN: &str = "/**";
pub const DEFAULT_END: &str = "*/";
pub const DEFAULT_LINE: &str = "*";
pub const DEFAULT_STRIP: &str = " ";
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Comment markers that drive the block parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Markers {
    /// Opens a comment block; must be followed by the `@scratch` tag
    #[serde(default = "default_begin")]
    pub begin: String,

    /// Closes a comment block
    #[serde(default = "default_end")]
    pub end: String,

    /// Starts every captured line inside a block
    #[serde(default = "default_line")]
    pub line: String,

    /// Removed once from the start of a line, after the line marker
    #[serde(default = "default_strip")]
    pub strip: String,

    /// Turn `\/` into `/`
    #[serde(default)]
    pub unslash: bool,
}

fn default_begin() -> String {
    DEFAULT_BEGIN.to_string()
}

fn default_end() -> String {
    DEFAULT_END.to_string()
}

fn default_line() -> String {
    DEFAULT_LINE.to_string()
}

fn default_strip() -> String {
    DEFAULT_STRIP.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            begin: default_begin(),
            end: default_end(),
            line: default_line(),
            strip: default_strip(),
            unslash: false,
        }
    }
}

/// Everything one extraction run needs.
///
/// Can be built in code, or loaded from a JSON file where every field but
/// `pattern` and `output` is optional. `pattern` accepts a single string or a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    #[serde(default, deserialize_with = "one_or_many")]
    pub pattern: Vec<String>,

    #[serde(default)]
    pub output: PathBuf,

    #[serde(flatten)]
    pub markers: Markers,

    /// Extension, with leading dot, added to written documents
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            pattern: Vec::new(),
            output: PathBuf::new(),
            markers: Markers::default(),
            extension: default_extension(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(pattern) => vec![pattern],
        OneOrMany::Many(patterns) => patterns,
    })
}

impl ExtractConfig {
    pub fn new<P: Into<PathBuf>>(pattern: Vec<String>, output: P) -> Self {
        Self {
            pattern,
            output: output.into(),
            ..Self::default()
        }
    }

    /// Load a config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ScratchyError::file(path, e))?;
        let config: ExtractConfig =
            serde_json::from_str(&content).map_err(ScratchyError::Serialization)?;
        Ok(config)
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// Checks the fields the pipeline cannot run without.
    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            return Err(ScratchyError::Config(
                "at least one pattern is required".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ScratchyError::Config(
                "an output directory is required".to_string(),
            ));
        }
        // An empty begin/end/line marker would match every line.
        for (name, value) in [
            ("begin", &self.markers.begin),
            ("end", &self.markers.end),
            ("line", &self.markers.line),
        ] {
            if value.is_empty() {
                return Err(ScratchyError::Config(format!(
                    "the {} marker cannot be empty",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_markers() {
        let markers = Markers::default();
        assert_eq!(markers.begin, "/**");
        assert_eq!(markers.end, "*/");
        assert_eq!(markers.line, "*");
        assert_eq!(markers.strip, " ");
        assert!(!markers.unslash);
    }

    #[test]
    fn test_default_extension() {
        let config = ExtractConfig::default();
        assert_eq!(config.extension, ".txt");
    }

    #[test]
    fn test_parse_minimal_json_fills_defaults() {
        let json = r#"{ "pattern": "src/**/*.js", "output": "docs" }"#;
        let config: ExtractConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.pattern, vec!["src/**/*.js".to_string()]);
        assert_eq!(config.output, PathBuf::from("docs"));
        assert_eq!(config.markers, Markers::default());
        assert_eq!(config.extension, ".txt");
    }

    #[test]
    fn test_parse_pattern_list_and_markers() {
        let json = r##"{
            "pattern": ["a/*.rs", "b/*.rs"],
            "output": "out",
            "begin": "//!",
            "end": "//.",
            "line": "//",
            "strip": "",
            "extension": ".asciidoc",
            "unslash": true
        }"##;
        let config: ExtractConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.pattern.len(), 2);
        assert_eq!(config.markers.begin, "//!");
        assert_eq!(config.markers.end, "//.");
        assert_eq!(config.markers.line, "//");
        assert_eq!(config.markers.strip, "");
        assert!(config.markers.unslash);
        assert_eq!(config.extension, ".asciidoc");
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scratchy.json");
        fs::write(&path, r#"{ "pattern": "*.js", "output": "docs", "unslash": true }"#).unwrap();

        let config = ExtractConfig::load(&path).unwrap();
        assert_eq!(config.pattern, vec!["*.js".to_string()]);
        assert!(config.markers.unslash);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        let err = ExtractConfig::load(&path).unwrap_err();
        assert!(matches!(err, ScratchyError::File { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ExtractConfig::load(&path).unwrap_err();
        assert!(matches!(err, ScratchyError::Serialization(_)));
    }

    #[test]
    fn test_validate_requires_pattern_and_output() {
        let config = ExtractConfig::default();
        assert!(config.validate().is_err());

        let config = ExtractConfig::new(vec!["*.js".into()], "");
        assert!(config.validate().is_err());

        let config = ExtractConfig::new(vec!["*.js".into()], "docs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_markers() {
        let markers = Markers {
            line: String::new(),
            ..Markers::default()
        };
        let config = ExtractConfig::new(vec!["*.js".into()], "docs").with_markers(markers);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("line marker"));
    }

    #[test]
    fn test_empty_strip_is_allowed() {
        let markers = Markers {
            strip: String::new(),
            ..Markers::default()
        };
        let config = ExtractConfig::new(vec!["*.js".into()], "docs").with_markers(markers);
        assert!(config.validate().is_ok());
    }
}
