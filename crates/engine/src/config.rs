use crate::error::EngineError;
use crate::options::{OutputFormat, OutputMode, SortKey};
use derive_builder::Builder;
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["cc", "hh"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    pub root: PathBuf,
    #[builder(default)]
    pub recursive: bool,
    /// Honor `.gitignore`/`.ignore` files and skip hidden entries.
    #[builder(default)]
    pub respect_ignore: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            recursive: false,
            respect_ignore: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct FilterConfig {
    /// File name suffixes without the leading dot (`cc`, not `.cc`).
    /// A leading dot is tolerated and stripped when matching.
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl FilterConfig {
    /// Suffixes in the `.ext` form used for matching against file names.
    pub fn suffixes(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| format!(".{}", normalize_extension(e)))
            .collect()
    }
}

impl FilterConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.extensions {
            Some(exts) => validate_extensions(exts),
            None => Ok(()),
        }
    }
}

fn normalize_extension(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

fn validate_extensions(exts: &[String]) -> Result<(), String> {
    if exts.is_empty() {
        return Err("at least one extension is required".to_string());
    }
    if let Some(bad) = exts.iter().find(|e| normalize_extension(e).is_empty()) {
        return Err(format!("empty extension: '{bad}'"));
    }
    Ok(())
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    #[builder(default)]
    pub filter: FilterConfig,

    #[builder(default = "true")]
    pub count_non_blank: bool,

    /// `None` keeps the order in which the directory listing returned entries.
    #[builder(default = "Some(SortKey::Name)")]
    pub sort: Option<SortKey>,
    #[builder(default)]
    pub descending: bool,

    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_mode: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            filter: FilterConfig::default(),
            count_non_blank: true,
            sort: Some(SortKey::Name),
            descending: false,
            format: OutputFormat::default(),
            output_mode: OutputMode::default(),
        }
    }
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.filter {
            Some(filter) => validate_extensions(&filter.extensions),
            None => Ok(()),
        }
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(e: ConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<FilterConfigBuilderError> for EngineError {
    fn from(e: FilterConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<WalkOptionsBuilderError> for EngineError {
    fn from(e: WalkOptionsBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}
