//! Pipeline configuration.
//!
//! ```toml
//! [detector]
//! span_policy = "long"
//! passive_pattern = "nsubjpass"
//!
//! [aligner]
//! policy = "contained"
//!
//! [store]
//! dir = "obj"
//! format = "ron"
//! ```

use crate::{ObjectStore, PipelineError, PipelineResult, RoleMapper, StoreFormat};
use cframes::{AlignPolicy, RoleDetector, RolePatterns, SpanAligner, SpanPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a mapping run. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub detector: DetectorConfig,
    pub aligner: AlignerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub span_policy: SpanPolicy,
    pub subject_pattern: String,
    pub object_pattern: String,
    pub passive_pattern: String,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            span_policy: SpanPolicy::Short,
            subject_pattern: "subj".into(),
            object_pattern: "obj".into(),
            passive_pattern: "subj:?pass".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    pub policy: AlignPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory for stored objects
    pub dir: PathBuf,
    pub format: StoreFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("obj"),
            format: StoreFormat::Json,
        }
    }
}

impl MappingConfig {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> PipelineResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PipelineError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> PipelineResult<Self> {
        Self::parse(content, "<memory>")
    }

    fn parse(content: &str, path: &str) -> PipelineResult<Self> {
        toml::from_str(content).map_err(|e| PipelineError::Config {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Replace the configured policies where an override is given.
    pub fn override_policies(
        &mut self,
        span_policy: Option<SpanPolicy>,
        align_policy: Option<AlignPolicy>,
    ) {
        if let Some(policy) = span_policy {
            self.detector.span_policy = policy;
        }
        if let Some(policy) = align_policy {
            self.aligner.policy = policy;
        }
    }

    pub fn role_detector(&self) -> PipelineResult<RoleDetector> {
        let detector = &self.detector;
        let patterns = RolePatterns::new(
            &detector.subject_pattern,
            &detector.object_pattern,
            &detector.passive_pattern,
        )
        .map_err(|e| PipelineError::Pattern(e.to_string()))?;
        Ok(RoleDetector::new(patterns, detector.span_policy))
    }

    pub fn span_aligner(&self) -> SpanAligner {
        SpanAligner::new(self.aligner.policy)
    }

    pub fn role_mapper(&self) -> PipelineResult<RoleMapper> {
        Ok(RoleMapper::new(self.role_detector()?, self.span_aligner()))
    }

    pub fn object_store(&self) -> ObjectStore {
        ObjectStore::new(&self.store.dir, self.store.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_is_default() {
        let config = MappingConfig::from_toml_str("").unwrap();
        assert_eq!(config, MappingConfig::default());
        assert_eq!(config.detector.span_policy, SpanPolicy::Short);
        assert_eq!(config.aligner.policy, AlignPolicy::SharedBoundary);
        assert_eq!(config.store.dir, PathBuf::from("obj"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = MappingConfig::from_toml_str(
            r#"
            [detector]
            span_policy = "long"

            [aligner]
            policy = "contained"

            [store]
            format = "ron"
            "#,
        )
        .unwrap();

        assert_eq!(config.detector.span_policy, SpanPolicy::Long);
        assert_eq!(config.detector.subject_pattern, "subj");
        assert_eq!(config.aligner.policy, AlignPolicy::Contained);
        assert_eq!(config.store.format, StoreFormat::Ron);
        assert_eq!(config.store.dir, PathBuf::from("obj"));
    }

    #[test]
    fn unknown_policy_is_config_error() {
        let err = MappingConfig::from_toml_str("[aligner]\npolicy = \"fuzzy\"\n").unwrap_err();
        assert!(matches!(err, PipelineError::Config { .. }));
    }

    #[test]
    fn bad_pattern_is_reported() {
        let mut config = MappingConfig::default();
        config.detector.object_pattern = "(obj".into();
        assert!(matches!(config.role_detector(), Err(PipelineError::Pattern(_))));
    }

    #[test]
    fn overrides_replace_only_given_policies() {
        let mut config = MappingConfig::from_toml_str("[detector]\nspan_policy = \"long\"\n").unwrap();
        config.override_policies(None, Some(AlignPolicy::Exact));

        assert_eq!(config.detector.span_policy, SpanPolicy::Long);
        assert_eq!(config.aligner.policy, AlignPolicy::Exact);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = MappingConfig::load(Path::new("/nonexistent/cframes.toml")).unwrap();
        assert_eq!(config, MappingConfig::default());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[detector]\nspan_policy = \"naive\"").unwrap();

        let config = MappingConfig::load(file.path()).unwrap();
        assert_eq!(config.role_detector().unwrap().policy(), SpanPolicy::Naive);
    }
}
