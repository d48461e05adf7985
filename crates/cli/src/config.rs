use anyhow::{Context as AnyhowContext, Result};
use gitspect_segmenter::SegmenterConfig;
use std::fs;
use std::path::Path;

use crate::flags::ContinuationFlag;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Overrides {
    pub tab_width: Option<usize>,
    pub continuation: Option<ContinuationFlag>,
    pub no_inline: bool,
}

/// Load a config file (defaults when absent), then apply flag overrides and validate.
pub(crate) fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<SegmenterConfig> {
    let mut config = match path {
        Some(path) => load_config_file(path)?,
        None => SegmenterConfig::default(),
    };

    if let Some(tab_width) = overrides.tab_width {
        config.tab_width = tab_width;
    }
    if let Some(continuation) = overrides.continuation {
        config.continuation = continuation.as_domain();
    }
    if overrides.no_inline {
        config.inline_definitions = false;
    }

    config.validate().context("Invalid segmenter configuration")?;
    log::debug!("Segmenter config: {config:?}");
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<SegmenterConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitspect_segmenter::ContinuationMode;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_config(None, Overrides::default()).unwrap();
        assert_eq!(config, SegmenterConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tab_width = 8\ncontinuation = \"bracket_depth\"").unwrap();

        let config = resolve_config(
            Some(file.path()),
            Overrides {
                tab_width: Some(2),
                continuation: None,
                no_inline: true,
            },
        )
        .unwrap();

        assert_eq!(config.tab_width, 2);
        assert_eq!(config.continuation, ContinuationMode::BracketDepth);
        assert!(!config.inline_definitions);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let overrides = Overrides {
            tab_width: Some(0),
            ..Overrides::default()
        };
        assert!(resolve_config(None, overrides).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tab_width = \"wide\"").unwrap();
        assert!(resolve_config(Some(file.path()), Overrides::default()).is_err());
    }
}
