use std::path::Path;

/// Source language, as far as segmentation cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    /// Bazel/Buck build language; Python-shaped, `def` only
    Starlark,
    Unknown,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" | "pyi" => Language::Python,
            "bzl" | "star" => Language::Starlark,
            _ => Language::Unknown,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
            if matches!(file_name, "BUILD" | "BUILD.bazel" | "WORKSPACE") {
                return Language::Starlark;
            }
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Get language name as string
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Starlark => "starlark",
            Language::Unknown => "unknown",
        }
    }

    /// Whether indentation-based segmentation applies
    pub fn supports_segmentation(self) -> bool {
        !matches!(self, Language::Unknown)
    }
}
