//! Optional presentation templates

use crate::config::TemplateConfig;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Read a template file, or an empty string if it cannot be read
pub fn load_template(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No template at {}", path.display());
            String::new()
        }
        Err(e) => {
            warn!("Ignoring unreadable template {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Header markup and stylesheet, loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Templates {
    /// Replaces the default page header when non-empty
    pub markup: String,

    /// Injected into the page head when non-empty
    pub style: String,
}

impl Templates {
    pub fn load(config: &TemplateConfig) -> Self {
        Self {
            markup: load_template(&config.index_path),
            style: load_template(&config.style_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_template_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_template(&dir.path().join("index.html")), "");
    }

    #[test]
    fn test_reads_existing_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("style.css");
        std::fs::write(&path, ".result-box { border-radius: 4px; }").unwrap();
        assert_eq!(load_template(&path), ".result-box { border-radius: 4px; }");
    }

    #[test]
    fn test_directory_is_treated_as_missing() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_template(dir.path()), "");
    }

    #[test]
    fn test_load_both() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Moods</h1>").unwrap();

        let templates = Templates::load(&TemplateConfig {
            index_path: dir.path().join("index.html"),
            style_path: dir.path().join("style.css"),
        });
        assert_eq!(templates.markup, "<h1>Moods</h1>");
        assert!(templates.style.is_empty());
    }
}
