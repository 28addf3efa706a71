//! Loading `RunConfig` from disk. The format is chosen by file extension:
//! `.toml` is parsed as TOML, anything else as JSON.
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::params::RunConfig;
use crate::error::{Error, Result};

pub fn load_config(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::config(path, e))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let config: RunConfig = match ext {
        "toml" => toml::from_str(&contents).map_err(|e| Error::config(path, e))?,
        _ => serde_json::from_str(&contents).map_err(|e| Error::config(path, e))?,
    };

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::CategoryEntry;
    use crate::types::InterpreterSource;
    use std::path::PathBuf;

    #[test]
    fn toml_overrides_keep_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        fs::write(
            &path,
            r#"
project_root = "/srv/cards"

[interpreter]
kind = "env"
program = "python3"

[sales]
end_page = 15
categories = ["AR", { keyword = "CHR", end_page = 3 }]
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.project_root, PathBuf::from("/srv/cards"));
        assert_eq!(
            config.interpreter,
            InterpreterSource::Env {
                program: "python3".to_string()
            }
        );
        assert_eq!(config.sales.end_page, Some(15));
        assert_eq!(config.sales.script, PathBuf::from("scraper.py"));
        assert_eq!(
            config.sales.categories,
            vec![
                CategoryEntry::Keyword("AR".to_string()),
                CategoryEntry::Detailed {
                    keyword: "CHR".to_string(),
                    end_page: Some(3)
                },
            ]
        );
        assert!(config.publish);
        assert_eq!(config.buying.data_file, PathBuf::from("buying_data.csv"));
    }

    #[test]
    fn json_is_the_fallback_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.conf");
        fs::write(&path, r#"{"publish": false, "git": {"remote": "origin"}}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert!(!config.publish);
        assert_eq!(config.git.remote.as_deref(), Some("origin"));
        assert_eq!(config.git.program, "git");
        assert_eq!(config.sales.categories.len(), 5);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "publish = [").unwrap();

        match load_config(&path) {
            Err(Error::Config { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
