//! Dashboard configuration: Notion credentials and the four database
//! ids, as explicit values instead of module-level defaults. A missing
//! token is a legitimate state (offline mode), not an error.
//!
//! Resolution order:
//! 1) `$DASHBOARD_CONFIG_PATH` (TOML or JSON)
//! 2) `config/dashboard.toml`
//! 3) `config/dashboard.json`
//! 4) environment only
//!
//! Environment variables fill any field a config file leaves unset.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::assets::Category;

const ENV_CONFIG_PATH: &str = "DASHBOARD_CONFIG_PATH";
const ENV_TOKEN: &str = "NOTION_API_TOKEN";
const ENV_HEALTH_DB: &str = "NOTION_HEALTH_DB_ID";
const ENV_COGNITIVE_DB: &str = "NOTION_COGNITIVE_DB_ID";
const ENV_CONTENT_DB: &str = "NOTION_CONTENT_DB_ID";
const ENV_FOCUS_DB: &str = "NOTION_FOCUS_DB_ID";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseIds {
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub cognitive: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub focus: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub notion_token: Option<String>,
    #[serde(default)]
    pub database_ids: DatabaseIds,
}

impl DashboardConfig {
    pub fn database_id(&self, category: Category) -> Option<&str> {
        let id = match category {
            Category::Health => &self.database_ids.health,
            Category::Cognitive => &self.database_ids.cognitive,
            Category::Content => &self.database_ids.content,
            Category::Focus => &self.database_ids.focus,
        };
        id.as_deref()
    }

    /// True when the HTTP source can be built: token plus all four ids.
    pub fn is_complete(&self) -> bool {
        self.notion_token.is_some() && Category::ALL.iter().all(|c| self.database_id(*c).is_some())
    }

    /// Read configuration from environment variables only.
    pub fn from_env() -> Self {
        Self {
            notion_token: env_nonempty(ENV_TOKEN),
            database_ids: DatabaseIds {
                health: env_nonempty(ENV_HEALTH_DB),
                cognitive: env_nonempty(ENV_COGNITIVE_DB),
                content: env_nonempty(ENV_CONTENT_DB),
                focus: env_nonempty(ENV_FOCUS_DB),
            },
        }
    }

    /// Load from an explicit path. Supports TOML or JSON formats.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading dashboard config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        parse_config(&content, ext.as_str())
    }

    /// Load using the documented resolution order, then fill any unset
    /// field from the environment.
    pub fn load_default() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from(&pb)?
        } else {
            let toml_p = PathBuf::from("config/dashboard.toml");
            let json_p = PathBuf::from("config/dashboard.json");
            if toml_p.exists() {
                Self::load_from(&toml_p)?
            } else if json_p.exists() {
                Self::load_from(&json_p)?
            } else {
                Self::default()
            }
        };
        cfg.fill_from_env();
        Ok(cfg)
    }

    fn fill_from_env(&mut self) {
        let env = Self::from_env();
        if self.notion_token.is_none() {
            self.notion_token = env.notion_token;
        }
        let ids = &mut self.database_ids;
        if ids.health.is_none() {
            ids.health = env.database_ids.health;
        }
        if ids.cognitive.is_none() {
            ids.cognitive = env.database_ids.cognitive;
        }
        if ids.content.is_none() {
            ids.content = env.database_ids.content;
        }
        if ids.focus.is_none() {
            ids.focus = env.database_ids.focus;
        }
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<DashboardConfig> {
    // Try TOML first if hinted or content looks like toml.
    let try_toml = hint_ext == "toml" || s.contains("database_ids");
    if try_toml {
        if let Ok(v) = toml::from_str::<DashboardConfig>(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = serde_json::from_str::<DashboardConfig>(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = toml::from_str::<DashboardConfig>(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported dashboard config format"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, io::Write};

    /// Create a unique temporary directory in std::env::temp_dir().
    fn unique_tmp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        dir.push(format!("dashboard_config_test_{}", nanos));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn clear_env() {
        for k in [
            ENV_CONFIG_PATH,
            ENV_TOKEN,
            ENV_HEALTH_DB,
            ENV_COGNITIVE_DB,
            ENV_CONTENT_DB,
            ENV_FOCUS_DB,
        ] {
            env::remove_var(k);
        }
    }

    #[test]
    fn toml_and_json_formats_parse() {
        let toml_src = r#"
notion_token = "secret"
[database_ids]
health = "h1"
focus = "f1"
"#;
        let cfg = parse_config(toml_src, "toml").unwrap();
        assert_eq!(cfg.notion_token.as_deref(), Some("secret"));
        assert_eq!(cfg.database_id(Category::Health), Some("h1"));
        assert_eq!(cfg.database_id(Category::Cognitive), None);
        assert!(!cfg.is_complete());

        let json_src = r#"{"notion_token":"secret","database_ids":{"health":"h1","cognitive":"c1","content":"ct1","focus":"f1"}}"#;
        let cfg = parse_config(json_src, "json").unwrap();
        assert!(cfg.is_complete());
    }

    #[serial_test::serial]
    #[test]
    fn env_fills_fields_a_file_leaves_unset() {
        clear_env();
        let tmp = unique_tmp_dir();
        let path = tmp.join("dashboard.toml");
        {
            let mut f = fs::File::create(&path).unwrap();
            write!(f, "[database_ids]\nhealth = \"h1\"\n").unwrap();
        }
        env::set_var(ENV_CONFIG_PATH, path.display().to_string());
        env::set_var(ENV_TOKEN, "from-env");
        env::set_var(ENV_FOCUS_DB, "f-env");

        let cfg = DashboardConfig::load_default().unwrap();
        assert_eq!(cfg.notion_token.as_deref(), Some("from-env"));
        assert_eq!(cfg.database_id(Category::Health), Some("h1"));
        assert_eq!(cfg.database_id(Category::Focus), Some("f-env"));

        clear_env();
        let _ = fs::remove_file(&path);
        let _ = fs::remove_dir_all(&tmp);
    }

    #[serial_test::serial]
    #[test]
    fn missing_everything_is_offline_not_an_error() {
        clear_env();
        // No config files in a scratch CWD-independent sense: the env
        // path is unset and we only assert the env-only branch.
        let cfg = DashboardConfig::from_env();
        assert!(cfg.notion_token.is_none());
        assert!(!cfg.is_complete());
    }

    #[serial_test::serial]
    #[test]
    fn blank_env_values_read_as_unset() {
        clear_env();
        env::set_var(ENV_TOKEN, "   ");
        let cfg = DashboardConfig::from_env();
        assert!(cfg.notion_token.is_none());
        clear_env();
    }
}
