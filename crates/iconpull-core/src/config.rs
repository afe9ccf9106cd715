use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default catalog root; collections live at `{base_url}/{slug}/{page}`.
pub const DEFAULT_BASE_URL: &str = "https://www.svgrepo.com/collection";

/// HTTP client parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Overall per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects followed per request.
    pub max_redirections: u32,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            max_redirections: 10,
            user_agent: format!("iconpull/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Global configuration loaded from `~/.config/iconpull/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconpullConfig {
    /// Catalog root the collection slug is appended to.
    pub base_url: String,
    /// Parent directory; each collection is saved to `{output_dir}/{slug}`.
    pub output_dir: PathBuf,
    /// Concurrent asset downloads (1 = sequential).
    pub jobs: usize,
    /// Optional HTTP settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for IconpullConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("./public/vectors"),
            jobs: 1,
            http: None,
        }
    }
}

impl IconpullConfig {
    /// HTTP settings with defaults filled in.
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("iconpull")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IconpullConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IconpullConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<IconpullConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: IconpullConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = IconpullConfig::default();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.output_dir, PathBuf::from("./public/vectors"));
        assert_eq!(cfg.jobs, 1);
        assert!(cfg.http.is_none());
        assert_eq!(cfg.http().timeout_secs, 60);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = IconpullConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: IconpullConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.output_dir, cfg.output_dir);
        assert_eq!(parsed.jobs, cfg.jobs);
    }

    #[test]
    fn config_toml_http_section() {
        let toml = r#"
            base_url = "https://icons.example.com/c"
            output_dir = "/srv/icons"
            jobs = 4

            [http]
            connect_timeout_secs = 5
            timeout_secs = 20
            max_redirections = 3
            user_agent = "test-agent"
        "#;
        let cfg: IconpullConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.jobs, 4);
        let http = cfg.http();
        assert_eq!(http.connect_timeout_secs, 5);
        assert_eq!(http.timeout_secs, 20);
        assert_eq!(http.max_redirections, 3);
        assert_eq!(http.user_agent, "test-agent");
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"http://127.0.0.1:1/c\"\noutput_dir = \"out\"\njobs = 2\n",
        )
        .unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:1/c");
        assert_eq!(cfg.jobs, 2);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to read config"));
    }
}
