use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub completions: CompletionsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log filter used when neither `RUST_LOG` nor `-v` is given.
    pub log_level: String,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct CompletionsConfig {
    /// Write completion files here instead of printing to stdout
    pub output_dir: Option<String>,
    /// Tool name for the `# generated by` header line
    pub generator_name: Option<String>,
}

// --- Defaults ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
        }
    }
}

// --- Methods ---

impl Config {
    pub fn path() -> PathBuf {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(|d| PathBuf::from(d).join("zsh-compgen").join("config.toml"))
            .or_else(|| dirs::config_dir().map(|d| d.join("zsh-compgen").join("config.toml")))
            .unwrap_or_else(|| PathBuf::from("~/.config/zsh-compgen/config.toml"))
    }

    pub fn load() -> Self {
        let config_path = Self::path();

        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!(
                            "[zsh-compgen] Failed to parse {}: {e}",
                            config_path.display()
                        );
                    }
                },
                Err(e) => {
                    eprintln!(
                        "[zsh-compgen] Failed to read {}: {e}",
                        config_path.display()
                    );
                }
            }
        }

        Config::default()
    }

    /// Configured output directory with a leading `~` expanded.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.completions.output_dir.as_deref().map(expand_tilde)
    }

    pub fn generator_name(&self) -> &str {
        self.completions
            .generator_name
            .as_deref()
            .unwrap_or(crate::zsh::DEFAULT_TOOL)
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => {
            let home = dirs::home_dir().unwrap_or_default();
            home.join(rest.trim_start_matches('/'))
        }
        None => PathBuf::from(path),
    }
}
