//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "agent-playground";
const PROJECT_FILES: [&str; 2] = ["playground.toml", ".playground.toml"];
const ENV_PREFIX: &str = "PLAYGROUND_";

/// Unprefixed variables understood for compatibility with plain OpenAI setups.
const OPENAI_ENV_KEYS: [(&str, &str); 3] = [
    ("OPENAI_MODEL", "openai.model"),
    ("OPENAI_TEMPERATURE", "openai.temperature"),
    ("OPENAI_MAX_TOKENS", "openai.max_tokens"),
];

#[derive(Error, Debug)]
#[error("Failed to load configuration: {0}")]
pub struct ConfigLoadError(#[from] Box<figment::Error>);

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `PLAYGROUND_*` variables (`__` separates sections)
    /// 2. `OPENAI_MODEL`, `OPENAI_TEMPERATURE`, `OPENAI_MAX_TOKENS`
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./playground.toml` or `./.playground.toml`
    /// 5. Global: `$XDG_CONFIG_HOME/agent-playground/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigLoadError> {
        Self::figment(config_path)
            .extract()
            .map_err(|e| ConfigLoadError(Box::new(e)))
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::raw().filter_map(|key| {
                OPENAI_ENV_KEYS
                    .iter()
                    .find(|(var, _)| key.as_str().eq_ignore_ascii_case(var))
                    .map(|(_, path)| (*path).into())
            }))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// `$XDG_CONFIG_HOME/agent-playground/config.toml`, or the platform equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] {}* and OPENAI_MODEL/TEMPERATURE/MAX_TOKENS", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./playground.toml or ./.playground.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn isolate(jail: &mut Jail) {
        let xdg = jail.directory().join("xdg");
        jail.set_env("XDG_CONFIG_HOME", xdg.display());
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert!(config.dialogs.autosave);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("agent-playground"));
    }

    #[test]
    fn test_project_file_is_merged() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file(
                "playground.toml",
                "[openai]\nmodel = \"gpt-4o\"\n\n[repl]\ndefault_agent = \"echo\"\n",
            )?;

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.openai.model, "gpt-4o");
            assert_eq!(config.repl.default_agent, "echo");
            // untouched sections keep defaults
            assert_eq!(config.openai.temperature, 0.7);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_beats_project_file() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("playground.toml", "[openai]\nmodel = \"project\"\n")?;
            jail.create_file("custom.toml", "[openai]\nmodel = \"explicit\"\n")?;

            let path = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| e.to_string())?;
            assert_eq!(config.openai.model, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_global_file_is_lowest() {
        Jail::expect_with(|jail| {
            isolate(jail);
            std::fs::create_dir_all(jail.directory().join("xdg/agent-playground"))
                .map_err(|e| e.to_string())?;
            jail.create_file(
                "xdg/agent-playground/config.toml",
                "[openai]\nmodel = \"global\"\ntemperature = 0.1\n",
            )?;
            jail.create_file(".playground.toml", "[openai]\nmodel = \"project\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.openai.model, "project");
            assert_eq!(config.openai.temperature, 0.1);
            Ok(())
        });
    }

    #[test]
    fn test_openai_variables() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("playground.toml", "[openai]\nmodel = \"from-file\"\n")?;
            jail.set_env("OPENAI_MODEL", "gpt-4-turbo");
            jail.set_env("OPENAI_TEMPERATURE", "0.3");
            jail.set_env("OPENAI_MAX_TOKENS", "256");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.openai.model, "gpt-4-turbo");
            assert_eq!(config.openai.temperature, 0.3);
            assert_eq!(config.openai.max_tokens, Some(256));
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_variables_win() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.set_env("OPENAI_MODEL", "plain");
            jail.set_env("PLAYGROUND_OPENAI__MODEL", "prefixed");
            jail.set_env("PLAYGROUND_DIALOGS__AUTOSAVE", "false");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.openai.model, "prefixed");
            assert!(!config.dialogs.autosave);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            isolate(jail);
            jail.create_file("playground.toml", "[openai]\ntemperature = \"hot\"\n")?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
