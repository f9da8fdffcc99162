//! Configuration handling for sp1-upa CLI
//!
//! Priority: CLI flags > environment variables > config file > defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use sp1_upa_core::proof::parse_selector;
use sp1_upa_sdk::{ConverterConfig, DEFAULT_FIXTURE_PATH, DEFAULT_OUTPUT_DIR};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolved configuration for CLI commands
pub struct Config {
    pub fixture_path: PathBuf,
    pub converter: ConverterConfig,
    pub quiet: bool,
    pub json_output: bool,
}

impl Config {
    /// Load configuration from file, environment, and CLI args
    pub fn load(common: &super::CommonArgs, fixture: Option<&PathBuf>) -> Result<Self> {
        let file_config = match config_file_path() {
            Some(path) => ConfigFile::load(&path)?,
            None => None,
        };
        Self::resolve(common, fixture, file_config.as_ref())
    }

    /// Merge CLI args (clap has already folded in the environment) over the
    /// config file and the built-in defaults
    fn resolve(
        common: &super::CommonArgs,
        fixture: Option<&PathBuf>,
        file_config: Option<&ConfigFile>,
    ) -> Result<Self> {
        let defaults = file_config.and_then(|c| c.default.as_ref());

        let fixture_path = fixture
            .cloned()
            .or_else(|| defaults.and_then(|d| d.fixture.as_deref()).map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_PATH));

        let out_dir = common
            .out_dir
            .clone()
            .or_else(|| defaults.and_then(|d| d.out_dir.as_deref()).map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let mut converter = ConverterConfig::new(out_dir);
        if let Some(name) = defaults.and_then(|d| d.vk_file.clone()) {
            converter = converter.with_vk_file_name(name);
        }
        if let Some(name) = defaults.and_then(|d| d.bundle_file.clone()) {
            converter = converter.with_bundle_file_name(name);
        }

        let selector = common
            .expect_selector
            .clone()
            .or_else(|| defaults.and_then(|d| d.expect_selector.clone()));
        if let Some(selector) = selector {
            let selector = parse_selector(&selector)
                .with_context(|| format!("Invalid verifier selector {:?}", selector))?;
            converter = converter.with_expected_selector(selector);
        }

        Ok(Self {
            fixture_path,
            converter,
            quiet: common.quiet,
            json_output: common.output == super::OutputFormat::Json,
        })
    }
}

/// Configuration file structure
#[derive(Debug, Deserialize)]
struct ConfigFile {
    default: Option<DefaultConfig>,
}

#[derive(Debug, Deserialize)]
struct DefaultConfig {
    fixture: Option<String>,
    out_dir: Option<String>,
    vk_file: Option<String>,
    bundle_file: Option<String>,
    expect_selector: Option<String>,
}

impl ConfigFile {
    /// `Ok(None)` when there is no file; a file that can't be read or parsed
    /// is an error.
    fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        log::debug!("Loaded config file {:?}", path);
        Ok(Some(config))
    }
}

/// Get config file path
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sp1-upa").join("config.toml"))
}

/// Expand ~ to home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands, CommonArgs, OutputFormat};
    use clap::Parser;

    const FULL_CONFIG: &str = r#"
[default]
fixture = "proofs/fib.json"
out_dir = "upa-out"
vk_file = "vk.json"
bundle_file = "bundle.json"
expect_selector = "0xdeadbeef"
"#;

    fn common() -> CommonArgs {
        CommonArgs {
            out_dir: None,
            expect_selector: None,
            output: OutputFormat::Human,
            quiet: false,
        }
    }

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    fn full_config_file() -> ConfigFile {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), FULL_CONFIG);
        ConfigFile::load(&path).unwrap().unwrap()
    }

    #[test]
    fn test_defaults_without_config_file() {
        let config = Config::resolve(&common(), None, None).unwrap();
        assert_eq!(config.fixture_path, PathBuf::from(DEFAULT_FIXTURE_PATH));
        assert_eq!(config.converter.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.converter.vk_file_name, "upaVk.json");
        assert_eq!(config.converter.bundle_file_name, "upaProofVkInputs.json");
        assert_eq!(config.converter.expected_selector, None);
        assert!(!config.json_output);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let file = full_config_file();
        let config = Config::resolve(&common(), None, Some(&file)).unwrap();
        assert_eq!(config.fixture_path, PathBuf::from("proofs/fib.json"));
        assert_eq!(config.converter.vk_path(), PathBuf::from("upa-out/vk.json"));
        assert_eq!(
            config.converter.bundle_path(),
            PathBuf::from("upa-out/bundle.json")
        );
        assert_eq!(
            config.converter.expected_selector,
            Some([0xde, 0xad, 0xbe, 0xef])
        );
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let file = full_config_file();
        let mut args = common();
        args.out_dir = Some(PathBuf::from("cli-out"));
        args.expect_selector = Some("11b6a09d".into());
        let fixture = PathBuf::from("cli.json");

        let config = Config::resolve(&args, Some(&fixture), Some(&file)).unwrap();
        assert_eq!(config.fixture_path, fixture);
        assert_eq!(config.converter.output_dir, PathBuf::from("cli-out"));
        // file names have no flag, so they still come from the file
        assert_eq!(config.converter.vk_file_name, "vk.json");
        assert_eq!(
            config.converter.expected_selector,
            Some([0x11, 0xb6, 0xa0, 0x9d])
        );
    }

    #[test]
    fn test_env_sits_between_cli_and_config_file() {
        // The only test that touches these variables
        std::env::set_var("UPA_OUTPUT_DIR", "env-out");
        std::env::set_var("SP1_VERIFIER_SELECTOR", "0x11b6a09d");

        let parse = |argv: &[&str]| match Cli::try_parse_from(argv).unwrap().command {
            Commands::Convert(args) => args.common,
            _ => unreachable!(),
        };
        let from_env = parse(&["sp1-upa", "convert"]);
        let from_flag = parse(&["sp1-upa", "convert", "--out-dir", "flag-out"]);

        std::env::remove_var("UPA_OUTPUT_DIR");
        std::env::remove_var("SP1_VERIFIER_SELECTOR");

        let file = full_config_file();
        let config = Config::resolve(&from_env, None, Some(&file)).unwrap();
        assert_eq!(config.converter.output_dir, PathBuf::from("env-out"));
        assert_eq!(
            config.converter.expected_selector,
            Some([0x11, 0xb6, 0xa0, 0x9d])
        );

        let config = Config::resolve(&from_flag, None, Some(&file)).unwrap();
        assert_eq!(config.converter.output_dir, PathBuf::from("flag-out"));
    }

    #[test]
    fn test_missing_config_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = ConfigFile::load(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[default]\nexpect_selector = \"0xdeadbeef\nout_dir = \"x\"\n",
        );
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config file"));
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let mut args = common();
        args.expect_selector = Some("0xdeadbe".into());
        let err = Config::resolve(&args, None, None).err().unwrap();
        assert!(err.to_string().contains("Invalid verifier selector"));

        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[default]\nexpect_selector = \"nothex!!\"\n");
        let file = ConfigFile::load(&path).unwrap().unwrap();
        assert!(Config::resolve(&common(), None, Some(&file)).is_err());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("rel/~/path"), PathBuf::from("rel/~/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/upa"), home.join("upa"));
        }
    }
}
