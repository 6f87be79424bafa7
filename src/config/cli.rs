use crate::config::toml_config::TomlConfig;
use crate::config::FormatConfig;
use crate::domain::model::FailurePolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tree-format")]
#[command(about = "Run a source formatter in place on every matching file under the given roots")]
pub struct CliConfig {
    /// Root directories to walk [default: ./source ./test]
    pub roots: Vec<PathBuf>,

    /// File-name suffixes to format [default: .cpp,.h]
    #[arg(long = "suffix", value_delimiter = ',')]
    pub suffixes: Vec<String>,

    /// Formatter executable, invoked as `<tool> -i <path>`
    #[arg(long, env = "TREE_FORMAT_TOOL")]
    pub tool: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Record formatter failures and continue with the next file
    #[arg(long)]
    pub keep_going: bool,

    /// Visit directory entries in raw traversal order instead of by name
    #[arg(long)]
    pub unsorted: bool,

    /// Only list the files that would be formatted
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Layer defaults, the optional TOML file and these flags into one
    /// validated [`FormatConfig`].
    pub fn resolve(&self) -> Result<FormatConfig> {
        let mut config = FormatConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if !self.roots.is_empty() {
            config.roots = self.roots.clone();
        }
        if !self.suffixes.is_empty() {
            config.suffixes = self.suffixes.iter().cloned().collect();
        }
        if let Some(tool) = &self.tool {
            config.tool = tool.clone();
        }
        if self.keep_going {
            config.on_failure = FailurePolicy::Continue;
        }
        if self.unsorted {
            config.sort_entries = false;
        }
        config.dry_run = self.dry_run;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_arguments_resolves_to_defaults() {
        let cli = CliConfig::try_parse_from(["tree-format"]).unwrap();
        let mut expected = FormatConfig::default();
        if let Ok(tool) = std::env::var("TREE_FORMAT_TOOL") {
            expected.tool = tool;
        }
        assert_eq!(cli.resolve().unwrap(), expected);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[format]\nroots = [\"from-file\"]\ntool = \"file-tool\"\nsuffixes = [\".c\"]"
        )
        .unwrap();

        let config_path = file.path().to_str().unwrap().to_string();
        let cli = CliConfig::try_parse_from([
            "tree-format",
            "--config",
            &config_path,
            "--tool",
            "flag-tool",
            "--keep-going",
            "--unsorted",
            "lib",
        ])
        .unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.roots, vec![PathBuf::from("lib")]);
        assert_eq!(config.tool, "flag-tool");
        assert_eq!(config.suffixes.iter().collect::<Vec<_>>(), vec![".c"]);
        assert_eq!(config.on_failure, FailurePolicy::Continue);
        assert!(!config.sort_entries);
    }

    #[test]
    fn test_comma_delimited_suffixes() {
        let cli = CliConfig::try_parse_from(["tree-format", "--suffix", ".cc,.hh"]).unwrap();
        let config = cli.resolve().unwrap();
        assert!(config.suffixes.contains(".cc"));
        assert!(config.suffixes.contains(".hh"));
        assert_eq!(config.suffixes.len(), 2);
    }

    #[test]
    fn test_invalid_suffix_fails_validation() {
        let cli = CliConfig::try_parse_from(["tree-format", "--suffix", "cpp"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
