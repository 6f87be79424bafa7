use crate::core::{ConfigProvider, Formatter};
use crate::utils::error::{FormatError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Flag asking the tool to rewrite the file instead of printing the result.
pub const IN_PLACE_FLAG: &str = "-i";

/// Runs `<program> -i <path>` as a child process and waits for it.
///
/// No style options are passed; the tool picks up its own configuration
/// (e.g. a `.clang-format` file next to the sources).
#[derive(Debug, Clone)]
pub struct ClangFormat {
    program: String,
}

impl ClangFormat {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.tool())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(IN_PLACE_FLAG)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for ClangFormat {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOOL)
    }
}

#[async_trait]
impl Formatter for ClangFormat {
    async fn format(&self, path: &Path) -> Result<()> {
        tracing::debug!("running {} {} {}", self.program, IN_PLACE_FLAG, path.display());

        let output = self
            .command(path)
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FormatError::ToolNotFound {
                    tool: self.program.clone(),
                },
                _ => FormatError::IoError(e),
            })?;

        if !output.stdout.is_empty() {
            tracing::debug!("{}: {}", self.program, String::from_utf8_lossy(&output.stdout).trim());
        }

        if output.status.success() {
            Ok(())
        } else {
            Err(FormatError::ToolFailed {
                path: path.to_path_buf(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_shape() {
        let formatter = ClangFormat::new("clang-format-17");
        let cmd = formatter.command(Path::new("./source/a.cpp"));
        let std_cmd = cmd.as_std();

        assert_eq!(std_cmd.get_program(), "clang-format-17");
        let args: Vec<_> = std_cmd.get_args().collect();
        assert_eq!(args, vec!["-i", "./source/a.cpp"]);
    }

    #[test]
    fn test_missing_program_is_tool_not_found() {
        let formatter = ClangFormat::new("tree-format-no-such-formatter-binary");
        let result = tokio_test::block_on(formatter.format(Path::new("a.cpp")));

        match result {
            Err(FormatError::ToolNotFound { tool }) => {
                assert_eq!(tool, "tree-format-no-such-formatter-binary")
            }
            other => panic!("expected ToolNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_program_comes_from_config() {
        let config = crate::config::FormatConfig {
            tool: "clang-format-18".to_string(),
            ..Default::default()
        };
        assert_eq!(ClangFormat::from_config(&config).program(), "clang-format-18");
    }

    #[test]
    fn test_default_program() {
        assert_eq!(ClangFormat::default().program(), "clang-format");
    }
}
