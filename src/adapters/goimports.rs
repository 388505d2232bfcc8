//! `goimports` import normalizer
//!
//! Pipes the rendered buffer through an external `goimports` executable,
//! which resolves missing imports on its own; the candidate pool is not
//! consulted.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::core::models::ImportSpec;
use crate::core::ports::ImportNormalizer;
use crate::error::NormalizeError;

/// Default executable name
pub const GOIMPORTS: &str = "goimports";

/// [`ImportNormalizer`] backed by the `goimports` tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goimports {
    program: String,
}

impl Default for Goimports {
    fn default() -> Self {
        Self::new(GOIMPORTS)
    }
}

impl Goimports {
    /// Use the executable at `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_error(&self, source: std::io::Error) -> NormalizeError {
        NormalizeError::Spawn {
            tool: self.program.clone(),
            source,
        }
    }
}

impl ImportNormalizer for Goimports {
    fn normalize(
        &self,
        path: &Path,
        source: &str,
        _pool: &[ImportSpec],
    ) -> Result<String, NormalizeError> {
        let mut command = Command::new(&self.program);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            command.arg("-srcdir").arg(dir);
        }

        debug!("running {} for {}", self.program, path.display());
        let mut child = command.spawn().map_err(|e| self.spawn_error(e))?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| self.spawn_error(e))?;
        }

        let output = child.wait_with_output().map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            return Err(NormalizeError::Tool {
                tool: self.program.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
