use crate::error::{ArtifactError, CompileWarning};
use std::fs;

/// The result of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledScript {
    /// The complete script, shebang first, newline terminated.
    pub text: String,
    /// Node ids in the order their fragments appear in the script.
    pub order: Vec<String>,
    /// Non-fatal problems; each one left a placeholder comment in `text`.
    pub warnings: Vec<CompileWarning>,
}

impl CompiledScript {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Writes the script to `path` and, on Unix, marks it executable.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let write_error = |e: std::io::Error| ArtifactError::Write {
            path: path.to_string(),
            message: e.to_string(),
        };
        fs::write(path, &self.text).map_err(write_error)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(write_error)?;
        }
        Ok(())
    }
}
