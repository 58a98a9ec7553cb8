//! Locating audio programs on the host.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BackendError;

const DISCOVERY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::discovery");

/// Resolves the program used for a backend role.
///
/// An explicitly configured path wins and must exist. Otherwise the first
/// candidate found on `PATH` is used. Candidates containing a path separator
/// are checked directly instead of being searched for.
///
/// # Errors
///
/// Returns [`BackendError::MissingProgram`] when the configured path does not
/// exist, or [`BackendError::NotFound`] when no candidate is available.
pub fn locate_program(
    role: &'static str,
    configured: Option<&Path>,
    candidates: &[&str],
) -> Result<PathBuf, BackendError> {
    if let Some(path) = configured {
        if path.is_file() {
            debug!(target: DISCOVERY_TARGET, role, program = %path.display(), "using configured program");
            return Ok(path.to_path_buf());
        }
        return Err(BackendError::MissingProgram {
            role,
            path: path.to_path_buf(),
        });
    }

    candidates
        .iter()
        .find_map(|candidate| search_path(candidate))
        .inspect(|found| {
            debug!(target: DISCOVERY_TARGET, role, program = %found.display(), "detected program");
        })
        .ok_or_else(|| BackendError::NotFound {
            role,
            candidates: candidates.join(", "),
        })
}

fn search_path(program: &str) -> Option<PathBuf> {
    if program.contains(std::path::MAIN_SEPARATOR) {
        let direct = PathBuf::from(program);
        return direct.is_file().then_some(direct);
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}
