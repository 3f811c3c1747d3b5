use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

pub const DEFAULT_DATABASE_FILE: &str = "news.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

/// Resolves the database file the reports run against. The identifier is an
/// explicit parameter rather than a process-wide default so tests can point
/// the reports at a fixture store.
pub fn resolve_database_path(
    cwd: &Path,
    override_path: Option<&Path>,
) -> Result<DatabaseConfig> {
    if !cwd.is_absolute() {
        bail!("working directory must be absolute: {}", cwd.display());
    }

    let path = match override_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.join(DEFAULT_DATABASE_FILE),
    };

    Ok(DatabaseConfig { path })
}
