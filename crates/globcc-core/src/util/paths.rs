use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;

use crate::error::{BuildError, Result};

/// Rend un chemin absolu sans toucher au disque (pas de résolution de liens,
/// pas de test d'existence). Un chemin vide désigne le répertoire courant.
pub fn absolutize(p: &Path) -> Result<PathBuf> {
    let res = if p.as_os_str().is_empty() {
        std::env::current_dir()
    } else {
        std::path::absolute(p)
    };
    res.map_err(|source| BuildError::CurrentDir { path: p.display().to_string(), source })
}

pub fn absolutize_utf8(p: &Path) -> Result<Utf8PathBuf> {
    let abs = absolutize(p)?;
    Utf8PathBuf::from_path_buf(abs).map_err(|path| BuildError::NonUtf8Path { path })
}
