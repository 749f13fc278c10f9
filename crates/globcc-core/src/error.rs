use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Erreurs de la bibliothèque. Les globs sans correspondance ne sont pas des erreurs.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Motif glob syntaxiquement invalide (ex: `[` non fermé).
    #[error("motif glob invalide `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Répertoire courant illisible : impossible de rendre un chemin absolu.
    #[error("impossible de résoudre `{path}` en chemin absolu: {source}")]
    CurrentDir {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Le répertoire de sortie doit être représentable en UTF-8.
    #[error("chemin non UTF-8: {}", .path.display())]
    NonUtf8Path { path: PathBuf },

    /// Aucun compilateur candidat n'est disponible.
    #[error("aucun compilateur trouvé (essayés: {})", .tried.join(", "))]
    NoCompilerFound { tried: Vec<String> },

    /// Le compilateur a été trouvé mais son lancement a échoué.
    #[error("échec du lancement de `{executable}`: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
