use glob::MatchOptions;

use crate::globs::DEFAULT_MATCH_OPTIONS;
use crate::profile::CompilerProfile;

/// Configuration d'une exécution.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Compilateurs candidats, par ordre de préférence (le premier disponible gagne).
    pub candidates: Vec<CompilerProfile>,
    /// Règles de correspondance des globs.
    pub match_options: MatchOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            candidates: vec![CompilerProfile::clang_strict(), CompilerProfile::gnu_static()],
            match_options: DEFAULT_MATCH_OPTIONS,
        }
    }
}
