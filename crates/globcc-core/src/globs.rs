//! Listes de globs séparées par des virgules → listes de chemins absolus.
//!
//! `"src/**/*.cpp, lib/*.cc"` donne deux motifs ; les segments vides sont
//! ignorés, un motif sans correspondance donne zéro chemin (pas d'erreur).

use std::path::{Path, PathBuf};

use glob::MatchOptions;
use log::{debug, trace, warn};

use crate::error::{BuildError, Result};
use crate::util::paths::absolutize;

/// Options de correspondance par défaut : `*` ne traverse pas `/` et ne
/// capture pas les fichiers cachés.
pub const DEFAULT_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Motifs issus d'un seul argument de la ligne de commande.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobList {
    patterns: Vec<String>,
}

impl GlobList {
    pub fn parse(raw: &str) -> Self {
        let patterns = raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Développe chaque motif dans l'ordre (`**` récursif). Les doublons
    /// entre motifs sont conservés.
    ///
    /// Un `**` final (`dir/**`) donne `dir` puis tout ce qu'il contient,
    /// fichiers et sous-dossiers.
    pub fn expand(&self, opts: MatchOptions) -> Result<PathList> {
        let mut out = PathList::default();
        for pattern in &self.patterns {
            let before = out.len();
            match recursive_tail(pattern) {
                Some((root, descendants)) => {
                    if let Some(root) = root {
                        glob_into(pattern, root, opts, Path::is_dir, &mut out)?;
                    }
                    glob_into(pattern, &descendants, opts, |_| true, &mut out)?;
                }
                None => glob_into(pattern, pattern, opts, |_| true, &mut out)?,
            }
            trace!("glob `{pattern}` → {} chemin(s)", out.len() - before);
        }
        Ok(out)
    }
}

/// `x/**` → (`Some("x")`, `"x/**/*"`) ; `**` seul → (`None`, `"**/*"`).
/// `None` si le dernier composant n'est pas exactement `**`.
fn recursive_tail(pattern: &str) -> Option<(Option<&str>, String)> {
    let head = pattern.strip_suffix("**")?;
    if head.is_empty() {
        return Some((None, "**/*".to_string()));
    }
    let root = match head.strip_suffix('/')? {
        "" => "/",
        root => root,
    };
    Some((Some(root), format!("{head}**/*")))
}

/// Ajoute à `out` les correspondances de `expr` retenues par `keep`.
/// `pattern` est le motif tel que saisi, pour les messages.
fn glob_into(
    pattern: &str,
    expr: &str,
    opts: MatchOptions,
    keep: impl Fn(&Path) -> bool,
    out: &mut PathList,
) -> Result<()> {
    let entries = glob::glob_with(expr, opts)
        .map_err(|source| BuildError::InvalidPattern { pattern: pattern.to_string(), source })?;
    for entry in entries {
        match entry {
            Ok(p) if keep(p.as_path()) => out.push(absolutize(&p)?),
            Ok(_) => {}
            Err(e) => warn!("glob `{pattern}`: entrée ignorée ({e})"),
        }
    }
    Ok(())
}

/// Chemins résolus, dans l'ordre de correspondance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList(Vec<PathBuf>);

impl PathList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn push(&mut self, p: PathBuf) {
        self.0.push(p);
    }

    /// Ajout en fin de liste (un `-i` répété accumule).
    pub fn append(&mut self, other: PathList) {
        self.0.extend(other.0);
    }
}

impl From<Vec<PathBuf>> for PathList {
    fn from(v: Vec<PathBuf>) -> Self {
        Self(v)
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Un argument brut de la ligne de commande → chemins absolus.
pub fn expand_comma_list(raw: &str, opts: MatchOptions) -> Result<PathList> {
    let list = GlobList::parse(raw);
    debug!("`{raw}` → motifs {:?}", list.patterns());
    list.expand(opts)
}

/// Forme lisible pour les logs.
pub fn display_list(list: &PathList) -> Vec<String> {
    list.iter().map(|p| p.display().to_string()).collect()
}
