use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use glob::MatchOptions;
use log::info;

use crate::error::Result;
use crate::globs::{display_list, expand_comma_list, PathList};
use crate::util::paths::absolutize_utf8;

/// Ce qu'il faut compiler, et où. Construit une fois, jamais modifié.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    includes: PathList,
    sources: PathList,
    result_dir: Utf8PathBuf,
    target_name: String,
}

impl BuildRequest {
    /// `result_dir` est rendu absolu sans test d'existence ; `target_name` est pris tel quel.
    pub fn new(
        includes: PathList,
        sources: PathList,
        result_dir: &Path,
        target_name: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            includes,
            sources,
            result_dir: absolutize_utf8(result_dir)?,
            target_name: target_name.into(),
        })
    }

    /// Résout les arguments bruts : chaque `-i` est développé puis ajouté,
    /// dans l'ordre de la ligne de commande.
    pub fn resolve<S: AsRef<str>>(
        include_args: &[S],
        source_arg: &str,
        result_dir: &Path,
        target_name: &str,
        opts: MatchOptions,
    ) -> Result<Self> {
        let mut includes = PathList::default();
        for raw in include_args {
            includes.append(expand_comma_list(raw.as_ref(), opts)?);
        }
        info!("includes: {:?}", display_list(&includes));

        let sources = expand_comma_list(source_arg, opts)?;
        info!("sources: {:?}", display_list(&sources));

        let req = Self::new(includes, sources, result_dir, target_name)?;
        info!("dossier de sortie (absolu): {}", req.result_dir);
        info!("cible: {}", req.target_name);
        Ok(req)
    }

    pub fn includes(&self) -> &PathList {
        &self.includes
    }

    pub fn sources(&self) -> &PathList {
        &self.sources
    }

    pub fn result_dir(&self) -> &Utf8Path {
        &self.result_dir
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// `<result_dir>/<target_name>`
    pub fn output_path(&self) -> Utf8PathBuf {
        self.result_dir.join(&self.target_name)
    }
}
