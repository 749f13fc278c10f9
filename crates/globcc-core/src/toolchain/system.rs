use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use super::Toolchain;
use crate::profile::CompilerPlan;

/// Compilateurs réels, recherchés dans `PATH` (ou un chemin de recherche fourni).
#[derive(Debug, Clone, Default)]
pub struct SystemToolchain {
    search_path: Option<OsString>,
}

impl SystemToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remplace `PATH` pour la recherche (même syntaxe : entrées séparées par `:`/`;`).
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self { search_path: Some(search_path.into()) }
    }

    fn search_path(&self) -> Option<OsString> {
        self.search_path.clone().or_else(|| std::env::var_os("PATH"))
    }
}

impl Toolchain for SystemToolchain {
    fn probe(&self, executable: &str) -> Option<PathBuf> {
        let exe = Path::new(executable);
        // Un chemin explicite n'est pas recherché dans PATH.
        if exe.components().count() > 1 {
            return is_executable(exe).then(|| exe.to_path_buf());
        }
        let paths = self.search_path()?;
        std::env::split_paths(&paths)
            .flat_map(|dir| candidates(&dir, executable))
            .find(|p| is_executable(p))
    }

    fn run(&self, program: &Path, plan: &CompilerPlan) -> io::Result<Option<i32>> {
        debug!("exec {} ({} args)", program.display(), plan.args().len());
        let status = Command::new(program).args(plan.args()).status()?;
        Ok(status.code())
    }
}

#[cfg(windows)]
fn candidates(dir: &Path, executable: &str) -> Vec<PathBuf> {
    vec![dir.join(executable), dir.join(format!("{executable}.exe"))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, executable: &str) -> Vec<PathBuf> {
    vec![dir.join(executable)]
}

#[cfg(unix)]
fn is_executable(p: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(p).map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(p: &Path) -> bool {
    p.is_file()
}
