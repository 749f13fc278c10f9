//! Profils de compilateur (jeu de flags figé) et plans (profil appliqué à une requête).

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::request::BuildRequest;

/// Un candidat de la liste de préférence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerProfile {
    /// Nom affiché dans les logs.
    pub name: String,
    /// Nom (ou chemin) de l'exécutable.
    pub executable: String,
    /// Flags placés avant `-o`.
    pub prefix_flags: Vec<String>,
    /// Flags placés après les sources (bibliothèques à lier).
    pub suffix_flags: Vec<String>,
}

impl CompilerProfile {
    pub fn new(name: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            executable: executable.into(),
            prefix_flags: Vec::new(),
            suffix_flags: Vec::new(),
        }
    }

    pub fn prefix<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    pub fn suffix<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffix_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Candidat préféré : clang++, C++14 strict, debug, sans optimisation.
    pub fn clang_strict() -> Self {
        Self::new("clang++ (strict)", "clang++").prefix([
            "-m64", "-g", "-O0", "-std=c++14", "-pedantic", "-Wall", "-Wextra",
        ])
    }

    /// Repli : g++ avec runtime, threads, crypto et filesystem liés explicitement.
    pub fn gnu_static() -> Self {
        Self::new("g++ (libs statiques)", "g++")
            .prefix([
                "-m64", "-x", "c++", "-g", "-O0", "-std=c++14", "-pedantic", "-pipe",
                "-pthread", "-B", "/usr/local/include", "-Wall", "-Wextra",
            ])
            .suffix(["-lrt", "-lstdc++fs", "-lcrypto", "-pipe", "-pthread"])
    }

    /// Ligne de commande complète pour `req`.
    pub fn plan(&self, req: &BuildRequest) -> CompilerPlan {
        let mut args: Vec<OsString> = self.prefix_flags.iter().map(OsString::from).collect();
        args.push("-o".into());
        args.push(req.output_path().into_string().into());
        for dir in include_dirs(req.includes().as_slice()) {
            let mut flag = OsString::from("-I");
            flag.push(dir.as_os_str());
            args.push(flag);
        }
        args.extend(req.sources().iter().map(|p| p.as_os_str().to_os_string()));
        args.extend(self.suffix_flags.iter().map(OsString::from));
        CompilerPlan { profile: self.name.clone(), executable: self.executable.clone(), args }
    }
}

/// Un fichier d'en-tête donne son répertoire parent ; un répertoire est gardé
/// tel quel. Un même répertoire ne produit qu'un seul `-I`, à sa première
/// occurrence.
fn include_dirs(entries: &[PathBuf]) -> Vec<&Path> {
    let mut dirs: Vec<&Path> = Vec::new();
    for p in entries {
        let dir = if p.is_dir() { p.as_path() } else { p.parent().unwrap_or(p.as_path()) };
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// Commande concrète d'un candidat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerPlan {
    profile: String,
    executable: String,
    args: Vec<OsString>,
}

impl CompilerPlan {
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Vrai si `arg` figure tel quel parmi les arguments.
    pub fn contains(&self, arg: impl AsRef<OsStr>) -> bool {
        let arg = arg.as_ref();
        self.args.iter().any(|a| a == arg)
    }
}

impl fmt::Display for CompilerPlan {
    /// Forme shell lisible (guillemets simples autour des arguments à espaces).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable)?;
        for a in &self.args {
            let a = a.to_string_lossy();
            if a.is_empty() || a.contains(|c: char| c.is_whitespace() || c == '\'') {
                write!(f, " '{}'", a.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {a}")?;
            }
        }
        Ok(())
    }
}
