use std::io;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::BuildConfig;
use crate::error::{BuildError, Result};
use crate::profile::{CompilerPlan, CompilerProfile};
use crate::request::BuildRequest;
use crate::toolchain::{SystemToolchain, Toolchain};

/// Candidat retenu par la sonde : plan + exécutable localisé.
#[derive(Debug, Clone)]
pub struct Selection {
    pub program: PathBuf,
    pub plan: CompilerPlan,
}

/// Résultat d'une compilation lancée.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub plan: CompilerPlan,
    /// Code de sortie du compilateur ; `None` s'il a été tué par un signal.
    pub code: Option<i32>,
}

impl BuildOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Orchestrateur : choisit le premier compilateur disponible et l'exécute.
pub struct Invoker<T = SystemToolchain> {
    cfg: BuildConfig,
    toolchain: T,
}

impl Invoker<SystemToolchain> {
    pub fn new(cfg: BuildConfig) -> Self {
        Self { cfg, toolchain: SystemToolchain::new() }
    }
}

impl<T: Toolchain> Invoker<T> {
    pub fn with_toolchain(cfg: BuildConfig, toolchain: T) -> Self {
        Self { cfg, toolchain }
    }

    /// Candidats disponibles, dans l'ordre de préférence ; la sonde n'est
    /// appelée qu'au fur et à mesure de l'itération.
    fn available<'a>(&'a self, req: &'a BuildRequest) -> impl Iterator<Item = Selection> + 'a {
        self.cfg.candidates.iter().filter_map(move |profile: &CompilerProfile| {
            match self.toolchain.probe(&profile.executable) {
                Some(program) => {
                    debug!("{}: trouvé → {}", profile.name, program.display());
                    Some(Selection { program, plan: profile.plan(req) })
                }
                None => {
                    warn!("{}: `{}` introuvable, candidat suivant", profile.name, profile.executable);
                    None
                }
            }
        })
    }

    fn no_compiler(&self) -> BuildError {
        let tried = self.cfg.candidates.iter().map(|p| p.executable.clone()).collect();
        BuildError::NoCompilerFound { tried }
    }

    /// Premier candidat disponible, sans rien exécuter.
    pub fn select(&self, req: &BuildRequest) -> Result<Selection> {
        self.available(req).next().ok_or_else(|| self.no_compiler())
    }

    /// Compile `req` avec un seul compilateur : le premier qui se lance.
    /// Un `NotFound` au lancement (compilateur disparu après la sonde) passe
    /// au candidat suivant ; toute autre erreur d'E/S est fatale.
    pub fn invoke(&self, req: &BuildRequest) -> Result<BuildOutcome> {
        for Selection { program, plan } in self.available(req) {
            info!("compilateur: {}", plan.profile());
            info!("commande: {plan}");
            match self.toolchain.run(&program, &plan) {
                Ok(code) => {
                    debug!("{} → code {:?}", plan.executable(), code);
                    return Ok(BuildOutcome { plan, code });
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!("{}: lancement impossible ({e}), candidat suivant", plan.executable());
                }
                Err(source) => {
                    return Err(BuildError::Spawn { executable: plan.executable().to_string(), source });
                }
            }
        }
        Err(self.no_compiler())
    }
}
