//! globcc-core — résolution des arguments et invocation du compilateur C++.
//! - Développe des listes de globs séparées par des virgules (`**` récursif).
//! - Construit une [`BuildRequest`] (includes, sources, dossier de sortie, cible).
//! - Choisit le premier compilateur disponible (clang++ puis g++) et l'exécute une fois.

pub mod config;
pub mod error;
pub mod globs;
pub mod pipeline;
pub mod profile;
pub mod request;
pub mod toolchain;
mod util;

pub use config::BuildConfig;
pub use error::{BuildError, Result};
pub use globs::{GlobList, PathList, DEFAULT_MATCH_OPTIONS};
pub use pipeline::{BuildOutcome, Invoker, Selection};
pub use profile::{CompilerPlan, CompilerProfile};
pub use request::BuildRequest;
pub use toolchain::{SystemToolchain, Toolchain};
