//! globcc-cli/src/lib.rs — CLI lib pour globcc
//!
//! Synopsis :
//!   globcc [-i IncludeGlobsCommaList]... SourceGlobsCommaList ResultDir TargetName
//!
//! Codes de sortie : 0 succès, 1 usage, n = code du compilateur, 127 aucun compilateur.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use color_eyre::eyre::Result;
use log::{error, info};

use globcc_core::{BuildConfig, BuildError, BuildRequest, Invoker};

pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const USAGE: i32 = 1;
    /// Compilateur tué par un signal (pas de code de sortie).
    pub const SIGNALED: i32 = 1;
    pub const NO_COMPILER: i32 = 127;
}

#[derive(Parser, Debug)]
#[command(
    name = "globcc",
    version,
    about = "Développe des globs et compile le tout en un seul binaire (clang++, sinon g++)",
    after_long_help = "IncludeGlobsCommaList, SourceGlobsCommaList : motifs séparés par des virgules, `**` récursif.\n\
                       Un motif sans correspondance ne donne aucun fichier (pas d'erreur)."
)]
pub struct Cli {
    /// Globs des en-têtes / répertoires d'en-têtes (répétable : les listes s'ajoutent)
    #[arg(
        short = 'i',
        value_name = "IncludeGlobsCommaList",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub includes: Vec<String>,

    /// Globs des fichiers sources (une chaîne vide donne une liste vide)
    #[arg(value_name = "SourceGlobsCommaList")]
    pub sources: String,

    /// Où écrire le binaire (rendu absolu, non créé)
    #[arg(value_name = "ResultDir", allow_hyphen_values = true)]
    pub result_dir: OsString,

    /// Nom du binaire produit (pris tel quel)
    #[arg(value_name = "TargetName", allow_hyphen_values = true)]
    pub target_name: String,

    /// Affiche la commande du compilateur retenu sans l'exécuter
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosité (répéter pour plus de bruit) ; pas de forme courte, seul `-i` en a une
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,

    /// N'affiche que les avertissements et erreurs
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// `args` inclut le nom du programme.
///
/// Les options ne sont lues qu'en tête : un `-i` placé après
/// SourceGlobsCommaList est refusé.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = Cli::command();
    let matches = cmd.try_get_matches_from_mut(args)?;
    if let (Some(src), Some(mut inc)) = (matches.index_of("sources"), matches.indices_of("includes")) {
        if inc.any(|i| i > src) {
            return Err(cmd.error(
                ErrorKind::ArgumentConflict,
                "`-i` doit précéder SourceGlobsCommaList",
            ));
        }
    }
    Cli::from_arg_matches(&matches)
}

/// Affiche l'erreur de clap (+ l'aide complète si c'est une erreur d'usage)
/// et rend le code de sortie à utiliser.
pub fn report_usage_error(e: &clap::Error) -> i32 {
    e.print().ok();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit::SUCCESS,
        _ => {
            print_usage();
            exit::USAGE
        }
    }
}

pub fn print_usage() {
    eprintln!("\n{}", Cli::command().render_long_help());
}

/// Niveau de log : `--quiet` → warn, défaut info, `--verbose` → debug, deux fois → trace.
/// `RUST_LOG` garde le dernier mot.
pub fn init_logging(cli: &Cli) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();
}

/// Résout les arguments puis compile (ou affiche le plan avec `--dry-run`).
/// Les échecs attendus deviennent un code de sortie ; le reste remonte en `Err`.
pub fn execute(cli: &Cli) -> Result<i32> {
    let cfg = BuildConfig::default();
    let req = match BuildRequest::resolve(
        &cli.includes,
        &cli.sources,
        &PathBuf::from(&cli.result_dir),
        &cli.target_name,
        cfg.match_options,
    ) {
        Ok(req) => req,
        Err(e @ BuildError::InvalidPattern { .. }) => {
            error!("{e}");
            print_usage();
            return Ok(exit::USAGE);
        }
        Err(e) => return Err(e.into()),
    };

    let invoker = Invoker::new(cfg);

    if cli.dry_run {
        return match invoker.select(&req) {
            Ok(sel) => {
                println!("{}", sel.plan);
                Ok(exit::SUCCESS)
            }
            Err(e @ BuildError::NoCompilerFound { .. }) => {
                error!("{e}");
                Ok(exit::NO_COMPILER)
            }
            Err(e) => Err(e.into()),
        };
    }

    match invoker.invoke(&req) {
        Ok(outcome) if outcome.success() => {
            println!("✅ succès → {}", req.output_path());
            Ok(exit::SUCCESS)
        }
        Ok(outcome) => {
            let code = match outcome.code {
                Some(code) => {
                    println!("❌ code de sortie non nul: {code}");
                    code
                }
                None => {
                    println!("❌ {} interrompu par un signal", outcome.plan.executable());
                    exit::SIGNALED
                }
            };
            info!("échec avec {}", outcome.plan.profile());
            Ok(code)
        }
        Err(e @ BuildError::NoCompilerFound { .. }) => {
            error!("{e}");
            Ok(exit::NO_COMPILER)
        }
        Err(e) => Err(e.into()),
    }
}
