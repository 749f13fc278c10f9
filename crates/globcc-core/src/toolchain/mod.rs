//! Accès aux compilateurs installés : sonde de disponibilité + exécution.

mod system;

use std::io;
use std::path::{Path, PathBuf};

use crate::profile::CompilerPlan;

pub use system::SystemToolchain;

/// Point de coupure entre la sélection du compilateur et le système.
pub trait Toolchain {
    /// Localise `executable` ; `None` = compilateur indisponible.
    fn probe(&self, executable: &str) -> Option<PathBuf>;

    /// Lance `program` avec les arguments du plan, attend la fin, et rend le
    /// code de sortie (`None` si le processus a été tué par un signal).
    fn run(&self, program: &Path, plan: &CompilerPlan) -> io::Result<Option<i32>>;
}

impl<T: Toolchain + ?Sized> Toolchain for &T {
    fn probe(&self, executable: &str) -> Option<PathBuf> {
        (**self).probe(executable)
    }

    fn run(&self, program: &Path, plan: &CompilerPlan) -> io::Result<Option<i32>> {
        (**self).run(program, plan)
    }
}
