//! tests/cli.rs — le binaire `globcc` de bout en bout (codes de sortie, usage, dry run).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn globcc(args: &[&str], path_env: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_globcc"))
        .args(args)
        .env("PATH", path_env)
        .env_remove("RUST_LOG")
        .output()
        .expect("lancement de globcc")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn project() -> (tempfile::TempDir, PathBuf) {
    let root = tempfile::tempdir().unwrap();
    let src = root.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("a.cpp"), b"").unwrap();
    fs::write(src.join("b.cpp"), b"").unwrap();
    let bin = root.path().join("bin");
    fs::create_dir(&bin).unwrap();
    (root, bin)
}

#[test]
fn missing_target_prints_usage_and_exits_1() {
    let (_root, bin) = project();
    let out = globcc(&["a.cpp", "/tmp/out"], &bin);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Usage"), "{}", stderr(&out));
}

#[test]
fn unknown_option_exits_1() {
    let (_root, bin) = project();
    let out = globcc(&["-q", "a.cpp", "/tmp/out", "prog"], &bin);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn empty_include_value_exits_1() {
    let (_root, bin) = project();
    let out = globcc(&["-i", "", "a.cpp", "/tmp/out", "prog"], &bin);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn invalid_glob_exits_1() {
    let (_root, bin) = project();
    let out = globcc(&["src/[oops", "/tmp/out", "prog"], &bin);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("src/[oops"));
}

#[test]
fn include_after_positionals_exits_1() {
    let (_root, bin) = project();
    let out = globcc(&["a.cpp", "/tmp/out", "prog", "-i", "inc"], &bin);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("-i"));
}

#[test]
fn help_exits_0() {
    let (_root, bin) = project();
    let out = globcc(&["--help"], &bin);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("IncludeGlobsCommaList"));
}

#[test]
fn no_compiler_exits_127() {
    let (root, bin) = project();
    let pat = format!("{}/src/*.cpp", root.path().display());
    let out = globcc(&[pat.as_str(), "/tmp/out", "prog"], &bin);
    assert_eq!(out.status.code(), Some(127));
    assert!(stderr(&out).contains("aucun compilateur"), "{}", stderr(&out));
}

#[cfg(unix)]
mod with_fake_compilers {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn fake_script(bin: &Path, name: &str, body: &str) {
        let p = bin.join(name);
        fs::write(&p, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&p, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn fake(bin: &Path, name: &str, code: i32) {
        fake_script(bin, name, &format!("exit {code}"));
    }

    #[test]
    fn dry_run_prints_fallback_plan() {
        let (root, bin) = project();
        fake(&bin, "g++", 0);
        let d = root.path().display();
        let pat = format!("{d}/src/a.cpp,{d}/src/b.cpp");
        let out = globcc(&["--dry-run", pat.as_str(), "/tmp/out", "prog"], &bin);

        assert_eq!(out.status.code(), Some(0));
        let line = stdout(&out);
        assert!(line.starts_with("g++ "), "{line}");
        assert!(line.contains("-o /tmp/out/prog"));
        assert!(line.contains("-lcrypto"));
        let a = line.find(&format!("{d}/src/a.cpp")).unwrap();
        let b = line.find(&format!("{d}/src/b.cpp")).unwrap();
        assert!(a < b);
        assert_eq!(line.matches("a.cpp").count(), 1);
    }

    #[test]
    fn compiler_exit_code_is_mirrored() {
        let (root, bin) = project();
        fake(&bin, "clang++", 5);
        let pat = format!("{}/src/*.cpp", root.path().display());
        let out = globcc(&[pat.as_str(), "/tmp/out", "prog"], &bin);
        assert_eq!(out.status.code(), Some(5));
        assert!(stdout(&out).contains('5'));
    }

    #[test]
    fn success_exits_0() {
        let (root, bin) = project();
        fake(&bin, "clang++", 0);
        let pat = format!("{}/src/*.cpp", root.path().display());
        let out = globcc(&["--quiet", pat.as_str(), "out", "prog"], &bin);
        assert_eq!(out.status.code(), Some(0));
        assert!(stdout(&out).contains("prog"));
    }

    #[test]
    fn compiler_killed_by_signal_exits_1() {
        let (root, bin) = project();
        fake_script(&bin, "clang++", "kill -9 $$");
        let pat = format!("{}/src/*.cpp", root.path().display());
        let out = globcc(&[pat.as_str(), "/tmp/out", "prog"], &bin);
        assert_eq!(out.status.code(), Some(1));
        assert!(stdout(&out).contains("signal"), "{}", stdout(&out));
    }

    #[test]
    fn dash_leading_positionals_are_taken_verbatim() {
        let (root, bin) = project();
        fake(&bin, "clang++", 0);
        let pat = format!("{}/src/a.cpp", root.path().display());
        let out = globcc(&["--dry-run", pat.as_str(), "-o", "-t"], &bin);
        assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
        assert!(stdout(&out).contains("/-o/-t"), "{}", stdout(&out));
    }

    #[test]
    fn trailing_double_star_compiles_the_whole_tree() {
        let (root, bin) = project();
        fake(&bin, "clang++", 0);
        let d = root.path().display();
        let srcs = format!("{d}/src/**");
        let out = globcc(&["--dry-run", srcs.as_str(), "/tmp/out", "prog"], &bin);
        let line = stdout(&out);
        assert!(line.contains(&format!("{d}/src/a.cpp")), "{line}");
        assert!(line.contains(&format!("{d}/src/b.cpp")), "{line}");
    }
}
