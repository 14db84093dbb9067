//! General build script used by arcstat to generate completion files and a
//! manpage.

#[allow(dead_code)]
#[path = "src/options/args.rs"]
mod args;

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use clap::{Command, CommandFactory};
use clap_complete::{generate_to, shells::Shell};

fn create_dir(dir: &Path) -> io::Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Failed to create a directory at location {dir:?}, encountered error {err:?}.  Aborting...");
        }
    }

    res
}

fn generate_completions(cmd: &mut Command, out_dir: &Path) -> io::Result<()> {
    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, cmd, "arcstat", out_dir)?;
    }

    Ok(())
}

fn generate_manpage(cmd: Command, out_dir: &Path) -> io::Result<()> {
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("arcstat.1"), buffer)
}

fn main() -> io::Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/arcstat/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/arcstat/manpage/";

    match env::var_os("ARCSTAT_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            let mut cmd = args::Args::command();
            generate_completions(&mut cmd, &completion_out_dir)?;
            generate_manpage(cmd, &manpage_out_dir)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=ARCSTAT_GENERATE");

    Ok(())
}
