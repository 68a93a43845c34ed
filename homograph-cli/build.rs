//! Build script for homograph-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("homograph")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonicalize paths and detect path homographs")
        .long_about(
            "Command-line tool for resolving path strings to a canonical form and \
             checking whether two paths name the same location",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("working-dir")
                .long("working-dir")
                .help("Working directory relative paths are resolved against")
                .value_name("DIR")
                .global(true)
                .env("HOMOGRAPH_WORKING_DIR"),
        )
        .arg(
            Arg::new("forbidden")
                .long("forbidden")
                .help("Forbidden path candidates are compared with")
                .value_name("PATH")
                .global(true)
                .env("HOMOGRAPH_FORBIDDEN"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("DIR")
                .global(true)
                .env("HOMOGRAPH_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("canonicalize")
                .about("Print the canonical form of each path")
                .long_about("Resolve each path against the working directory and print it"),
            Command::new("check")
                .about("Check whether a path is a homograph")
                .long_about(
                    "Compare a path with another path or the forbidden path and print the verdict",
                ),
            Command::new("run")
                .about("Run the configured test cases")
                .long_about("Run every test case against the scenario and print a report"),
            Command::new("interactive")
                .about("Start the interactive menu")
                .long_about("Run test cases or compare paths typed at a prompt"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a homograph configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("homograph.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
