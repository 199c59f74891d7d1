use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "block-simple",
    "block-json",
    "span-json",
    "node-json",
    "node-treeviz",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdsite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A static site generator for a small markdown dialect")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("build")
                .about("Build the site")
                .arg(Arg::new("base-path").long("base-path"))
                .arg(
                    Arg::new("content")
                        .long("content")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("static")
                        .long("static")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document between formats")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("from").long("from"))
                .arg(Arg::new("to").long("to").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect internal representations of a markdown file")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(Command::new("generate-template").about("Output the built-in page template"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdsite", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdsite", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdsite", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
