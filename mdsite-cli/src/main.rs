// Command-line interface for mdsite
//
// This binary builds static sites from markdown content and provides commands for converting and
// inspecting single documents.
//
// The core capabilities use the mdsite-babel crate. This crate only wires them to a shell: it reads
// configuration, files and flags, and reports errors.
//
// Building:
//
// A site is a content directory of markdown files, a static directory copied as is, and a page
// template. All locations come from mdsite.toml (or --config) and can be overridden by flags.
//
// Usage:
//  mdsite build [--base-path <p>] [--content <dir>] [--static <dir>] [--output <dir>] [--template <file>]
//  mdsite convert <input> --to <format> [--from <format>] [--output <file>]
//  mdsite inspect <path> [<transform>]     - Execute a transform (defaults to "node-treeviz")
//  mdsite generate-template                - Print the built-in page template
//  mdsite --list-transforms                - List available transforms

use mdsite_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdsite_babel::formats::treeviz::TreevizOptions;
use mdsite_babel::publish::{publish, PublishSpec};
use mdsite_babel::templates::DEFAULT_TEMPLATE;
use mdsite_babel::{markdown_to_html, FormatRegistry};
use mdsite_config::{Loader, MdsiteConfig};
use std::fs;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "mdsite.toml";

/// Flags of `build` and the config keys they override.
const BUILD_OVERRIDES: &[(&str, &str)] = &[
    ("base-path", "site.base_path"),
    ("content", "site.content_dir"),
    ("static", "site.static_dir"),
    ("output", "site.output_dir"),
    ("template", "site.template"),
];

fn build_cli() -> Command {
    Command::new("mdsite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A static site generator for a small markdown dialect")
        .long_about(
            "mdsite turns a directory of markdown files into a static HTML site.\n\n\
            Commands:\n  \
            - build:             Publish the site (static files + one page per .md file)\n  \
            - convert:           Convert a single document between formats\n  \
            - inspect:           View internal representations (blocks, spans, render tree)\n  \
            - generate-template: Print the built-in page template\n\n\
            Examples:\n  \
            mdsite build                              # Build using mdsite.toml or defaults\n  \
            mdsite build --base-path /blog/           # Serve the site from a sub-path\n  \
            mdsite convert index.md --to html         # Convert to HTML (outputs to stdout)\n  \
            mdsite inspect index.md                   # View render tree visualization",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdsite.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Build the site")
                .long_about(
                    "Empty the output directory, copy static files into it, then render every\n\
                    markdown file of the content directory into a page.\n\n\
                    The first page that fails to convert aborts the build.\n\n\
                    Examples:\n  \
                    mdsite build                                 # Use configured directories\n  \
                    mdsite build --base-path /repo/ --output docs # GitHub pages style layout",
                )
                .arg(
                    Arg::new("base-path")
                        .long("base-path")
                        .value_name("PATH")
                        .help("Prefix for root-relative links (default '/')"),
                )
                .arg(
                    Arg::new("content")
                        .long("content")
                        .value_name("DIR")
                        .help("Markdown content directory")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("static")
                        .long("static")
                        .value_name("DIR")
                        .help("Static assets directory")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .help("Output directory (emptied before building)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .value_name("FILE")
                        .help("Page template; the built-in one is used if it does not exist")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document between formats")
                .long_about(
                    "Convert a single document.\n\n\
                    Supported formats:\n  \
                    - markdown: mdsite markdown dialect (.md), input only\n  \
                    - html:     HTML fragment (.html), output only\n  \
                    - treeviz:  Render tree visualization (.tree), output only\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect internal representations of a markdown file")
                .long_about(
                    "View the structure of a markdown file at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - block-simple:  Classified blocks, one per line\n  \
                    - block-json:    Classified blocks as JSON\n  \
                    - span-json:     Inline spans of the whole input as JSON\n  \
                    - node-json:     Render tree as JSON\n  \
                    - node-treeviz:  Render tree visualization (default)",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'node-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-template")
                .about("Output the built-in page template")
                .long_about(
                    "Outputs the page template used when the configured template file does\n\
                    not exist. Save it, customize it, and point site.template at it.\n\n\
                    Examples:\n  \
                    mdsite generate-template > template.html",
                ),
        )
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config_path = matches.get_one::<String>("config").map(String::as_str);

    match matches.subcommand() {
        Some(("build", sub_matches)) => {
            let config = load_cli_config(config_path, &build_overrides(sub_matches));
            handle_build_command(&config);
        }
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => FormatRegistry::default()
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| {
                        error!("Could not detect format from filename '{input}'");
                        error!("Please specify --from explicitly");
                        process::exit(1);
                    }),
            };

            let output = sub_matches.get_one::<String>("output").map(String::as_str);
            handle_convert_command(input, &from, to, output);
        }
        Some(("inspect", sub_matches)) => {
            let config = load_cli_config(config_path, &[]);
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(String::as_str)
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &config);
        }
        Some(("generate-template", _)) => {
            print!("{DEFAULT_TEMPLATE}");
        }
        _ => {
            error!("Unknown subcommand. Use --help for usage information.");
            process::exit(1);
        }
    }
}

/// Handle the build command
fn handle_build_command(config: &MdsiteConfig) {
    let mut spec = PublishSpec::from(&config.site);
    if let Some(template) = &spec.template {
        if !template.exists() {
            warn!(
                template = %template.display(),
                "template not found, using the built-in template"
            );
            spec.template = None;
        }
    }

    match publish(&spec) {
        Ok(report) => info!(
            "Built {} pages and {} static files into {}",
            report.pages.len(),
            report.static_files.len(),
            spec.output_dir.display()
        ),
        Err(e) => {
            error!("Build failed: {e}");
            process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, from: &str, to: &str, output: Option<&str>) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            error!("{e}");
            process::exit(1);
        }
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        error!("Error reading file '{input}': {e}");
        process::exit(1);
    });

    let result = if from == "markdown" && to == "html" {
        markdown_to_html(&source)
    } else {
        registry
            .parse(&source, from)
            .and_then(|root| registry.serialize(&root, to))
    };
    let text = result.unwrap_or_else(|e| {
        error!("Conversion error: {e}");
        process::exit(1);
    });

    match output {
        Some(path) => fs::write(path, text).unwrap_or_else(|e| {
            error!("Error writing file '{path}': {e}");
            process::exit(1);
        }),
        None => print!("{text}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, config: &MdsiteConfig) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        error!("Error reading file '{path}': {e}");
        process::exit(1);
    });

    let options = TreevizOptions::from(&config.inspect.treeviz);
    let output = transforms::execute_transform(&source, transform, &options).unwrap_or_else(|e| {
        error!("Execution error: {e}");
        process::exit(1);
    });

    print!("{output}");
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  block       - Segmented and classified blocks");
    println!("  span        - Inline spans");
    println!("  node        - Render tree (final compiled document)\n");

    println!("Formats:");
    println!("  json        - JSON output (all stages)");
    println!("  simple      - One line per block (blocks only)");
    println!("  treeviz     - Tree visualization (render tree only)\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

/// Collect the `build` flags that were given, keyed by config path.
fn build_overrides(matches: &ArgMatches) -> Vec<(&'static str, String)> {
    BUILD_OVERRIDES
        .iter()
        .filter_map(|(flag, key)| {
            matches
                .get_one::<String>(flag)
                .map(|value| (*key, value.clone()))
        })
        .collect()
}

fn load_cli_config(explicit_path: Option<&str>, overrides: &[(&str, String)]) -> MdsiteConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    let mut loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    for (key, value) in overrides {
        loader = loader
            .set_override(key, value.as_str())
            .unwrap_or_else(|err| {
                error!("Invalid override for {key}: {err}");
                process::exit(1);
            });
    }

    loader.build().unwrap_or_else(|err| {
        error!("Failed to load configuration: {err}");
        process::exit(1);
    })
}
