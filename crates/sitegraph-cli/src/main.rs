use std::env;
use std::fs;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use sitegraph_core::{generate_graph, renderer, Extensions, PageRecord, SiteConfig};

const APP_NAME: &str = "sitegraph";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Copy, PartialEq)]
enum OutputMode {
    ScriptBlock,
    Document,
    DocumentPretty,
}

struct CliOptions {
    snapshot: String,
    mode: OutputMode,
    no_search: bool,
}

enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

/// Host state for one render: the site plus the page being served.
#[derive(Deserialize)]
struct Snapshot {
    site: SiteConfig,
    #[serde(default)]
    page: PageRecord,
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    if args.is_empty() {
        return Ok(CliCommand::Help);
    }

    let mut snapshot: Option<String> = None;
    let mut mode = OutputMode::ScriptBlock;
    let mut no_search = false;
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(CliCommand::Help);
        }

        if matches!(arg.as_str(), "-v" | "--version") {
            return Ok(CliCommand::Version);
        }

        if matches!(arg.as_str(), "-j" | "--json") {
            if mode != OutputMode::ScriptBlock {
                return Err(anyhow!("conflicting output options supplied"));
            }
            mode = OutputMode::Document;
            i += 1;
            continue;
        }

        if matches!(arg.as_str(), "-p" | "--pretty") {
            if mode != OutputMode::ScriptBlock {
                return Err(anyhow!("conflicting output options supplied"));
            }
            mode = OutputMode::DocumentPretty;
            i += 1;
            continue;
        }

        if arg.as_str() == "--no-search" {
            no_search = true;
            i += 1;
            continue;
        }

        if arg.starts_with('-') {
            return Err(anyhow!("unknown flag: {arg}"));
        }

        if snapshot.is_none() {
            snapshot = Some(arg.clone());
        } else {
            return Err(anyhow!("unexpected additional argument: {}", arg));
        }

        i += 1;
    }

    let snapshot = snapshot.ok_or_else(|| anyhow!("missing <snapshot> argument"))?;

    Ok(CliCommand::Run(CliOptions {
        snapshot,
        mode,
        no_search,
    }))
}

fn print_help() {
    println!("{APP_NAME} — schema.org JSON-LD graphs for web pages");
    println!("Usage: {APP_NAME} [OPTIONS] <SNAPSHOT>\n");
    println!("<SNAPSHOT> is a path to a JSON snapshot file, or an inline JSON object");
    println!("of the form {{\"site\": {{...}}, \"page\": {{...}}}}.\n");
    println!("Options:");
    println!("  -j, --json        Print the bare JSON-LD document instead of a script tag");
    println!("  -p, --pretty      Print the indented JSON-LD document");
    println!("      --no-search   Suppress the WebSite SearchAction entry");
    println!("  -v, --version     Show version information");
    println!("  -h, --help        Show this help message");
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}

/// A leading `{` marks the argument as inline JSON; anything else is a
/// file path.
fn load_snapshot(source: &str) -> Result<Snapshot> {
    let raw = if source.trim_start().starts_with('{') {
        source.to_string()
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("cannot read snapshot file: {source}"))?
    };
    serde_json::from_str(&raw).context("invalid snapshot JSON")
}

fn run(options: &CliOptions) -> Result<()> {
    let snapshot = load_snapshot(&options.snapshot)?;

    let mut extensions = Extensions::new();
    if options.no_search {
        extensions = extensions.with_search_disabler(|_| true);
    }

    let graph = generate_graph(&snapshot.site, &snapshot.page, &extensions)?;
    let rendered = match options.mode {
        OutputMode::ScriptBlock => renderer::render_script_block(&graph),
        OutputMode::Document => renderer::render_document(&graph),
        OutputMode::DocumentPretty => renderer::render_document_pretty(&graph),
    };

    match rendered {
        Some(output) => {
            println!("{output}");
            Ok(())
        }
        None => Err(anyhow!("the graph is empty, nothing to render")),
    }
}

fn main() -> Result<()> {
    let raw_args = env::args().skip(1).collect::<Vec<_>>();
    match parse_arguments(&raw_args)? {
        CliCommand::Help => {
            print_help();
            Ok(())
        }
        CliCommand::Version => {
            print_version();
            Ok(())
        }
        CliCommand::Run(options) => run(&options),
    }
}
