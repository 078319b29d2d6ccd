//! create-app - Bootstrap a new project from a remote template archive

use anyhow::Result;
use bootstrap_core::project::safety;
use bootstrap_core::{tui, Error, Options, Pipeline, TemplateRegistry};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "create-app")]
#[command(about = "Bootstrap a new project from a remote template archive")]
#[command(version)]
pub struct Args {
    /// Template name, or the download URL of a github repo archive
    pub template: Option<String>,

    /// Project directory to create
    pub project_directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

/// The built-in template registry. Injected into the pipeline; nothing here
/// is process-wide state.
fn default_registry() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    for (name, url) in [
        (
            "express-rest",
            "https://github.com/danielfsousa/express-rest-boilerplate/archive/master.zip",
        ),
        (
            "typescript-lib",
            "https://github.com/danielfsousa/typescript-lib-starter/archive/main.zip",
        ),
        (
            "monorepo-typescript-lib",
            "https://github.com/danielfsousa/monorepo-typescript-lib-starter/archive/main.zip",
        ),
    ] {
        if let Ok(url) = Url::parse(url) {
            registry.register(name, url);
        }
    }
    registry
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    if let Err(err) = run(args).await {
        report_failure(&err);
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let registry = default_registry();
    let options = Options {
        allow_arbitrary_url: true,
        skip_prompts: args.yes,
    };

    let answers = tui::collect(&registry, options, args.template, args.project_directory)?;

    let pipeline = Pipeline::new(registry, options);
    pipeline
        .run(&answers.template, &answers.project_directory)
        .await?;

    Ok(())
}

/// Targeted diagnostics per failure class; everything exits 1.
fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::InvalidName { name, violations }) => {
            eprintln!(
                "{}",
                format!(
                    "Cannot create a project named \"{}\" because of npm naming restrictions:\n",
                    name
                )
                .red()
            );
            for violation in violations {
                eprintln!("{}", format!("  * {}", violation).red());
            }
            eprintln!("{}", "\nPlease choose a different project name.".red());
        }
        Some(Error::UnknownTemplate { requested, available }) => {
            eprintln!(
                "\n{} {}",
                requested.bright_magenta(),
                "is not a valid template or a valid github download url".red()
            );
            if !available.is_empty() {
                let names = available
                    .iter()
                    .map(|name| name.bright_magenta().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("\nAvailable templates: {}", names);
            }
        }
        Some(Error::DirectoryConflict { directory, entries }) => {
            let app_name = directory
                .file_name()
                .map(|segment| segment.to_string_lossy().into_owned())
                .unwrap_or_else(|| directory.display().to_string());
            safety::print_conflicts(&app_name, entries);
        }
        _ => {
            eprintln!("{} {:#}", "Error:".red(), err);
        }
    }
}
