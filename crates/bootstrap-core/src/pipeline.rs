//! The bootstrap pipeline
//!
//! A linear sequence of validated, failure-aware steps that turns an empty
//! (or nearly empty) directory into a working project:
//!
//! resolve template -> validate name -> ensure directory -> safety check ->
//! download -> extract -> configure metadata -> git init (optional) ->
//! install dependencies -> init script (optional) -> report
//!
//! Each step runs to completion before the next begins; there is exactly one
//! mutator of the project directory at a time. Any failure short-circuits
//! with a typed [`Error`](crate::Error) and is mapped to exit behavior by
//! the binary. A failed run may leave a partially populated directory behind;
//! the next run's safety check is the only recovery mechanism.

use crate::archive;
use crate::error::{Error, Result};
use crate::project::{init_script, metadata, name, safety};
use crate::registry::{Template, TemplateRegistry};
use crate::runtime::{probe, process};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Feature switches for a pipeline instance.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Accept an archive download URL in place of a registered template name.
    pub allow_arbitrary_url: bool,
    /// Skip interactive confirmation (consumed by the prompt layer).
    pub skip_prompts: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_arbitrary_url: true,
            skip_prompts: false,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    pub app_name: String,
    pub directory: PathBuf,
    pub ran_init_script: bool,
}

/// End-to-end bootstrap orchestration over an injected template registry.
pub struct Pipeline {
    registry: TemplateRegistry,
    options: Options,
    client: reqwest::Client,
}

impl Pipeline {
    pub fn new(registry: TemplateRegistry, options: Options) -> Self {
        Self {
            registry,
            options,
            client: reqwest::Client::builder()
                .user_agent("create-app")
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Run the whole pipeline for one project.
    pub async fn run(&self, requested_template: &str, project_directory: &Path) -> Result<Report> {
        let template = self.resolve_template(requested_template)?;

        let directory = absolutize(project_directory)?;
        let app_name = derive_app_name(&directory);
        let violations = name::check(&app_name);
        if !violations.is_empty() {
            return Err(Error::InvalidName {
                name: app_name,
                violations,
            });
        }

        fs::create_dir_all(&directory).await?;

        // Nothing below may write into the directory before this gate passes.
        match safety::check(&directory).await? {
            safety::Verdict::Safe => {}
            safety::Verdict::Conflicts(entries) => {
                return Err(Error::DirectoryConflict { directory, entries });
            }
        }

        println!(
            "\nBootstrapping template {} in {}.\n",
            template.name.bright_magenta(),
            directory.display().to_string().green()
        );

        println!("Downloading {}...", template.source_url.as_str().cyan());
        let archive_path = directory.join(template.archive_file_name());
        archive::download(&self.client, &template.source_url, &archive_path).await?;

        println!("Extracting files...");
        archive::extract(&archive_path, &directory)?;
        // The archive never outlives the run; a failed extraction above
        // leaves it in place for diagnosis.
        fs::remove_file(&archive_path).await?;

        println!("Configuring {}...", "package.json".cyan());
        metadata::configure(&directory, &app_name).await?;

        // Capability probe, not an error path: no git, no init.
        if probe::command_exists("git") {
            println!("Initializing git...");
            process::run("git", &["init"], &directory).await?;
        }

        println!("Installing dependencies...");
        let status = process::run("npm", &["install"], &directory).await?;
        if !status.success() {
            return Err(Error::InstallFailed { status });
        }

        let ran_init_script = init_script::maybe_run(&directory).await?;

        self.report(&app_name, &directory).await?;

        Ok(Report {
            app_name,
            directory,
            ran_init_script,
        })
    }

    fn resolve_template(&self, requested: &str) -> Result<Template> {
        self.registry
            .resolve(requested, self.options.allow_arbitrary_url)
    }

    async fn report(&self, app_name: &str, directory: &Path) -> Result<()> {
        println!("{}", "\nAvailable scripts:\n".cyan());
        // Listing only; its exit status has no bearing on the run.
        let _status = process::run("npm", &["run"], directory).await?;
        println!(
            "\nDone! Created {} at {}\n",
            app_name.cyan(),
            directory.display().to_string().green()
        );
        Ok(())
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn derive_app_name(directory: &Path) -> String {
    directory
        .file_name()
        .map(|segment| segment.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use url::Url;

    fn pipeline() -> Pipeline {
        let mut registry = TemplateRegistry::new();
        registry.register(
            "lib",
            Url::parse("https://github.com/owner/repo/archive/main.zip").unwrap(),
        );
        Pipeline::new(registry, Options::default())
    }

    #[tokio::test]
    async fn unknown_template_halts_before_touching_the_directory() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("my-app");

        let err = pipeline().run("nope", &target).await.unwrap_err();

        match err {
            Error::UnknownTemplate { requested, available } => {
                assert_eq!(requested, "nope");
                assert_eq!(available, vec!["lib"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn invalid_name_reports_all_violations_and_creates_nothing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("My App!");

        let err = pipeline().run("lib", &target).await.unwrap_err();

        match err {
            Error::InvalidName { name, violations } => {
                assert_eq!(name, "My App!");
                assert!(violations.len() >= 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn conflicting_directory_halts_before_download() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("my-app");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("index.js"), b"taken").unwrap();

        let err = pipeline().run("lib", &target).await.unwrap_err();

        match err {
            Error::DirectoryConflict { entries, .. } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].name, "index.js");
            }
            other => panic!("unexpected error: {other}"),
        }
        // No archive was downloaded into the conflicting directory.
        assert!(!target.join("lib.zip").exists());
    }

    #[tokio::test]
    async fn arbitrary_url_respects_the_option() {
        let mut registry = TemplateRegistry::new();
        registry.register(
            "lib",
            Url::parse("https://github.com/owner/repo/archive/main.zip").unwrap(),
        );
        let gated = Pipeline::new(
            registry,
            Options {
                allow_arbitrary_url: false,
                skip_prompts: false,
            },
        );

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("my-app");
        let err = gated
            .run("https://github.com/other/starter/archive/main.zip", &target)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate { .. }));
    }
}
