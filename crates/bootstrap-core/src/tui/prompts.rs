//! Charm-style CLI prompts using cliclack

use crate::pipeline::Options;
use crate::registry::TemplateRegistry;
use anyhow::Result;
use std::path::PathBuf;

const GITHUB_URL_CHOICE: &str = "github url";
const DEFAULT_DIRECTORY: &str = "my-app";
const DEFAULT_URL_HINT: &str = "https://github.com/<owner>/<repo>/archive/<ref>.zip";

/// Everything the pipeline needs that the CLI may not have provided.
#[derive(Debug, Clone)]
pub struct Answers {
    pub template: String,
    pub project_directory: PathBuf,
}

/// Resolve template and directory from arguments, prompting for whatever is
/// missing. With `skip_prompts` the defaults are taken silently: the first
/// registered template and `my-app`.
pub fn collect(
    registry: &TemplateRegistry,
    options: Options,
    template_arg: Option<String>,
    directory_arg: Option<PathBuf>,
) -> Result<Answers> {
    let template = match template_arg {
        Some(template) => template,
        None => select_template(registry, options)?,
    };

    let project_directory = match directory_arg {
        Some(directory) => directory,
        None if options.skip_prompts => PathBuf::from(DEFAULT_DIRECTORY),
        None => {
            let input: String = cliclack::input("Specify the project directory:")
                .placeholder(DEFAULT_DIRECTORY)
                .default_input(DEFAULT_DIRECTORY)
                .interact()?;
            PathBuf::from(input)
        }
    };

    Ok(Answers {
        template,
        project_directory,
    })
}

fn select_template(registry: &TemplateRegistry, options: Options) -> Result<String> {
    let names = registry.names();
    if names.is_empty() && !options.allow_arbitrary_url {
        anyhow::bail!("No templates registered.");
    }

    if options.skip_prompts {
        return names
            .first()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No templates registered."));
    }

    let mut select = cliclack::select("Which template do you want to use?");
    for name in &names {
        select = select.item(name.as_str(), name, "");
    }
    if options.allow_arbitrary_url {
        select = select.item(GITHUB_URL_CHOICE, GITHUB_URL_CHOICE, "download url of a github repo");
    }

    let choice: &str = select.interact()?;
    if choice == GITHUB_URL_CHOICE {
        let url: String = cliclack::input("Specify the download URL of the github repo:")
            .placeholder(DEFAULT_URL_HINT)
            .interact()?;
        Ok(url)
    } else {
        Ok(choice.to_string())
    }
}
