//! Template registry and archive URL recognition
//!
//! The registry is an explicit value injected into the pipeline at
//! construction; there is no process-wide template state. A template request
//! resolves either to a registered name or, when the pipeline allows it, to
//! an ad-hoc archive download URL of the shape
//! `https?://<host>/<owner>/<repo>/archive/<ref>.zip`.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use url::Url;

/// Where a resolved template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrigin {
    Registered,
    DirectUrl,
}

/// A resolved template: exactly one source URL, immutable once built.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    pub source_url: Url,
    pub origin: TemplateOrigin,
}

impl Template {
    /// Local file name for the downloaded archive. Registered templates use
    /// `<name>.zip`; direct URLs keep the URL's own basename.
    pub fn archive_file_name(&self) -> String {
        match self.origin {
            TemplateOrigin::Registered => format!("{}.zip", self.name),
            TemplateOrigin::DirectUrl => self
                .source_url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}.zip", self.name)),
        }
    }
}

/// Name -> archive URL mapping, sorted for stable listings.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Url>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, url: Url) {
        self.templates.insert(name.into(), url);
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Registered template names, in sorted order.
    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    /// Resolve a requested template name or (when allowed) archive URL.
    pub fn resolve(&self, requested: &str, allow_arbitrary_url: bool) -> Result<Template> {
        if let Some(url) = self.templates.get(requested) {
            return Ok(Template {
                name: requested.to_string(),
                source_url: url.clone(),
                origin: TemplateOrigin::Registered,
            });
        }

        if allow_arbitrary_url {
            if let Some(url) = parse_archive_url(requested) {
                // The repo segment is the closest thing to a template name.
                let name = url
                    .path_segments()
                    .and_then(|mut segments| segments.nth(1))
                    .unwrap_or("template")
                    .to_string();
                return Ok(Template {
                    name,
                    source_url: url,
                    origin: TemplateOrigin::DirectUrl,
                });
            }
        }

        Err(Error::UnknownTemplate {
            requested: requested.to_string(),
            available: self.names(),
        })
    }
}

/// Accept only `https?://<host>/<owner>/<repo>/archive/<ref>.zip`.
pub fn parse_archive_url(input: &str) -> Option<Url> {
    let url = Url::parse(input).ok()?;

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str()?;

    let segments: Vec<&str> = url.path_segments()?.collect();
    match segments.as_slice() {
        [owner, repo, archive, file]
            if !owner.is_empty()
                && !repo.is_empty()
                && *archive == "archive"
                && file.len() > ".zip".len()
                && file.ends_with(".zip") =>
        {
            Some(url)
        }
        _ => None,
    }
}
