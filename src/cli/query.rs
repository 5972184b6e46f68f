//! Query command implementation.
//!
//! Runs the frontmatter pass over the requested files and prints each
//! document's resolved frontmatter as JSON.

use std::fs;
use std::io::Write;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::content::{ProcessedDocument, collect_content_files, process_files};
use crate::log;
use crate::page::{Frontmatter, FrontmatterFormat};
use crate::pipeline::TransformPipeline;
use crate::utils::{path::display_relative, plural_count};

/// Result for a single queried document
#[derive(Debug, Serialize)]
pub struct DocumentQueryResult<'a> {
    pub path: String,
    pub format: FrontmatterFormat,
    pub layout_defaulted: bool,
    pub frontmatter: &'a Frontmatter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'a str>,
}

impl<'a> DocumentQueryResult<'a> {
    fn new(processed: &'a ProcessedDocument, with_body: bool, config: &SiteConfig) -> Self {
        Self {
            path: display_relative(&processed.doc.path, &config.build.content),
            format: processed.doc.format,
            layout_defaulted: processed.layout_defaulted,
            frontmatter: &processed.doc.frontmatter,
            body: with_body.then_some(processed.doc.body.as_str()),
        }
    }
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_content_files(&args.paths, &config.build.content)?;
    log!("query"; "querying {}", plural_count(files.len(), "file"));

    let pipeline = TransformPipeline::from_config(&config.markdown);
    let pass = process_files(&files, &pipeline);

    for failure in &pass.failures {
        log!("error"; "{}", failure);
    }

    let results = select_results(&pass.documents, args, config);
    log!("query"; "found {}", plural_count(results.len(), "document"));

    let formatted = format_results(&results, args.pretty)?;
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{formatted}")?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    if !pass.failures.is_empty() {
        bail!("{} could not be read", plural_count(pass.failures.len(), "document"));
    }
    Ok(())
}

fn select_results<'a>(
    documents: &'a [ProcessedDocument],
    args: &QueryArgs,
    config: &SiteConfig,
) -> Vec<DocumentQueryResult<'a>> {
    documents
        .iter()
        .filter(|d| !args.defaulted || d.layout_defaulted)
        .map(|d| DocumentQueryResult::new(d, args.body, config))
        .collect()
}

fn format_results(results: &[DocumentQueryResult<'_>], pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };
    Ok(formatted)
}
