//! # Site Generation
//!
//! Drives the conversion core over a content directory: every `.md` file is
//! converted, dropped into a page template and written as `.html` at the same
//! relative path under the output directory. Static assets are copied over
//! unchanged.
//!
//! The core knows nothing about titles, templates or base paths; all of that
//! happens here, around the HTML string it returns.

pub mod template;

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{error::ConvertError, io, parsing::markdown_to_html};

pub use template::{extract_title, render_template, rewrite_base_path};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no `# ` heading to use as the page title")]
    MissingTitle,
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("failed to generate page from {path}: {source}")]
    Page {
        path: PathBuf,
        source: Box<SiteError>,
    },
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::IoError),
}

/// Where a site build reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    /// Prefix replacing the leading `/` of root-relative links, e.g. `/repo/`.
    pub base_path: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}

/// What a site build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Output paths of generated pages, relative to the output directory.
    pub pages: Vec<RelativePathBuf>,
    /// Copied static files, relative to the output directory.
    pub assets: Vec<RelativePathBuf>,
}

/// Renders one markdown document into a complete page.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, SiteError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    let page = render_template(template, &title, &content);
    Ok(rewrite_base_path(&page, base_path))
}

/// Converts `from` and writes the finished page to `dest`.
pub fn generate_page(
    from: &Path,
    template: &str,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!("Generating page from {} to {}", from.display(), dest.display());

    let markdown = io::read_path(from)?;
    let page =
        render_page(&markdown, template, base_path).map_err(|source| SiteError::Page {
            path: from.to_path_buf(),
            source: Box::new(source),
        })?;
    io::write_path(dest, &page)?;
    Ok(())
}

/// Generates a page for every markdown file under `content_dir`.
///
/// `a/b.md` becomes `a/b.html` under `dest_dir`. Returns the generated paths
/// relative to `dest_dir`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &str,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<RelativePathBuf>, SiteError> {
    let mut pages = Vec::new();
    for source in io::scan_markdown_files(content_dir)? {
        let target = html_path_for(&source);
        generate_page(
            &source.to_path(content_dir),
            template,
            &target.to_path(dest_dir),
            base_path,
        )?;
        pages.push(target);
    }
    Ok(pages)
}

/// Builds the whole site: clears the output directory, copies static assets
/// and generates every page.
pub fn build_site(options: &SiteOptions) -> Result<BuildSummary, SiteError> {
    io::reset_dir(&options.output_dir)?;

    let assets = if options.static_dir.is_dir() {
        io::copy_dir_recursive(&options.static_dir, &options.output_dir)?
    } else {
        log::warn!(
            "Static directory {} not found, skipping assets",
            options.static_dir.display()
        );
        Vec::new()
    };
    log::info!("Copied {} static files", assets.len());

    let template =
        fs::read_to_string(&options.template_path).map_err(|source| SiteError::Template {
            path: options.template_path.clone(),
            source,
        })?;

    let pages = generate_pages_recursive(
        &options.content_dir,
        &template,
        &options.output_dir,
        &options.base_path,
    )?;
    log::info!("Generated {} pages", pages.len());

    Ok(BuildSummary { pages, assets })
}

fn html_path_for(source: &RelativePath) -> RelativePathBuf {
    source.with_extension("html")
}
