//! Exporting a note as a markdown, HTML or plain-text file.
//!
//! The `export_as_*` functions are pure: they build an [`ExportedFile`] with
//! the file name, MIME type and bytes. [`write_export`] puts one on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::preview::render_markdown_to_html;
use crate::Result;

/// File formats a note can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Markdown,
    Html,
    Text,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Text => "txt",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown",
            Self::Html => "text/html",
            Self::Text => "text/plain",
        }
    }
}

/// What the body of an HTML export contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlExportMode {
    /// The markdown source, embedded verbatim.
    #[default]
    Raw,
    /// The markdown rendered to HTML.
    Rendered,
}

/// A file ready to be saved or handed to a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// Escapes HTML special characters in a user-supplied string.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Turns a note title into a file stem that stays inside its directory.
///
/// Path separators and control characters become `-`; a blank title becomes
/// `"Untitled"`.
pub fn file_stem_for_title(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c == '/' || c == '\\' || c.is_control() { '-' } else { c })
        .collect();
    if stem.trim().is_empty() || stem.trim().chars().all(|c| c == '.') {
        "Untitled".to_string()
    } else {
        stem
    }
}

fn exported(title: &str, format: ExportFormat, contents: String) -> ExportedFile {
    ExportedFile {
        filename: format!("{}.{}", file_stem_for_title(title), format.extension()),
        mime_type: format.mime_type(),
        contents,
    }
}

/// Exports the raw markdown source as `{title}.md`.
pub fn export_as_markdown(title: &str, content: &str) -> ExportedFile {
    exported(title, ExportFormat::Markdown, content.to_string())
}

/// Exports `{title}.html` with the markdown source embedded verbatim in the body.
pub fn export_as_html(title: &str, content: &str) -> ExportedFile {
    export_as_html_with(title, content, HtmlExportMode::Raw)
}

/// Exports `{title}.html`, choosing whether the body is raw or rendered markdown.
pub fn export_as_html_with(title: &str, content: &str, mode: HtmlExportMode) -> ExportedFile {
    let body = match mode {
        HtmlExportMode::Raw => content.to_string(),
        HtmlExportMode::Rendered => render_markdown_to_html(content),
    };
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <style>
    body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif; max-width: 800px; margin: 0 auto; padding: 2rem; line-height: 1.6; }}
    code {{ background: #f4f4f4; padding: 2px 6px; border-radius: 3px; }}
    pre {{ background: #f4f4f4; padding: 1rem; border-radius: 5px; overflow-x: auto; }}
    blockquote {{ border-left: 4px solid #ddd; padding-left: 1rem; color: #666; }}
  </style>
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
    );
    exported(title, ExportFormat::Html, html)
}

/// Exports the raw content as `{title}.txt`.
pub fn export_as_text(title: &str, content: &str) -> ExportedFile {
    exported(title, ExportFormat::Text, content.to_string())
}

/// Builds the export for `format`, using `html_mode` for HTML bodies.
pub fn export_note(
    format: ExportFormat,
    title: &str,
    content: &str,
    html_mode: HtmlExportMode,
) -> ExportedFile {
    match format {
        ExportFormat::Markdown => export_as_markdown(title, content),
        ExportFormat::Html => export_as_html_with(title, content, html_mode),
        ExportFormat::Text => export_as_text(title, content),
    }
}

/// Writes `file` into `dir`, creating the directory if needed.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`crate::MarknotesError::Io`] if the directory cannot be created or
/// the file cannot be written.
pub fn write_export(dir: &Path, file: &ExportedFile) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&file.filename);
    fs::write(&path, file.contents.as_bytes())?;
    log::info!("exported {} ({})", path.display(), file.mime_type);
    Ok(path)
}
