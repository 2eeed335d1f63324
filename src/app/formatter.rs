use crate::app::error::ContextError;
use crate::app::filter::strip_comments;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Turns single files into tagged blocks.
pub struct BlockFormatter<'a> {
    cut_comments: bool,
    exceptions: &'a HashMap<String, String>,
}

impl<'a> BlockFormatter<'a> {
    pub fn new(cut_comments: bool, exceptions: &'a HashMap<String, String>) -> Self {
        Self {
            cut_comments,
            exceptions,
        }
    }

    pub fn format_file(&self, path: &Path) -> Result<String, ContextError> {
        let bytes = fs::read(path).map_err(|source| ContextError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let body = if self.cut_comments {
            strip_comments(&content)
        } else {
            trim_final_newline(&content).to_string()
        };

        Ok(render_block(path, &self.language_for(path), &body))
    }

    /// Override by file name first, then the raw extension (case kept, may be empty).
    pub fn language_for(&self, path: &Path) -> String {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if let Some(lang) = self.exceptions.get(name.as_ref()) {
            return lang.clone();
        }

        name.rfind('.')
            .map(|idx| name[idx + 1..].to_string())
            .unwrap_or_default()
    }
}

fn trim_final_newline(content: &str) -> &str {
    match content.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => content,
    }
}

pub fn render_block(path: &Path, lang: &str, body: &str) -> String {
    format!(
        "<file name=\"{}\" lang=\"{}\">\n{}\n</file>",
        path.display(),
        lang,
        body
    )
}

/// Joins blocks with a blank line; the result ends in exactly one newline.
pub fn assemble(blocks: &[String]) -> String {
    let mut out = blocks.join("\n\n");
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}
