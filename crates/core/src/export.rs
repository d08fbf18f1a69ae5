use std::{fmt, io::Cursor, str::FromStr};

use docx_rs::{BreakType, Docx, Paragraph, Run};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Failed to build Word document: {0}")]
    Document(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Word,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Text, ExportFormat::Word];

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Word => "docx",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn file_name(&self) -> String {
        format!("summary.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::Word => f.write_str("Word"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "word" | "docx" => Ok(Self::Word),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// A downloadable document, built fresh for every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Removes markdown emphasis and third-level heading markers.
pub fn strip_markdown(text: &str) -> String {
    text.replace('*', "").replace("###", "")
}

pub fn export(summary: &str, format: ExportFormat) -> Result<ExportArtifact, ExportError> {
    let bytes = match format {
        ExportFormat::Text => strip_markdown(summary).into_bytes(),
        ExportFormat::Word => word_document(summary)?,
    };

    Ok(ExportArtifact {
        file_name: format.file_name(),
        mime: format.mime().to_string(),
        bytes,
    })
}

/// Exports by format name. Unknown names and failed exports yield an empty
/// artifact.
pub fn export_by_name(summary: &str, name: &str) -> ExportArtifact {
    name.parse::<ExportFormat>()
        .and_then(|format| export(summary, format))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, format = name, "Export produced no document");
            ExportArtifact {
                file_name: String::new(),
                mime: String::new(),
                bytes: Vec::new(),
            }
        })
}

fn word_document(summary: &str) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());

    summary_docx(summary)
        .build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Document(e.to_string()))?;

    Ok(buf.into_inner())
}

/// One paragraph holding the raw summary. Line breaks become soft breaks
/// inside the paragraph.
fn summary_docx(summary: &str) -> Docx {
    let run = summary
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .enumerate()
        .fold(Run::new(), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            run.add_text(line)
        });

    Docx::new().add_paragraph(Paragraph::new().add_run(run))
}
