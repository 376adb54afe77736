//! CV file import: turns an uploaded document into raw text. Profile
//! structuring from that text is the AI collaborator's job, not ours.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::errors::AppError;

static XML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^>]+>").expect("tag pattern is valid"));

/// Extracts the plain text of a CV file, dispatching on extension.
/// Supports PDF, DOCX/DOC and plain text.
pub fn parse_cv_file(path: &Path) -> Result<String, AppError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let text = match extension.as_str() {
        "pdf" => pdf_extract::extract_text(path)
            .map_err(|e| AppError::Import(format!("failed to read PDF: {e}")))?,
        "docx" | "doc" => extract_docx_text(path)?,
        "txt" | "md" => std::fs::read_to_string(path)?,
        other => {
            return Err(AppError::Import(format!(
                "unsupported file format '.{other}'; use PDF, DOCX or TXT"
            )))
        }
    };

    info!(
        "Imported {} ({} chars of text)",
        path.display(),
        text.len()
    );

    Ok(text)
}

/// A .docx file is a zip archive; the document body lives in
/// `word/document.xml`. Paragraph ends become newlines, tags are
/// stripped, basic entities decoded.
fn extract_docx_text(path: &Path) -> Result<String, AppError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| AppError::Import(format!("not a valid DOCX archive: {e}")))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| AppError::Import(format!("DOCX has no document body: {e}")))?;

    let mut xml = String::new();
    document.read_to_string(&mut xml)?;

    Ok(document_xml_to_text(&xml))
}

fn document_xml_to_text(xml: &str) -> String {
    let with_breaks = xml.replace("</w:p>", "\n");
    let stripped = XML_TAG.replace_all(&with_breaks, "");
    decode_entities(&stripped).trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
