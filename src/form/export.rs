use std::io::Cursor;

use anyhow::Context;
use docx_rs::{Docx, Paragraph, Run};

pub const EXPORT_FILENAME: &str = "deals_post.docx";
pub const EXPORT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Renders the post as a Word document, one paragraph per line.
pub fn render_document(post: &str) -> anyhow::Result<Vec<u8>> {
    let docx = post.lines().fold(Docx::new(), |doc, line| {
        doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
    });

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .context("failed to pack deals document")?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document() {
        let bytes = render_document("Top deals\nFlight: $512 {economy}").unwrap();
        assert!(bytes.starts_with(b"PK"));

        let json = docx_rs::read_docx(&bytes).unwrap().json();
        assert!(json.contains("Top deals"));
        assert!(json.contains("Flight: $512 {economy}"));
    }

    #[test]
    fn test_blank_lines_become_empty_paragraphs() {
        let bytes = render_document("Intro\n\nOutro").unwrap();
        let docx = docx_rs::read_docx(&bytes).unwrap();
        assert_eq!(docx.document.children.len(), 3);
    }
}
