//! Attachment classification
//!
//! Files are classified by MIME prefix at capture time: `image/*` and
//! `video/*` get their own kinds, everything else is a document. The
//! classification is advisory; no size or allow-list validation happens
//! at this layer (upload policy belongs to the owner).

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Kind of attachment, derived from the MIME type of the selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Image,
    Video,
    Document,
}

impl AttachmentKind {
    /// Classify from a raw MIME type string. Total: unparseable input is
    /// a document.
    pub fn from_mime(raw: &str) -> Self {
        match raw.parse::<mime::Mime>() {
            Ok(m) if m.type_() == mime::IMAGE => AttachmentKind::Image,
            Ok(m) if m.type_() == mime::VIDEO => AttachmentKind::Video,
            _ => AttachmentKind::Document,
        }
    }

    /// Classify from a file path by extension.
    pub fn from_path(path: &Path) -> Self {
        Self::from_mime(mime_for_path(path))
    }

    pub fn label(self) -> &'static str {
        match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Video => "video",
            AttachmentKind::Document => "document",
        }
    }

    /// Preview label for conversation rows when the message has no text.
    pub fn preview_label(self) -> &'static str {
        match self {
            AttachmentKind::Image => "📷 Photo",
            AttachmentKind::Video => "🎬 Video",
            AttachmentKind::Document => "📄 Document",
        }
    }

    /// File extensions offered in the native picker for this kind. The
    /// filter is advisory only, not a security boundary.
    pub fn picker_extensions(self) -> &'static [&'static str] {
        match self {
            AttachmentKind::Image => &["png", "jpg", "jpeg", "gif", "webp"],
            AttachmentKind::Video => &["mp4", "mov", "webm", "mkv"],
            AttachmentKind::Document => &["pdf", "doc", "docx", "txt", "md", "pptx", "xlsx"],
        }
    }
}

/// Best-effort MIME type for a path, by extension.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("pdf") => "application/pdf",
        Some("txt") | Some("md") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// An opaque binary payload forwarded to the owner.
///
/// The composer only classifies and forwards; persistence and upload are
/// the owner's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub kind: AttachmentKind,
    /// Original file name
    pub name: String,
    /// MIME type the kind was derived from
    pub mime: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Build an attachment from a picked file, classifying by extension.
    pub fn from_file(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = mime_for_path(Path::new(&name)).to_string();
        let kind = AttachmentKind::from_mime(&mime);
        Self {
            kind,
            name,
            mime,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_by_mime_prefix() {
        assert_eq!(AttachmentKind::from_mime("image/png"), AttachmentKind::Image);
        assert_eq!(AttachmentKind::from_mime("video/mp4"), AttachmentKind::Video);
        assert_eq!(
            AttachmentKind::from_mime("application/pdf"),
            AttachmentKind::Document
        );
    }

    #[test]
    fn test_classification_total_over_garbage() {
        assert_eq!(AttachmentKind::from_mime(""), AttachmentKind::Document);
        assert_eq!(
            AttachmentKind::from_mime("not a mime type"),
            AttachmentKind::Document
        );
    }

    #[test]
    fn test_classification_by_path() {
        assert_eq!(
            AttachmentKind::from_path(Path::new("photo.JPG")),
            AttachmentKind::Image
        );
        assert_eq!(
            AttachmentKind::from_path(Path::new("lecture.mov")),
            AttachmentKind::Video
        );
        assert_eq!(
            AttachmentKind::from_path(Path::new("notes")),
            AttachmentKind::Document
        );
    }

    #[test]
    fn test_from_file_carries_payload() {
        let attachment = Attachment::from_file("diagram.png", vec![0x89, 0x50]);
        assert_eq!(attachment.kind, AttachmentKind::Image);
        assert_eq!(attachment.mime, "image/png");
        assert_eq!(attachment.size(), 2);
    }
}
