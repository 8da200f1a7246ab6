use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TutoriaError};

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A document uploaded by a student, content stored inline
///
/// `content` is a self-describing data URL (`data:<mime>;base64,<payload>`).
/// Files are never mutated after upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    /// Declared size in bytes
    pub size: u64,
    pub content: String,
    pub student_email: String,
    pub uploaded_at: DateTime<Utc>,
}

impl FileRecord {
    /// Resolve the inline content into raw bytes
    pub fn decode_content(&self) -> Result<Vec<u8>> {
        let (_, payload) = split_data_url(&self.content)?;
        Ok(STANDARD.decode(payload)?)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub content: String,
    pub student_email: String,
}

impl NewFile {
    /// Build an upload from raw bytes; size and content are derived
    pub fn from_bytes(
        student_email: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        let mime_type = mime_type.into();
        Self {
            name: name.into(),
            content: encode_data_url(&mime_type, bytes),
            mime_type,
            size: bytes.len() as u64,
            student_email: student_email.into(),
        }
    }
}

/// Encode bytes as a base64 data URL
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "{}{}{}{}",
        DATA_URL_PREFIX,
        mime_type,
        BASE64_MARKER,
        STANDARD.encode(bytes)
    )
}

/// Split a data URL into (mime type, base64 payload)
fn split_data_url(content: &str) -> Result<(&str, &str)> {
    let rest = content
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| TutoriaError::InvalidFileContent {
            reason: "content is not a data URL".to_string(),
        })?;

    rest.split_once(BASE64_MARKER)
        .ok_or_else(|| TutoriaError::InvalidFileContent {
            reason: "data URL is not base64 encoded".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: String) -> FileRecord {
        FileRecord {
            id: "file1".to_string(),
            name: "Marco_Teorico_v1.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 9,
            content,
            student_email: "maria.gonzalez@live.uleam.edu.ec".to_string(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn test_encode_data_url_shape() {
        let url = encode_data_url("application/pdf", b"%PDF-1.4\n");
        assert_eq!(url, "data:application/pdf;base64,JVBERi0xLjQK");
    }

    #[test]
    fn test_decode_content_returns_original_bytes() {
        let bytes = b"%PDF-1.4\n";
        let file = record(encode_data_url("application/pdf", bytes));
        assert_eq!(file.decode_content().unwrap(), bytes.to_vec());
    }

    #[test]
    fn test_decode_rejects_plain_text_content() {
        let err = record("hola mundo".to_string()).decode_content().unwrap_err();
        assert!(matches!(err, TutoriaError::InvalidFileContent { .. }));
    }

    #[test]
    fn test_decode_rejects_non_base64_data_url() {
        assert!(record("data:text/plain,hola".to_string()).decode_content().is_err());
        assert!(record("data:text/plain;base64,@@@".to_string()).decode_content().is_err());
    }

    #[test]
    fn test_new_file_from_bytes_derives_size() {
        let upload = NewFile::from_bytes(
            "ana.lopez@live.uleam.edu.ec",
            "notas.txt",
            "text/plain",
            b"abc",
        );
        assert_eq!(upload.size, 3);
        assert_eq!(upload.content, "data:text/plain;base64,YWJj");
    }
}
