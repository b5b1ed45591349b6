use common::domain::{FileType, ResourceLevel};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    pub title: String,
    pub description: String,
    pub level: ResourceLevel,
    pub subject: String,
    pub file_url: String,
    #[serde(default = "default_file_type")]
    pub file_type: FileType,
    #[serde(default)]
    pub is_premium: bool,
}

fn default_file_type() -> FileType {
    FileType::Pdf
}

#[derive(Debug, Deserialize)]
pub struct UpdateResourceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<ResourceLevel>,
    pub subject: Option<String>,
    pub file_url: Option<String>,
    pub file_type: Option<FileType>,
    pub is_premium: Option<bool>,
}

/// Public catalog filters; both optional.
#[derive(Debug, Default, Deserialize)]
pub struct ResourceListQuery {
    pub level: Option<String>,
    pub subject: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_to_free_pdf() {
        let parsed = serde_json::from_value::<CreateResourceRequest>(serde_json::json!({
            "title": "Revision notes",
            "description": "Trigonometry summary",
            "level": "GCSE",
            "subject": "Maths",
            "file_url": "https://files.example.com/trig.pdf"
        }))
        .unwrap();
        assert_eq!(parsed.file_type, FileType::Pdf);
        assert!(!parsed.is_premium);
    }

    #[test]
    fn create_rejects_unknown_level() {
        let parsed = serde_json::from_value::<CreateResourceRequest>(serde_json::json!({
            "title": "Notes",
            "description": "x",
            "level": "Degree",
            "subject": "Maths",
            "file_url": "https://files.example.com/x.pdf"
        }));
        assert!(parsed.is_err());
    }
}
