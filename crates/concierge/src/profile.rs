use anyhow::{Context, Result};
use lopdf::Document;
use std::fs;
use std::path::Path;
use tracing::info;

/// Everything the system prompt knows about the person, loaded once at
/// startup.
#[derive(Debug, Clone)]
pub struct Profile {
    pub name: String,
    pub summary: String,
    /// Text extracted from the profile PDF, pages joined with newlines.
    pub background: String,
}

impl Profile {
    /// Load `summary.txt` and `profile.pdf` from the data directory.
    pub fn load(data_dir: &Path, name: &str) -> Result<Self> {
        let summary_path = data_dir.join("summary.txt");
        let summary = fs::read_to_string(&summary_path)
            .with_context(|| format!("Failed to read {}", summary_path.display()))?;

        let pdf_path = data_dir.join("profile.pdf");
        let background = extract_pdf_text(&pdf_path)
            .with_context(|| format!("Failed to read {}", pdf_path.display()))?;

        info!(
            name,
            summary_bytes = summary.len(),
            background_bytes = background.len(),
            "profile loaded"
        );

        Ok(Self {
            name: name.to_string(),
            summary,
            background,
        })
    }
}

/// Extract text page by page. A page whose extraction fails contributes an
/// empty string rather than failing the whole document.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let document = Document::load(path)?;
    let pages: Vec<String> = document
        .get_pages()
        .keys()
        .map(|page| document.extract_text(&[*page]).unwrap_or_default())
        .collect();
    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content as PdfContent, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn write_single_page_pdf(path: &Path, text: &str) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = PdfContent {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn test_load_profile() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("summary.txt"), "Front-end and AI engineer.").unwrap();
        write_single_page_pdf(&dir.path().join("profile.pdf"), "Ten years of experience");

        let profile = Profile::load(dir.path(), "Ada Lovelace").unwrap();
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.summary, "Front-end and AI engineer.");
        assert!(profile.background.contains("Ten years of experience"));
    }

    #[test]
    fn test_load_profile_missing_summary() {
        let dir = tempfile::tempdir().unwrap();
        write_single_page_pdf(&dir.path().join("profile.pdf"), "text");

        let result = Profile::load(dir.path(), "Ada");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_profile_missing_pdf() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("summary.txt"), "summary").unwrap();

        let result = Profile::load(dir.path(), "Ada");
        assert!(result.is_err());
    }
}
