use std::io::Write;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use summarizer_engine::{extract_pdf_text, load_from_pdf, FailureKind, Origin, SourceRef};

/// Writes a PDF with one page per entry of `pages`; `None` makes a page
/// with no text operators.
fn write_pdf(path: &Path, pages: &[Option<&str>]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = match text {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => Vec::new(),
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save pdf");
}

#[test]
fn pages_are_concatenated_in_order() {
    summarizer_logging::initialize_for_tests();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("article.pdf");
    write_pdf(&path, &[Some("Alpha page one"), Some("Bravo page two"), Some("Charlie page three")]);

    let pdf = extract_pdf_text(&path).expect("pdf text");
    assert_eq!(pdf.page_count, 3);

    let alpha = pdf.text.find("Alpha page one").expect("page 1 text");
    let bravo = pdf.text.find("Bravo page two").expect("page 2 text");
    let charlie = pdf.text.find("Charlie page three").expect("page 3 text");
    assert!(alpha < bravo && bravo < charlie, "{:?}", pdf.text);
}

#[test]
fn load_from_pdf_tags_source_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.pdf");
    write_pdf(&path, &[Some("Only page")]);

    let acquired = load_from_pdf(&path).expect("acquired");
    assert_eq!(acquired.source, SourceRef::Pdf(path.clone()));
    assert_eq!(acquired.title, None);
    assert!(acquired.text.contains("Only page"));
}

#[test]
fn image_only_pdf_is_reported_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.pdf");
    write_pdf(&path, &[None, None]);

    let err = load_from_pdf(&path).unwrap_err();
    assert_eq!(err.kind, FailureKind::PdfEmpty);
    assert_eq!(err.origin, Origin::Pdf);
    assert!(err.to_string().starts_with("Error extracting text from PDF:"));
}

#[test]
fn missing_or_corrupt_files_fail_to_open() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_from_pdf(&dir.path().join("absent.pdf")).unwrap_err();
    assert_eq!(err.kind, FailureKind::PdfOpen);

    let bogus = dir.path().join("bogus.pdf");
    let mut file = std::fs::File::create(&bogus).unwrap();
    file.write_all(b"this is not a pdf at all").unwrap();
    drop(file);

    let err = load_from_pdf(&bogus).unwrap_err();
    assert_eq!(err.kind, FailureKind::PdfOpen);
}
