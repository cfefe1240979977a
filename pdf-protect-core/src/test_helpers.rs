//! Helpers for building small test documents with lopdf

use lopdf::{
    dictionary, Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream,
    StringFormat,
};

/// Builds an unencrypted PDF with `num_pages` pages, each showing "Page N".
///
/// `MediaBox` and `Resources` live on the page tree root so copies have to
/// resolve inherited attributes.
pub fn build_test_pdf(num_pages: usize) -> Vec<u8> {
    save(&mut test_document(num_pages))
}

/// Same document as [`build_test_pdf`], encrypted with the standard security
/// handler. An empty `user_password` gives an owner-restricted file that
/// opens without a password.
pub fn build_encrypted_test_pdf(
    num_pages: usize,
    user_password: &str,
    owner_password: &str,
) -> Vec<u8> {
    let mut doc = test_document(num_pages);
    let id = Object::String(b"pdf-protect-test".to_vec(), StringFormat::Literal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password,
        user_password,
        key_length: 128,
        permissions: Permissions::PRINTABLE,
    };
    let state = EncryptionState::try_from(version).expect("encryption state");
    doc.encrypt(&state).expect("encrypt test pdf");
    save(&mut doc)
}

fn test_document(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::with_capacity(num_pages);
    for number in 1..=num_pages {
        let content = format!("BT\n/F1 24 Tf\n72 720 Td\n(Page {number}) Tj\nET\n");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => num_pages as i64,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => Object::Reference(font_id),
                },
            },
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Test Document"),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));
    doc
}

fn save(doc: &mut Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("in-memory save");
    bytes
}

/// Text shown on page `number` (1-based).
pub fn page_text(doc: &Document, number: u32) -> String {
    doc.extract_text(&[number]).unwrap_or_default()
}
