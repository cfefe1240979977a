//! Shared helpers for the integration tests

#![allow(dead_code)]

use lopdf::xref::XrefEntry;
use lopdf::{
    dictionary, Document, EncryptionState, EncryptionVersion, Object, ObjectId, Permissions,
    Reader, Stream, StringFormat,
};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Builds an unencrypted document with `num_pages` pages, each showing
/// "Page N". Pages hang off two intermediate `Pages` nodes so the copy has
/// to walk a nested tree.
pub fn build_nested_pdf(num_pages: usize, version: &str) -> Document {
    let mut doc = Document::with_version(version);
    let root_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let split = num_pages / 2;
    let mut branches = Vec::new();
    for range in [1..=split, split + 1..=num_pages] {
        if range.is_empty() {
            continue;
        }
        let branch_id = doc.new_object_id();
        let kids: Vec<Object> = range
            .clone()
            .map(|number| Object::Reference(add_page(&mut doc, branch_id, number)))
            .collect();
        doc.objects.insert(
            branch_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Parent" => Object::Reference(root_id),
                "Count" => kids.len() as i64,
                "Kids" => kids,
            }),
        );
        branches.push(Object::Reference(branch_id));
    }

    doc.objects.insert(
        root_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => branches,
            "Count" => num_pages as i64,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => Object::Reference(font_id) },
            },
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(root_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

fn add_page(doc: &mut Document, parent: ObjectId, number: usize) -> ObjectId {
    let content = format!("BT\n/F1 18 Tf\n72 760 Td\n(Page {number}) Tj\nET\n");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(parent),
        "Contents" => Object::Reference(content_id),
    })
}

/// Saves a freshly built document to `dir/name`.
pub fn write_pdf(dir: &Path, name: &str, num_pages: usize) -> PathBuf {
    let path = dir.join(name);
    let mut doc = build_nested_pdf(num_pages, "1.5");
    doc.save(&path).expect("save test pdf");
    path
}

/// Saves a document to `dir/name` that only an owner password restricts.
pub fn write_owner_restricted_pdf(dir: &Path, name: &str, num_pages: usize) -> PathBuf {
    let mut doc = build_nested_pdf(num_pages, "1.6");
    let id = Object::String(b"owner-restricted".to_vec(), StringFormat::Literal);
    doc.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password: "",
        key_length: 128,
        permissions: Permissions::PRINTABLE,
    };
    let state = EncryptionState::try_from(version).expect("encryption state");
    doc.encrypt(&state).expect("encrypt test pdf");

    let path = dir.join(name);
    doc.save(&path).expect("save test pdf");
    path
}

/// Opens a PDF that needs `password` and returns it decrypted.
///
/// `Document::load_mem` only keeps the `Encrypt` dictionary when the empty
/// user password does not open the file, so every other object is read raw
/// through the xref table before decrypting.
pub fn open_protected(bytes: &[u8], password: &str) -> lopdf::Result<Document> {
    let reader = Reader {
        buffer: bytes,
        document: Document::load_mem(bytes)?,
        encryption_state: None,
        raw_objects: BTreeMap::new(),
    };

    let mut objects = BTreeMap::new();
    for (&number, entry) in &reader.document.reference_table.entries {
        if let XrefEntry::Normal { generation, .. } = *entry {
            let id = (number, generation);
            if !reader.document.objects.contains_key(&id) {
                objects.insert(id, reader.get_object(id, &mut HashSet::new())?);
            }
        }
    }

    let mut document = reader.document;
    document.objects.extend(objects);
    document.decrypt(password)?;
    Ok(document)
}

/// Whether the raw file references an `Encrypt` dictionary.
pub fn has_encrypt_dictionary(bytes: &[u8]) -> bool {
    bytes.windows(b"/Encrypt".len()).any(|w| w == b"/Encrypt")
}

/// Text of each page in page order.
pub fn page_texts(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .keys()
        .map(|&number| doc.extract_text(&[number]).unwrap_or_default())
        .collect()
}
