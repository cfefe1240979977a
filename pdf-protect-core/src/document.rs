//! Document assembly and password encryption
//!
//! All PDF parsing, serialization and cryptography is done by `lopdf`. This
//! module only decides what goes into the new container: every source page,
//! in order, under a fresh page tree and catalog.

use crate::error::{ProtectError, Result};
use lopdf::{
    dictionary, Dictionary, Document, EncryptionState, EncryptionVersion, Object, ObjectId,
    Permissions, StringFormat,
};
use tracing::debug;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against `Parent` cycles in damaged page trees.
const MAX_TREE_DEPTH: usize = 64;

/// 128-bit RC4 needs at least PDF 1.4.
const MIN_PDF_VERSION: &str = "1.4";

/// Key length in bits for the standard security handler.
const KEY_LENGTH: usize = 128;

/// Load a source document from its raw bytes.
///
/// Sources restricted only by an owner password open with the empty user
/// password and are accepted with their old security handler dropped.
/// Sources that need a user password are rejected.
pub fn load_source(bytes: &[u8]) -> Result<Document> {
    let mut document = Document::load_mem(bytes)?;
    if document.is_encrypted() {
        if document.encryption_state.is_none() {
            return Err(ProtectError::SourceEncrypted);
        }
        if let Some(encrypt) = document.trailer.remove(b"Encrypt") {
            if let Ok(id) = encrypt.as_reference() {
                document.objects.remove(&id);
            }
        }
        debug!("source opened with the empty user password");
    }
    debug!(
        version = %document.version,
        objects = document.objects.len(),
        "loaded source document"
    );
    Ok(document)
}

/// Build a new document containing every page of `source` in original order.
pub fn copy_pages(mut source: Document, producer: &str) -> Result<Document> {
    let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();

    // Inherited attributes must be resolved while the old tree still exists.
    let inherited = page_ids
        .iter()
        .map(|&page_id| inherited_attributes(&source, page_id))
        .collect::<Result<Vec<_>>>()?;
    let mut info = source_info(&source).unwrap_or_default();

    let mut target = Document::with_version(output_version(&source.version));
    target.objects = std::mem::take(&mut source.objects);
    target.max_id = source.max_id;

    let pages_id = target.new_object_id();
    for (&page_id, attributes) in page_ids.iter().zip(inherited) {
        let page = target
            .get_object_mut(page_id)
            .and_then(|object| object.as_dict_mut())?;
        for (key, value) in attributes {
            page.set(key, value);
        }
        page.set("Parent", Object::Reference(pages_id));
    }

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    target.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_ids.len() as i64,
        }),
    );

    let catalog_id = target.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });

    info.set("Producer", Object::string_literal(producer));
    info.set("ModDate", Object::string_literal(pdf_date_now()));
    let info_id = target.add_object(info);

    target.trailer.set("Root", Object::Reference(catalog_id));
    target.trailer.set("Info", Object::Reference(info_id));

    let pruned = target.prune_objects();
    debug!(
        pages = page_ids.len(),
        pruned = pruned.len(),
        "assembled new document container"
    );

    Ok(target)
}

/// Encrypt `document` with `password` as both user and owner password.
///
/// Uses the standard security handler with 128-bit RC4 and all permissions
/// granted. `file_id` becomes both halves of the trailer `ID`.
pub fn encrypt(document: &mut Document, password: &str, file_id: [u8; 16]) -> Result<()> {
    let id = Object::String(file_id.to_vec(), StringFormat::Hexadecimal);
    document.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let version = EncryptionVersion::V2 {
        document: &*document,
        owner_password: password,
        user_password: password,
        key_length: KEY_LENGTH,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version)
        .map_err(|e| ProtectError::Encryption(e.to_string()))?;

    document
        .encrypt(&state)
        .map_err(|e| ProtectError::Encryption(e.to_string()))?;
    debug!(key_length = KEY_LENGTH, "document encrypted");
    Ok(())
}

/// Serialize `document` into memory.
pub fn to_bytes(document: &mut Document) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

/// File identifier derived from the source bytes and the current time.
pub fn file_id(source: &[u8]) -> [u8; 16] {
    let stamp = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default()
        .to_be_bytes();
    let mut seed = Vec::with_capacity(source.len() + stamp.len());
    seed.extend_from_slice(source);
    seed.extend_from_slice(&stamp);
    md5::compute(&seed).0
}

fn inherited_attributes(source: &Document, page_id: ObjectId) -> Result<Vec<(Vec<u8>, Object)>> {
    let page = source.get_dictionary(page_id)?;
    let mut missing: Vec<&[u8]> = INHERITABLE_KEYS
        .iter()
        .copied()
        .filter(|key| !page.has(key))
        .collect();

    let mut found = Vec::new();
    let mut parent = parent_of(page);
    let mut depth = 0;

    while let Some(parent_id) = parent {
        if missing.is_empty() {
            break;
        }
        if depth == MAX_TREE_DEPTH {
            return Err(ProtectError::InvalidStructure(format!(
                "page tree deeper than {MAX_TREE_DEPTH} levels above page {} {} R",
                page_id.0, page_id.1
            )));
        }

        let node = source.get_dictionary(parent_id)?;
        missing.retain(|key| match node.get(key) {
            Ok(value) => {
                found.push((key.to_vec(), value.clone()));
                false
            }
            Err(_) => true,
        });

        parent = parent_of(node);
        depth += 1;
    }

    Ok(found)
}

fn parent_of(node: &Dictionary) -> Option<ObjectId> {
    node.get(b"Parent")
        .and_then(|parent| parent.as_reference())
        .ok()
}

fn source_info(source: &Document) -> Option<Dictionary> {
    match source.trailer.get(b"Info").ok()? {
        Object::Reference(id) => source.get_dictionary(*id).ok().cloned(),
        Object::Dictionary(info) => Some(info.clone()),
        _ => None,
    }
}

fn output_version(version: &str) -> String {
    let too_old = version
        .parse::<f32>()
        .map(|v| v < 1.4)
        .unwrap_or(true);
    if too_old {
        MIN_PDF_VERSION.to_string()
    } else {
        version.to_string()
    }
}

fn pdf_date_now() -> String {
    chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()
}
