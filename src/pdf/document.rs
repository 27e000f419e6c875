use crate::error::{Error, Result};
use crate::preflight;
use crate::selection::pages_to_keep;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId};
use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `/Parent` chains in malformed files.
const MAX_TREE_DEPTH: usize = 64;

pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = Document::load(&path)?;
        Ok(PdfDocument { doc, path })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Build a copy that contains only the given 0-based pages.
    ///
    /// Everything else about the source (version, info dictionary, catalog
    /// entries) is carried over unchanged.
    pub fn retain_pages(&self, keep: &[u32]) -> Document {
        let keep: HashSet<u32> = keep.iter().copied().collect();
        let to_delete: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|num| !keep.contains(&(num - 1)))
            .collect();

        let mut new_doc = self.doc.clone();
        if !to_delete.is_empty() {
            new_doc.delete_pages(&to_delete);
            new_doc.prune_objects();
        }
        new_doc
    }

    /// Remove 1-based pages, returning the new document and how many pages
    /// were actually dropped.
    pub fn remove_pages(&self, to_remove: &[u32]) -> (Document, u32) {
        let keep = pages_to_keep(self.page_count(), to_remove);
        let removed = self.page_count() - keep.len() as u32;
        (self.retain_pages(&keep), removed)
    }

    /// Save to a file. The handle is flushed and closed before returning.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = preflight::create_output(path)?;
        doc.save_to(&mut writer)?;
        writer.flush().map_err(|e| Error::from_write(e, path))?;
        Ok(())
    }
}

/// Concatenate documents, keeping argument order and each source's page order.
pub fn merge_documents(documents: Vec<Document>) -> Result<Document> {
    let version = documents
        .iter()
        .map(|doc| doc.version.clone())
        .max()
        .unwrap_or_else(|| "1.5".to_string());

    let mut max_id = 1;
    let mut pages: Vec<(ObjectId, Dictionary)> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        for (_, page_id) in doc.get_pages() {
            let mut page = doc.get_dictionary(page_id)?.clone();
            for key in INHERITABLE_KEYS {
                if page.has(key) {
                    continue;
                }
                if let Some(value) = inherited_attribute(&doc, page_id, key) {
                    page.set(key, value);
                }
            }
            pages.push((page_id, page));
        }

        for (object_id, object) in doc.objects {
            match object.type_name().unwrap_or(b"") {
                b"Catalog" | b"Pages" | b"Page" | b"Outlines" | b"Outline" => {}
                _ => {
                    objects.insert(object_id, object);
                }
            }
        }
    }

    let mut merged = Document::with_version(version);
    merged.objects = objects;
    merged.max_id = max_id;

    let pages_id = merged.new_object_id();
    let mut kids = Vec::with_capacity(pages.len());
    for (page_id, mut page) in pages {
        page.set("Parent", pages_id);
        merged.objects.insert(page_id, Object::Dictionary(page));
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = merged.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    merged.trailer.set("Root", catalog_id);
    merged.renumber_objects();

    Ok(merged)
}

fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut node = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_TREE_DEPTH {
        let parent_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
        node = doc.get_dictionary(parent_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::{page_contents, sample_document, write_sample};
    use tempfile::tempdir;

    fn reload(doc: &mut Document) -> Document {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        Document::load_mem(&bytes).unwrap()
    }

    #[test]
    fn test_open_and_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("three.pdf");
        write_sample(&path, &["one", "two", "three"]);

        let doc = PdfDocument::open(&path).unwrap();
        assert_eq!(doc.page_count(), 3);
        let numbers: Vec<u32> = doc.page_ids().into_iter().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(PdfDocument::open(dir.path().join("missing.pdf")).is_err());
    }

    #[test]
    fn test_remove_middle_page() {
        let source = PdfDocument {
            doc: sample_document(&["one", "two", "three"]),
            path: PathBuf::from("three.pdf"),
        };
        let expected = page_contents(&source.doc);

        let (mut trimmed, removed) = source.remove_pages(&[2]);
        assert_eq!(removed, 1);

        let trimmed = reload(&mut trimmed);
        assert_eq!(trimmed.get_pages().len(), 2);
        assert_eq!(
            page_contents(&trimmed),
            vec![expected[0].clone(), expected[2].clone()]
        );
    }

    #[test]
    fn test_remove_counts_only_existing_pages() {
        let source = PdfDocument {
            doc: sample_document(&["one", "two"]),
            path: PathBuf::from("two.pdf"),
        };
        let (doc, removed) = source.remove_pages(&[2, 7, 0]);
        assert_eq!(removed, 1);
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_remove_keeps_version() {
        let mut doc = sample_document(&["one", "two"]);
        doc.version = "1.7".to_string();
        let source = PdfDocument {
            doc,
            path: PathBuf::from("v.pdf"),
        };
        let (mut trimmed, _) = source.remove_pages(&[1]);
        assert_eq!(reload(&mut trimmed).version, "1.7");
    }

    #[test]
    fn test_merge_preserves_order() {
        let a = sample_document(&["a1", "a2"]);
        let b = sample_document(&["b1", "b2", "b3"]);
        let mut expected = page_contents(&a);
        expected.extend(page_contents(&b));

        let mut merged = merge_documents(vec![a, b]).unwrap();
        let merged = reload(&mut merged);

        assert_eq!(merged.get_pages().len(), 5);
        assert_eq!(page_contents(&merged), expected);
    }

    #[test]
    fn test_merge_builds_catalog_and_page_tree() {
        let merged = merge_documents(vec![sample_document(&["a1"]), sample_document(&["b1"])]).unwrap();

        let catalog = merged.catalog().unwrap();
        assert_eq!(catalog.get(b"Type").and_then(Object::as_name).unwrap(), b"Catalog");
        let pages_id = catalog.get(b"Pages").and_then(Object::as_reference).unwrap();
        let pages = merged.get_dictionary(pages_id).unwrap();
        assert_eq!(pages.get(b"Type").and_then(Object::as_name).unwrap(), b"Pages");
        assert_eq!(pages.get(b"Count").and_then(Object::as_i64).unwrap(), 2);
    }

    #[test]
    fn test_merge_materialises_inherited_attributes() {
        let a = sample_document(&["a1"]);
        let b = sample_document(&["b1"]);

        let merged = merge_documents(vec![a, b]).unwrap();
        for (_, page_id) in merged.get_pages() {
            let page = merged.get_dictionary(page_id).unwrap();
            assert!(page.has(b"MediaBox"));
            assert!(page.has(b"Resources"));
        }
    }

    #[test]
    fn test_merge_then_remove_round_trip() {
        let a = sample_document(&["a1", "a2"]);
        let b = sample_document(&["b1", "b2", "b3"]);
        let expected = page_contents(&a);

        let mut merged = merge_documents(vec![a, b]).unwrap();
        let merged = PdfDocument {
            doc: reload(&mut merged),
            path: PathBuf::from("merged.pdf"),
        };

        let b_pages = crate::page_range::parse_pages("3-5").unwrap();
        let (mut restored, removed) = merged.remove_pages(&b_pages);
        assert_eq!(removed, 3);
        assert_eq!(page_contents(&reload(&mut restored)), expected);
    }

    #[test]
    fn test_save_writes_loadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.pdf");
        let mut doc = sample_document(&["x"]);

        PdfDocument::save(&mut doc, &path).unwrap();
        assert_eq!(PdfDocument::open(&path).unwrap().page_count(), 1);
    }
}
