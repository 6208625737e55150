//! The OPC container: every part of the `.docx` ZIP held in memory.

use std::io::{Cursor, Read, Write};

use indexmap::IndexMap;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};
use crate::xml::{self, XmlElement};

pub struct Package {
    parts: IndexMap<String, Vec<u8>>,
}

fn normalize(path: &str) -> &str {
    path.trim_start_matches('/')
}

impl Package {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut parts = IndexMap::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            parts.insert(entry.name().to_string(), data);
        }
        if parts.is_empty() {
            return Err(Error::InvalidDocx("archive contains no parts".into()));
        }
        Ok(Self { parts })
    }

    /// Part names are matched case-insensitively, the way OPC defines them.
    fn key(&self, path: &str) -> Option<&str> {
        let path = normalize(path);
        if self.parts.contains_key(path) {
            return self.parts.get_key_value(path).map(|(k, _)| k.as_str());
        }
        self.parts
            .keys()
            .find(|k| k.eq_ignore_ascii_case(path))
            .map(String::as_str)
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.key(path).is_some()
    }

    pub fn get_file(&self, path: &str) -> Option<&[u8]> {
        let key = self.key(path)?;
        self.parts.get(key).map(Vec::as_slice)
    }

    pub fn get_text(&self, path: &str) -> Option<String> {
        self.get_file(path)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    /// Parse a part. `Ok(None)` when it does not exist, `Err` when it is not
    /// well-formed.
    pub fn get_xml(&self, path: &str) -> Result<Option<XmlElement>> {
        match self.get_text(path) {
            Some(text) => xml::parse(normalize(path), &text).map(Some),
            None => Ok(None),
        }
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    /// Rebuild the archive with `document_path` replaced by `document_xml`.
    /// Every other part is copied through unchanged, in the original order.
    pub fn generate_zip(&self, document_path: &str, document_xml: &str) -> Result<Vec<u8>> {
        let target = self.key(document_path).unwrap_or(normalize(document_path)).to_string();
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let mut written = false;
        for (name, data) in &self.parts {
            zip.start_file(name.as_str(), options)?;
            if *name == target {
                zip.write_all(document_xml.as_bytes())?;
                written = true;
            } else {
                zip.write_all(data)?;
            }
        }
        if !written {
            zip.start_file(target.as_str(), options)?;
            zip.write_all(document_xml.as_bytes())?;
        }
        Ok(zip.finish()?.into_inner())
    }
}

/// Directory of a part, without trailing slash (`word/document.xml` → `word`).
pub fn part_dir(path: &str) -> &str {
    normalize(path).rsplit_once('/').map(|(d, _)| d).unwrap_or("")
}

/// Relationship part for `path` (`word/document.xml` → `word/_rels/document.xml.rels`).
pub fn rels_path(path: &str) -> String {
    let path = normalize(path);
    match path.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
        None => format!("_rels/{path}.rels"),
    }
}

/// Resolve a relationship target against the directory of its source part.
pub fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_resolution() {
        assert_eq!(resolve_target("word", "media/image1.png"), "word/media/image1.png");
        assert_eq!(resolve_target("word", "../customXml/item1.xml"), "customXml/item1.xml");
        assert_eq!(resolve_target("word", "/word/theme/theme1.xml"), "word/theme/theme1.xml");
        assert_eq!(resolve_target("", "word/document.xml"), "word/document.xml");
        assert_eq!(rels_path("word/document.xml"), "word/_rels/document.xml.rels");
        assert_eq!(part_dir("word/footnotes.xml"), "word");
    }

    #[test]
    fn generate_zip_replaces_only_the_document() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(b"<old/>").unwrap();
        zip.start_file("word/media/a.bin", options).unwrap();
        zip.write_all(&[1, 2, 3]).unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        let package = Package::from_bytes(&bytes).unwrap();
        let rebuilt = Package::from_bytes(&package.generate_zip("/word/document.xml", "<new/>").unwrap()).unwrap();
        assert_eq!(rebuilt.get_file("word/document.xml"), Some(&b"<new/>"[..]));
        assert_eq!(rebuilt.get_file("WORD/MEDIA/A.BIN"), Some(&[1u8, 2, 3][..]));
        assert!(!rebuilt.file_exists("word/styles.xml"));
    }
}
