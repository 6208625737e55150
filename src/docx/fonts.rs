//! Fonts embedded in `word/fontTable.xml`, deobfuscated for `@font-face`.

use crate::error::Result;
use crate::package::Package;

use super::Relationships;

#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedFont {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
    pub data: Vec<u8>,
}

/// `{302EE813-EB4A-4642-A93A-89EF99B2457E}` → the 16-byte XOR key: GUID
/// bytes in their mixed-endian layout, reversed.
fn parse_guid_key(guid: &str) -> Option<[u8; 16]> {
    let hex: String = guid.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    if hex.len() != 32 {
        return None;
    }
    let mut bytes = [0u8; 16];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
    }
    let mut key = [
        bytes[3], bytes[2], bytes[1], bytes[0], // Data1
        bytes[5], bytes[4], // Data2
        bytes[7], bytes[6], // Data3
        bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    ];
    key.reverse();
    Some(key)
}

/// Only the first 32 bytes of an obfuscated font are scrambled.
fn deobfuscate(data: &mut [u8], key: &[u8; 16]) {
    for (i, byte) in data.iter_mut().take(32).enumerate() {
        *byte ^= key[i % 16];
    }
}

const VARIANTS: &[(&str, bool, bool)] = &[
    ("w:embedRegular", false, false),
    ("w:embedBold", true, false),
    ("w:embedItalic", false, true),
    ("w:embedBoldItalic", true, true),
];

pub(super) fn load_embedded_fonts(package: &Package, part: &str) -> Result<Vec<EmbeddedFont>> {
    let Some(root) = package.get_xml(part)? else {
        return Ok(Vec::new());
    };
    let rels = Relationships::load(package, part)?;
    let mut fonts = Vec::new();
    for font in root.children_named("w:font") {
        let Some(family) = font.attr("w:name") else {
            continue;
        };
        for &(tag, bold, italic) in VARIANTS {
            let Some(embed) = font.child(tag) else {
                continue;
            };
            let Some(rel) = embed.attr("r:id").and_then(|id| rels.get(id)) else {
                log::warn!("embedded font {family} has no relationship");
                continue;
            };
            let Some(data) = package.get_file(&rel.part) else {
                log::warn!("embedded font part {} is missing", rel.part);
                continue;
            };
            let mut data = data.to_vec();
            if let Some(key) = embed.attr("w:fontKey").and_then(parse_guid_key) {
                deobfuscate(&mut data, &key);
            }
            log::debug!(
                "embedded font {family} bold={bold} italic={italic} ({} bytes)",
                data.len()
            );
            fonts.push(EmbeddedFont {
                family: family.to_string(),
                bold,
                italic,
                data,
            });
        }
    }
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deobfuscation_is_an_involution() {
        let key = parse_guid_key("{302EE813-EB4A-4642-A93A-89EF99B2457E}").unwrap();
        assert_eq!(key[15], 0x13);
        assert_eq!(key[0], 0x7E);
        let original: Vec<u8> = (0..40).collect();
        let mut data = original.clone();
        deobfuscate(&mut data, &key);
        assert_ne!(data[..32], original[..32]);
        assert_eq!(data[32..], original[32..]);
        deobfuscate(&mut data, &key);
        assert_eq!(data, original);
    }

    #[test]
    fn malformed_guid_is_rejected() {
        assert!(parse_guid_key("{1234}").is_none());
    }
}
