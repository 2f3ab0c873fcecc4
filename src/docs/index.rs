//! XML documentation file parsing.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One `member` element from the documentation file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocEntry {
    /// The raw doc key (`name` attribute), e.g. `P:Ansys.ACT.Core.Worksheet.RowCount`.
    pub name: String,
    pub summary: Option<String>,
    /// Parameter descriptions in document order, `(param name, text)`.
    pub params: Vec<(String, String)>,
    pub remarks: Option<String>,
    pub example: Option<String>,
}

/// Immutable mapping from doc key to documentation entry, built once per
/// assembly. Lookups are exact string matches; a miss means "no
/// documentation", never an error.
#[derive(Debug, Default)]
pub struct DocIndex {
    entries: HashMap<String, DocEntry>,
}

impl DocIndex {
    /// Index with no entries, used when the assembly ships without a doc file.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&DocEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load and parse a documentation file. Malformed XML is fatal for the
    /// assembly; the caller decides what a missing file means.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let xml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read doc file {}", path.display()))?;
        Self::parse(&xml).with_context(|| format!("malformed doc XML in {}", path.display()))
    }

    /// Parse documentation XML of the fixed schema
    /// `doc > members > member[name]` with optional `summary`, `param`,
    /// `remarks` and `example` children.
    pub fn parse(xml: &str) -> anyhow::Result<Self> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        reader.config_mut().trim_text(true);

        let mut entries = HashMap::new();
        let mut current: Option<DocEntry> = None;
        let mut section: Option<Section> = None;
        let mut text = String::new();
        let mut buf = Vec::new();

        loop {
            match reader
                .read_event_into(&mut buf)
                .map_err(|e| anyhow::anyhow!("XML parse error at position {}: {e}", reader.error_position()))?
            {
                Event::Start(ref e) => match e.name().as_ref() {
                    b"member" => {
                        current = Some(DocEntry {
                            name: attr_value(e, b"name")?.unwrap_or_default(),
                            ..DocEntry::default()
                        });
                    }
                    b"summary" if current.is_some() => {
                        section = Some(Section::Summary);
                        text.clear();
                    }
                    b"param" if current.is_some() => {
                        section = Some(Section::Param(attr_value(e, b"name")?.unwrap_or_default()));
                        text.clear();
                    }
                    b"remarks" if current.is_some() => {
                        section = Some(Section::Remarks);
                        text.clear();
                    }
                    b"example" if current.is_some() => {
                        section = Some(Section::Example);
                        text.clear();
                    }
                    // Markup nested inside a section (<see/>, <c>, ...) is
                    // ignored; only its text content accumulates.
                    _ => {}
                },
                Event::Text(t) => {
                    if section.is_some() {
                        let piece = t
                            .unescape()
                            .map_err(|e| anyhow::anyhow!("invalid text content: {e}"))?;
                        if !text.is_empty() {
                            text.push(' ');
                        }
                        text.push_str(piece.trim());
                    }
                }
                Event::End(ref e) => match (e.name().as_ref(), section.take()) {
                    (b"member", _) => {
                        if let Some(entry) = current.take() {
                            entries.insert(entry.name.clone(), entry);
                        }
                    }
                    (b"summary", Some(Section::Summary)) => {
                        if let Some(entry) = current.as_mut() {
                            entry.summary = non_empty(&text);
                        }
                    }
                    (b"param", Some(Section::Param(name))) => {
                        if let Some(entry) = current.as_mut() {
                            entry.params.push((name, text.trim().to_string()));
                        }
                    }
                    (b"remarks", Some(Section::Remarks)) => {
                        if let Some(entry) = current.as_mut() {
                            entry.remarks = non_empty(&text);
                        }
                    }
                    (b"example", Some(Section::Example)) => {
                        if let Some(entry) = current.as_mut() {
                            entry.example = non_empty(&text);
                        }
                    }
                    // End of markup nested inside a section: restore it.
                    (_, restored) => section = restored,
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { entries })
    }
}

enum Section {
    Summary,
    Param(String),
    Remarks,
    Example,
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> anyhow::Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| anyhow::anyhow!("attribute error: {e}"))?;
        if attr.key.as_ref() == key {
            let value = attr
                .unescape_value()
                .map_err(|e| anyhow::anyhow!("attribute value error: {e}"))?;
            return Ok(Some(value.to_string()));
        }
    }
    Ok(None)
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
