use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::classes::class_index;
use crate::error::{ListError, Result};
use crate::io::annotation_path;
use crate::types::{VocAnnotation, VocObject};

fn malformed(path: &Path, message: impl Into<String>) -> ListError {
    ListError::MalformedAnnotation {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

// An <object> whose closing tag has not been read yet
struct OpenObject {
    depth: usize,
    slot: usize,
}

/// Parse the text of a VOC annotation file.
///
/// Every `<object>` element is collected, however deeply it is nested. An
/// object's class is the text of the first `<name>` element inside it.
/// Anything but whitespace or comments after the root element is rejected.
pub fn parse_annotation(xml: &str, path: &Path) -> Result<VocAnnotation> {
    let mut reader = Reader::from_str(xml);

    let mut depth = 0usize;
    let mut root_seen = false;
    let mut root_closed = false;
    let mut names: Vec<Option<String>> = Vec::new();
    let mut open_objects: Vec<OpenObject> = Vec::new();
    // Depth and accumulated text of the <name> element being read
    let mut name_text: Option<(usize, String)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| malformed(path, e.to_string()))?;
        match event {
            Event::Start(e) => {
                if root_closed {
                    return Err(malformed(path, "junk after document element"));
                }
                depth += 1;
                root_seen = true;
                match e.name().as_ref() {
                    b"object" => {
                        open_objects.push(OpenObject {
                            depth,
                            slot: names.len(),
                        });
                        names.push(None);
                    }
                    b"name" if name_text.is_none() => {
                        if open_objects.iter().any(|o| names[o.slot].is_none()) {
                            name_text = Some((depth, String::new()));
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if root_closed {
                    return Err(malformed(path, "junk after document element"));
                }
                if depth == 0 {
                    root_seen = true;
                    root_closed = true;
                }
                match e.name().as_ref() {
                    b"object" => return Err(malformed(path, "<object> without <name>")),
                    b"name" if open_objects.iter().any(|o| names[o.slot].is_none()) => {
                        return Err(malformed(path, "empty <name> element"));
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                if depth == 0 {
                    if !t.iter().all(u8::is_ascii_whitespace) {
                        return Err(malformed(path, "text outside the document element"));
                    }
                } else if let Some((_, text)) = name_text.as_mut() {
                    let unescaped = t.unescape().map_err(|e| malformed(path, e.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(c) => {
                if depth == 0 {
                    return Err(malformed(path, "CDATA outside the document element"));
                }
                if let Some((_, text)) = name_text.as_mut() {
                    let data = std::str::from_utf8(&c).map_err(|e| malformed(path, e.to_string()))?;
                    text.push_str(data);
                }
            }
            Event::End(_) => {
                if let Some((name_depth, text)) = name_text.take() {
                    if name_depth == depth {
                        for object in &open_objects {
                            names[object.slot].get_or_insert_with(|| text.clone());
                        }
                    } else {
                        name_text = Some((name_depth, text));
                    }
                }
                if open_objects.last().is_some_and(|o| o.depth == depth) {
                    if let Some(object) = open_objects.pop() {
                        if names[object.slot].is_none() {
                            return Err(malformed(path, "<object> without <name>"));
                        }
                    }
                }
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        return Err(malformed(path, "no document element"));
    }
    if depth != 0 {
        return Err(malformed(path, "unexpected end of document"));
    }

    Ok(VocAnnotation {
        objects: names
            .into_iter()
            .flatten()
            .map(|name| VocObject { name })
            .collect(),
    })
}

/// Resolve every object of `annotation` and remove the ignored indices.
///
/// Duplicate objects collapse into one label. The set iterates in ascending
/// index order, which keeps the written lists reproducible.
pub fn collect_labels(
    annotation: &VocAnnotation,
    ignore_list: &[usize],
    path: &Path,
) -> Result<BTreeSet<usize>> {
    let mut labels = BTreeSet::new();
    for object in &annotation.objects {
        let index = class_index(&object.name).map_err(|e| e.with_path(path))?;
        labels.insert(index);
    }
    for ignored in ignore_list {
        labels.remove(ignored);
    }
    Ok(labels)
}

/// Parse annotation text held in memory and return its label set.
pub fn parse_labels(xml: &str, ignore_list: &[usize], path: &Path) -> Result<BTreeSet<usize>> {
    let annotation = parse_annotation(xml, path)?;
    collect_labels(&annotation, ignore_list, path)
}

/// Read `<root>/Annotations/<index>.xml` and return the classes it contains.
pub fn read_image_labels(index: &str, root: &Path, ignore_list: &[usize]) -> Result<BTreeSet<usize>> {
    let path = annotation_path(root, index);
    let bytes = fs::read(&path).map_err(|e| ListError::missing_file(&path, e))?;
    let xml = String::from_utf8(bytes).map_err(|e| malformed(&path, e.to_string()))?;
    let annotation = parse_annotation(&xml, &path)?;
    debug!(
        "Loaded {} ({} objects)",
        path.display(),
        annotation.objects.len()
    );
    collect_labels(&annotation, ignore_list, &path)
}
