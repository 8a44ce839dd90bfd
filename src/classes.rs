use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{ListError, Result};

/// The PASCAL VOC class vocabulary. Index 0 is the background placeholder.
pub const VOC_CLASSES: [&str; 21] = [
    "__background__",
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
];

pub const NUM_CLASSES: usize = VOC_CLASSES.len();

/// Index of the background class, ignored by default.
pub const BACKGROUND_INDEX: usize = 0;

// Precomputed name -> index map for fast lookup
static CLASS_TO_INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

fn class_to_index() -> &'static HashMap<&'static str, usize> {
    CLASS_TO_INDEX.get_or_init(|| {
        VOC_CLASSES
            .iter()
            .enumerate()
            .map(|(id, name)| (*name, id))
            .collect()
    })
}

/// Resolve a class name to its vocabulary index.
///
/// The name is lowercased and trimmed first, so `" Dog\n"` resolves like `"dog"`.
pub fn class_index(name: &str) -> Result<usize> {
    let normalized = name.trim().to_lowercase();
    class_to_index()
        .get(normalized.as_str())
        .copied()
        .ok_or(ListError::UnknownClass {
            name: normalized,
            path: None,
        })
}

/// Reverse lookup of [`class_index`].
pub fn class_name(index: usize) -> Option<&'static str> {
    VOC_CLASSES.get(index).copied()
}
