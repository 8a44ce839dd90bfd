//! PASCAL VOC to multi-label list converter
//!
//! This library turns PASCAL VOC XML annotations into `<phase>.list.txt` files,
//! one line per image holding its relative path and the indices of the classes
//! it contains, for training multi-label image classifiers.

pub mod annotation;
pub mod classes;
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod list_file;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use annotation::{parse_labels, read_image_labels};
pub use classes::{class_index, class_name, VOC_CLASSES};
pub use config::{Args, ListConfig};
pub use dataset::process_dataset;
pub use error::{ListError, Result};
pub use io::read_index_list;
pub use list_file::create_list_file;
pub use types::{PhaseSummary, VocAnnotation, VocObject};
