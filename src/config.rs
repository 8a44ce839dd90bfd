use clap::Parser;
use std::path::PathBuf;

use crate::classes::{BACKGROUND_INDEX, NUM_CLASSES};
use crate::error::{ListError, Result};

pub const DEFAULT_PASCAL_ROOT: &str = "data/pascal/VOC2012";
pub const DEFAULT_OUTPUT_DIR: &str = "examples/pascal";
pub const DEFAULT_PHASES: [&str; 3] = ["train", "trainval", "val"];
pub const DEFAULT_IMAGE_DIR: &str = "JPEGImages";
pub const DEFAULT_IMAGE_EXT: &str = ".jpg";

/// Command-line arguments for generating multi-label list files from PASCAL VOC annotations.
///
/// Every flag defaults to the standard layout, so running without arguments
/// builds `train`, `trainval` and `val` lists for `data/pascal/VOC2012`.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Root of the VOC dataset (contains Annotations/ and ImageSets/)
    #[arg(short = 'r', long = "pascal_root", default_value = DEFAULT_PASCAL_ROOT)]
    pub pascal_root: PathBuf,

    /// Directory the <phase>.list.txt files are written to
    #[arg(short = 'o', long = "output_dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Separator placed between label indices
    #[arg(long = "label_separator", default_value = " ")]
    pub label_separator: String,

    /// Separator introducing the ignored labels at the end of each line
    #[arg(long = "ignore_separator", default_value = ";")]
    pub ignore_separator: String,

    /// Class indices removed from every label set
    #[arg(long = "ignore_list", use_value_delimiter = true, default_value = "0")]
    pub ignore_list: Vec<usize>,

    /// Keep every class, including background, and drop the ignore suffix
    #[arg(long = "no_ignore", conflicts_with = "ignore_list")]
    pub no_ignore: bool,

    /// Dataset splits to generate, in order
    #[arg(long = "phases", use_value_delimiter = true, default_value = "train,trainval,val")]
    pub phases: Vec<String>,

    /// Image directory written in front of every identifier
    #[arg(long = "image_dir", default_value = DEFAULT_IMAGE_DIR)]
    pub image_dir: String,

    /// Image file extension, including the dot
    #[arg(long = "image_ext", default_value = DEFAULT_IMAGE_EXT)]
    pub image_ext: String,
}

/// Validated settings for one list-generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub pascal_root: PathBuf,
    pub output_dir: PathBuf,
    pub label_separator: String,
    pub ignore_separator: String,
    pub ignore_list: Vec<usize>,
    pub phases: Vec<String>,
    pub image_dir: String,
    pub image_ext: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            pascal_root: PathBuf::from(DEFAULT_PASCAL_ROOT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            label_separator: " ".to_string(),
            ignore_separator: ";".to_string(),
            ignore_list: vec![BACKGROUND_INDEX],
            phases: DEFAULT_PHASES.iter().map(|p| p.to_string()).collect(),
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            image_ext: DEFAULT_IMAGE_EXT.to_string(),
        }
    }
}

impl ListConfig {
    /// Check the settings before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.label_separator.is_empty() {
            return Err(ListError::Config(
                "label separator must not be empty".to_string(),
            ));
        }
        if self.phases.is_empty() {
            return Err(ListError::Config("at least one phase is required".to_string()));
        }
        for phase in &self.phases {
            if phase.is_empty() || phase.contains(['/', '\\']) {
                return Err(ListError::Config(format!("invalid phase name '{}'", phase)));
            }
        }
        if let Some(index) = self.ignore_list.iter().find(|&&i| i >= NUM_CLASSES) {
            return Err(ListError::Config(format!(
                "ignore index {} is outside the {} class vocabulary",
                index, NUM_CLASSES
            )));
        }
        Ok(())
    }
}

impl Args {
    pub fn to_list_config(&self) -> Result<ListConfig> {
        let config = ListConfig {
            pascal_root: self.pascal_root.clone(),
            output_dir: self.output_dir.clone(),
            label_separator: self.label_separator.clone(),
            ignore_separator: self.ignore_separator.clone(),
            ignore_list: if self.no_ignore {
                Vec::new()
            } else {
                self.ignore_list.clone()
            },
            phases: self
                .phases
                .iter()
                .map(|p| p.trim().to_string())
                .collect(),
            image_dir: self.image_dir.clone(),
            image_ext: self.image_ext.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}
