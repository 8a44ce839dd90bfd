// The parts of a PASCAL VOC annotation document that list generation reads:
// every <object> element at any depth, with its class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocAnnotation {
    pub objects: Vec<VocObject>,
}

// A single annotated object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocObject {
    pub name: String,
}

// Struct to hold per-phase statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PhaseSummary {
    pub phase: String,
    pub images_written: usize,
    pub labels_written: usize,
    pub images_without_labels: usize,
}

impl PhaseSummary {
    pub fn new(phase: &str) -> Self {
        Self {
            phase: phase.to_string(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, label_count: usize) {
        self.images_written += 1;
        self.labels_written += label_count;
        if label_count == 0 {
            self.images_without_labels += 1;
        }
    }

    pub fn print_summary(&self) {
        log::info!("=== {} Summary ===", self.phase);
        log::info!("Images written: {}", self.images_written);
        log::info!("Labels written: {}", self.labels_written);
        if self.images_without_labels > 0 {
            log::warn!(
                "Images with no labels after filtering: {}",
                self.images_without_labels
            );
        }
    }
}
