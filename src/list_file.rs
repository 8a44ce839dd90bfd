use chrono::Local;
use log::{info, warn};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::annotation::read_image_labels;
use crate::config::ListConfig;
use crate::error::{ListError, Result};
use crate::io::read_index_list;
use crate::types::PhaseSummary;
use crate::utils::{create_progress_bar, join_labels};

/// Path of the list file written for `phase`.
pub fn list_file_path(output_dir: &Path, phase: &str) -> PathBuf {
    output_dir.join(format!("{}.list.txt", phase))
}

/// Suffix appended to every line: the ignore separator followed by the ignored labels.
///
/// Empty when either the ignore list or the ignore separator is empty.
pub fn ignore_suffix(ignore_list: &[usize], ignore_separator: &str, label_separator: &str) -> String {
    if ignore_list.is_empty() || ignore_separator.is_empty() {
        return String::new();
    }
    format!(
        "{}{}",
        ignore_separator,
        join_labels(ignore_list, label_separator)
    )
}

/// Header comment written at the top of each list file.
pub fn header_line(phase: &str) -> String {
    format!(
        "# {} file list generated on {}\n",
        phase,
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f")
    )
}

/// Format one list entry: `<image_dir>/<index><image_ext> <labels><suffix>`.
pub fn format_entry(
    index: &str,
    labels: &BTreeSet<usize>,
    config: &ListConfig,
    suffix: &str,
) -> String {
    format!(
        "{}/{}{} {}{}\n",
        config.image_dir,
        index,
        config.image_ext,
        join_labels(labels, &config.label_separator),
        suffix
    )
}

/// Create `<output_dir>/<phase>.list.txt`, overwriting any previous file.
///
/// The first missing or malformed annotation aborts the phase; lines already
/// written stay in the file.
pub fn create_list_file(config: &ListConfig, phase: &str) -> Result<PhaseSummary> {
    let indices = read_index_list(&config.pascal_root, phase)?;
    let suffix = ignore_suffix(
        &config.ignore_list,
        &config.ignore_separator,
        &config.label_separator,
    );

    let filename = list_file_path(&config.output_dir, phase);
    let file = File::create(&filename).map_err(|e| ListError::write(&filename, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(header_line(phase).as_bytes())
        .map_err(|e| ListError::write(&filename, e))?;

    let pb = create_progress_bar(indices.len() as u64, phase);
    let mut summary = PhaseSummary::new(phase);
    for index in &indices {
        let labels = read_image_labels(index, &config.pascal_root, &config.ignore_list)
            .map_err(|e| {
                pb.abandon();
                e
            })?;
        if labels.is_empty() {
            warn!("No labels left for {} in phase {}", index, phase);
        }
        let line = format_entry(index, &labels, config, &suffix);
        writer
            .write_all(line.as_bytes())
            .map_err(|e| ListError::write(&filename, e))?;
        summary.record(labels.len());
        pb.inc(1);
    }
    writer.flush().map_err(|e| ListError::write(&filename, e))?;
    pb.finish_and_clear();

    info!("Wrote {} entries to {}", summary.images_written, filename.display());
    Ok(summary)
}
