use log::info;

use crate::config::ListConfig;
use crate::error::Result;
use crate::io::ensure_output_directory;
use crate::list_file::create_list_file;
use crate::types::PhaseSummary;

/// Generate the list file of every configured phase, in order.
///
/// Stops at the first error; phases after the failing one are not processed.
pub fn process_dataset(config: &ListConfig) -> Result<Vec<PhaseSummary>> {
    config.validate()?;
    ensure_output_directory(&config.output_dir)?;

    let mut summaries = Vec::with_capacity(config.phases.len());
    for phase in &config.phases {
        info!("Creating list for {}", phase);
        let summary = create_list_file(config, phase)?;
        summary.print_summary();
        summaries.push(summary);
    }
    Ok(summaries)
}
