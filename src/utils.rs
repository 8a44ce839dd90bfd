use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb
}

/// Join label indices with `separator`, in iteration order.
pub fn join_labels<'a, I>(labels: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a usize>,
{
    labels
        .into_iter()
        .map(|label| label.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
