use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writing to stderr keeps status lines out of the rendered tree, so
/// `bom-tree bom.json > tree.txt` captures only the tree.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!("{}", message);
    }
}
