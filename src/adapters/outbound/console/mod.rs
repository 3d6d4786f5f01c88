/// Console adapters for user-facing status output
mod stderr_progress_reporter;

pub use stderr_progress_reporter::StderrProgressReporter;
