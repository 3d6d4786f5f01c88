/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the outside:
/// a catalogue source, a formatter, an output destination and a place to
/// report progress.
pub mod catalogue_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalogue_reader::CatalogueReader;
pub use formatter::TreeFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
