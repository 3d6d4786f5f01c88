/// Mock implementations for testing
mod mock_catalogue_reader;
mod mock_progress_reporter;

pub use mock_catalogue_reader::MockCatalogueReader;
pub use mock_progress_reporter::MockProgressReporter;
