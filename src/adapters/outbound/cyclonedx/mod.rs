/// CycloneDX JSON decoding
mod bom_document;

pub use bom_document::CycloneDxParser;
