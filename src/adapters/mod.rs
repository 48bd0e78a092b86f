// Adapters layer: concrete data providers behind the domain ports.

pub mod catalog_file;
pub mod fixtures;

pub use catalog_file::FileCatalog;
pub use fixtures::SampleData;
