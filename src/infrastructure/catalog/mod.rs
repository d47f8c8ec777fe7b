//! Element catalog implementations

mod fixture;
mod process;

pub use fixture::StaticCatalog;
pub use process::ProcessCatalog;
