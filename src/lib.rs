pub mod dupes;
pub mod error;
pub mod report;
pub mod table;

pub use error::CheckError;
