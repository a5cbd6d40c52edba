//! Provider manifests: plain-text registration sources on disk.

pub mod directory;
pub mod reader;

pub use directory::ManifestDirectory;
pub use reader::ManifestReader;
