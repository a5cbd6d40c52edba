use super::reader::ManifestReader;
use crate::domain::ports::RegistrationSource;
use crate::domain::registration::ProviderEntry;
use crate::error::DiscoveryError;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A directory of provider manifests, one file per capability.
///
/// The manifest for capability `paylink.PaymentService` lives at
/// `<root>/paylink.PaymentService`. A capability without a manifest has no
/// providers. Files are read again on every call.
#[derive(Debug, Clone)]
pub struct ManifestDirectory {
    root: PathBuf,
}

impl ManifestDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the manifest file for `capability`.
    pub fn manifest_path(&self, capability: &str) -> PathBuf {
        self.root.join(capability)
    }
}

impl RegistrationSource for ManifestDirectory {
    fn entries(&self, capability: &str) -> Result<Vec<ProviderEntry>, DiscoveryError> {
        if !fs::metadata(&self.root)?.is_dir() {
            return Err(DiscoveryError::IoError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("manifest directory {} is not a directory", self.root.display()),
            )));
        }

        let path = self.manifest_path(capability);
        match File::open(&path) {
            Ok(file) => ManifestReader::new(capability, file).entries().collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(manifest = %path.display(), "no manifest for capability");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
