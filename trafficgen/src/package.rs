//! Package of generated destination files.

use std::fs;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::config::ConfigError;
use crate::vhdl::VhdlPackage;

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("file system error: {error:?}")]
    Fs { error: io::Error },

    #[error("configuration error: {error}")]
    Config { error: ConfigError },
}

impl From<ConfigError> for PackageError {
    fn from(error: ConfigError) -> Self { PackageError::Config { error } }
}

/// Collection of generated VHDL packages, written out in one pass.
#[derive(Debug, Default)]
pub struct Package {
    /// Generated packages.
    pub packages: Vec<VhdlPackage>,
}

impl Package {
    /// Adds the given VHDL package.
    pub fn add(&mut self, package: VhdlPackage) { self.packages.push(package); }

    /// Writes every package to the given directory.
    pub fn gen_vhdl<P: AsRef<Path>>(&self, path_dir: P) -> Result<(), PackageError> {
        fs::create_dir_all(path_dir.as_ref()).map_err(|error| PackageError::Fs { error })?;

        for package in &self.packages {
            let path = path_dir.as_ref().join(&package.file_name);
            let mut file = File::create(path).map_err(|error| PackageError::Fs { error })?;
            file.write_all(package.to_string().as_bytes()).map_err(|error| PackageError::Fs { error })?;
            tracing::info!(file = %package.file_name, "wrote destination package");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::pattern::DestinationList;
    use crate::vhdl::Banner;

    fn banner() -> Banner {
        Banner {
            file: "destinations_file.vhd".to_string(),
            created: "29/07/2020".to_string(),
            last_changed: "29/07/2020".to_string(),
            author: vec!["Mesh testbench generators".to_string()],
            notes: vec![],
        }
    }

    #[test]
    fn written_file_is_the_package_text() {
        let dir = env::temp_dir().join("trafficgen-package-test");
        let vhdl = VhdlPackage::hotspot(&DestinationList::new(2, vec![0, 1, 2]), banner());
        let expected = vhdl.to_string();

        let mut package = Package::default();
        package.add(vhdl);
        package.gen_vhdl(&dir).unwrap();

        let written = fs::read_to_string(dir.join("destinations_hotspot_2.txt")).unwrap();
        assert_eq!(written, expected);
        fs::remove_dir_all(&dir).unwrap();
    }
}
