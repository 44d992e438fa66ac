//! Test helpers for writing small places datasets to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const PLACES_CSV: &str = "\
Zone,State,City,Name,Google review rating,Number of google review in lakhs
Northern,Delhi,Delhi,India Gate,4.6,2.6
Northern,Uttar Pradesh,Agra,Taj Mahal,4.6,2.3
Western,Maharashtra,Mumbai,Gateway of India,4.6,3.2
Western,Maharashtra,Pune,Shaniwar Wada,4.3,0.6
Southern,Tamil Nadu,Chennai,Marina Beach,4.4,1.5
Eastern,West Bengal,Kolkata,Victoria Memorial,4.6,1.8
";

/// Temporary workspace holding a dataset and room for a report.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
    dataset: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let dataset = root.join("places.csv");
        fs::write(&dataset, PLACES_CSV).expect("write dataset");
        Self {
            _dir: dir,
            root,
            dataset,
        }
    }

    pub(super) fn dataset(&self) -> &Utf8Path {
        &self.dataset
    }

    pub(super) fn report(&self) -> Utf8PathBuf {
        self.root.join("output").join("sample_output.txt")
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("utf-8 output")
}
