/*! Loader configuration

Every option has the same default as the upstream IMDB loader, so `ImdbConfig::default()` followed by
setting `train`/`test` is the usual way in.
Configurations can also be read from a JSON file, where any missing field takes its default.
!*/
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::error::Error;

pub const DEFAULT_URL: &str = "http://ai.stanford.edu/~amaas/data/sentiment/aclImdb_v1.tar.gz";

/// A (requested, directory name) pair for one of the known splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDescriptor<'a> {
    pub requested: bool,
    pub directory: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImdbConfig {
    /// Directory to cache the dataset.
    pub directory: PathBuf,
    pub train: bool,
    pub test: bool,
    pub train_directory: String,
    pub test_directory: String,
    /// Name of the directory the archive extracts into.
    pub extracted_name: String,
    /// Relative to [ImdbConfig::directory]. If these all exist, download and extraction are skipped.
    pub check_files: Vec<PathBuf>,
    pub url: String,
    /// Sentiment subdirectories to read, in order. Also used as labels.
    pub sentiments: Vec<String>,
}

impl Default for ImdbConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data/"),
            train: false,
            test: false,
            train_directory: "train".to_string(),
            test_directory: "test".to_string(),
            extracted_name: "aclImdb".to_string(),
            check_files: vec![PathBuf::from("aclImdb/README")],
            url: DEFAULT_URL.to_string(),
            sentiments: vec!["pos".to_string(), "neg".to_string()],
        }
    }
}

impl ImdbConfig {
    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(f))?;
        Ok(config)
    }

    /// Descriptors for (train, test), always in that order.
    pub fn split_descriptors(&self) -> [SplitDescriptor<'_>; 2] {
        [
            SplitDescriptor {
                requested: self.train,
                directory: &self.train_directory,
            },
            SplitDescriptor {
                requested: self.test,
                directory: &self.test_directory,
            },
        ]
    }

    /// Directory names of the requested splits, train first.
    pub fn requested_splits(&self) -> Vec<&str> {
        self.split_descriptors()
            .into_iter()
            .filter(|d| d.requested)
            .map(|d| d.directory)
            .collect()
    }

    /// `<directory>/<extracted_name>/<split_directory>`
    pub fn split_path(&self, split_directory: &str) -> PathBuf {
        [
            self.directory.as_path(),
            Path::new(&self.extracted_name),
            Path::new(split_directory),
        ]
        .iter()
        .collect()
    }
}
