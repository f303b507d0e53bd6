use std::cell::Cell;
use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::{write::GzEncoder, Compression};
use imdb_loader::{
    download::{Downloader, Fetch, HttpFetcher},
    error::Error,
    imdb::{imdb_dataset, imdb_dataset_with, load_split},
    normalize::TextPreprocess,
    Example, ImdbConfig, Splits,
};
use reqwest::Url;

/// (path inside the archive, content)
fn corpus_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("aclImdb/README", "Large Movie Review Dataset v1.0"),
        ("aclImdb/train/pos/1.txt", "Great movie!!  "),
        ("aclImdb/train/neg/1.txt", ""),
        ("aclImdb/test/pos/1.txt", "Loved it.<br /><br />Would watch again"),
        ("aclImdb/test/neg/1.txt", "Awful &amp; boring\nsecond line"),
        ("aclImdb/test/neg/2.txt", "Meh"),
    ]
}

fn build_archive(path: &Path, files: &[(&str, &str)]) {
    let enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    let mut builder = tar::Builder::new(enc);
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, content.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

/// archive served through a file:// url, and an empty cache directory.
fn setup(root: &Path) -> ImdbConfig {
    let archive = root.join("aclImdb_v1.tar.gz");
    build_archive(&archive, &corpus_files());
    ImdbConfig {
        directory: root.join("cache"),
        url: Url::from_file_path(&archive).unwrap().to_string(),
        ..Default::default()
    }
}

fn ex(label: &str, text: &str) -> Example {
    Example::new(label.to_string(), text.to_string())
}

struct CountingFetcher<'a> {
    inner: HttpFetcher,
    calls: &'a Cell<usize>,
}

impl Fetch for CountingFetcher<'_> {
    fn fetch(&self, url: &Url, dst: &Path) -> Result<(), Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch(url, dst)
    }
}

#[test_log::test]
fn train_only_scenario() {
    let root = tempfile::tempdir().unwrap();
    let config = ImdbConfig {
        train: true,
        ..setup(root.path())
    };

    let train = match imdb_dataset(&config).unwrap() {
        Splits::Single(d) => d,
        other => panic!("expected a single split, got {:?}", other),
    };
    assert_eq!(train.rows(), &[ex("pos", "Great movie!!")]);

    let (_, stats) = load_split(&config, "train", &TextPreprocess).unwrap();
    assert_eq!((stats.min(), stats.max()), (Some(2), 2));
}

#[test_log::test]
fn both_splits_are_train_then_test() {
    let root = tempfile::tempdir().unwrap();
    let config = ImdbConfig {
        train: true,
        test: true,
        ..setup(root.path())
    };

    match imdb_dataset(&config).unwrap() {
        Splits::Pair(train, test) => {
            assert_eq!(train.len(), 1);
            assert_eq!(
                test.into_inner(),
                vec![
                    ex("pos", "Loved it. Would watch again"),
                    ex("neg", "Awful & boring"),
                    ex("neg", "Meh"),
                ]
            );
        }
        other => panic!("expected a pair, got {:?}", other),
    }
}

#[test]
fn sentiment_order_follows_config() {
    let root = tempfile::tempdir().unwrap();
    let config = ImdbConfig {
        test: true,
        sentiments: vec!["neg".to_string(), "pos".to_string()],
        ..setup(root.path())
    };

    let test = match imdb_dataset(&config).unwrap() {
        Splits::Single(d) => d,
        other => panic!("expected a single split, got {:?}", other),
    };
    let labels: Vec<_> = test.iter().map(Example::label).collect();
    assert_eq!(labels, vec!["neg", "neg", "pos"]);
}

#[test]
fn no_split_requested() {
    let root = tempfile::tempdir().unwrap();
    let config = setup(root.path());

    assert_eq!(imdb_dataset(&config).unwrap(), Splits::Empty);
    // acquisition still happened
    assert!(config.directory.join("aclImdb/README").exists());
}

#[test]
fn acquisition_is_idempotent() {
    let root = tempfile::tempdir().unwrap();
    let config = ImdbConfig {
        train: true,
        ..setup(root.path())
    };
    let calls = Cell::new(0);
    let downloader = Downloader::new(CountingFetcher {
        inner: HttpFetcher::default(),
        calls: &calls,
    });

    let first = imdb_dataset_with(&config, &downloader, &TextPreprocess).unwrap();
    let second = imdb_dataset_with(&config, &downloader, &TextPreprocess).unwrap();
    assert_eq!(first, second);

    let archive = downloader
        .download_file_maybe_extract(&config.url, &config.directory, &config.check_files)
        .unwrap();
    assert_eq!(archive, config.directory.join("aclImdb_v1.tar.gz"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn missing_sentiment_is_a_layout_error() {
    let root = tempfile::tempdir().unwrap();
    let config = ImdbConfig {
        train: true,
        sentiments: vec!["pos".to_string(), "unsup".to_string()],
        ..setup(root.path())
    };

    match imdb_dataset(&config) {
        Err(Error::Layout(p)) => {
            assert_eq!(p, config.directory.join("aclImdb/train/unsup"))
        }
        other => panic!("expected layout error, got {:?}", other),
    }
}

#[test]
fn missing_check_file_is_an_acquisition_error() {
    let root = tempfile::tempdir().unwrap();
    let config = ImdbConfig {
        train: true,
        check_files: vec![PathBuf::from("aclImdb/imdb.vocab")],
        ..setup(root.path())
    };

    assert!(matches!(
        imdb_dataset(&config),
        Err(Error::Acquisition(_))
    ));
}

#[test]
fn split_names_line_up_with_datasets() {
    let root = tempfile::tempdir().unwrap();
    let config = ImdbConfig {
        train: true,
        test: true,
        ..setup(root.path())
    };

    let splits = imdb_dataset(&config).unwrap();
    let sizes: Vec<_> = config
        .requested_splits()
        .into_iter()
        .zip(splits.into_vec())
        .map(|(name, dataset)| (name, dataset.len()))
        .collect();
    assert_eq!(sizes, vec![("train", 1), ("test", 3)]);
}
