/*! IMDB loader

Large Movie Review Dataset v1.0 (<http://ai.stanford.edu/~amaas/data/sentiment/>):
25,000 polar movie reviews for training and 25,000 for testing.

```no_run
use imdb_loader::{imdb::{imdb_dataset, Splits}, ImdbConfig};

let config = ImdbConfig { train: true, ..Default::default() };
if let Splits::Single(train) = imdb_dataset(&config)? {
    println!("{} {}", train[0].label(), train[0].text());
}
# Ok::<(), imdb_loader::error::Error>(())
```
!*/
use log::info;

use crate::config::ImdbConfig;
use crate::corpus::{walk_split, LengthStats};
use crate::dataset::{Dataset, Example};
use crate::download::{Downloader, Fetch};
use crate::error::Error;
use crate::normalize::{Normalize, TextPreprocess};

/// Materialized splits, shaped by how many were requested.
///
/// When both are requested they always come as (train, test).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splits {
    Empty,
    Single(Dataset<Example>),
    Pair(Dataset<Example>, Dataset<Example>),
}

impl Splits {
    fn from_vec(mut datasets: Vec<Dataset<Example>>) -> Result<Self, Error> {
        match datasets.len() {
            0 => Ok(Splits::Empty),
            1 => Ok(Splits::Single(datasets.remove(0))),
            2 => {
                let test = datasets.remove(1);
                let train = datasets.remove(0);
                Ok(Splits::Pair(train, test))
            }
            n => Err(Error::Custom(format!("expected at most 2 splits, got {}", n))),
        }
    }

    /// Datasets in (train, test) order.
    pub fn into_vec(self) -> Vec<Dataset<Example>> {
        match self {
            Splits::Empty => Vec::new(),
            Splits::Single(d) => vec![d],
            Splits::Pair(train, test) => vec![train, test],
        }
    }
}

/// Load the requested splits, downloading over http and cleaning reviews with [TextPreprocess].
pub fn imdb_dataset(config: &ImdbConfig) -> Result<Splits, Error> {
    imdb_dataset_with(config, &Downloader::default(), &TextPreprocess)
}

/// Load the requested splits with the provided collaborators.
///
/// Requesting no split still goes through acquisition, then returns [Splits::Empty].
pub fn imdb_dataset_with<F, N>(
    config: &ImdbConfig,
    downloader: &Downloader<F>,
    normalizer: &N,
) -> Result<Splits, Error>
where
    F: Fetch,
    N: Normalize + ?Sized,
{
    downloader.download_file_maybe_extract(&config.url, &config.directory, &config.check_files)?;

    let mut datasets = Vec::with_capacity(2);
    for split_directory in config.requested_splits() {
        let (dataset, _) = load_split(config, split_directory, normalizer)?;
        datasets.push(dataset);
    }

    Splits::from_vec(datasets)
}

/// Load a single, already extracted split, logging its word count statistics.
pub fn load_split<N>(
    config: &ImdbConfig,
    split_directory: &str,
    normalizer: &N,
) -> Result<(Dataset<Example>, LengthStats), Error>
where
    N: Normalize + ?Sized,
{
    let full_path = config.split_path(split_directory);
    let (examples, stats) = walk_split(&full_path, &config.sentiments, normalizer)?;

    info!("[{}] {} examples", split_directory, examples.len());
    for line in stats.to_string().lines() {
        info!("[{}] {}", split_directory, line);
    }

    Ok((Dataset::new(examples), stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(label: &str, text: &str) -> Example {
        Example::new(label.to_string(), text.to_string())
    }

    #[test]
    fn shape() {
        assert_eq!(Splits::from_vec(vec![]).unwrap(), Splits::Empty);

        let a = Dataset::new(vec![ex("pos", "a")]);
        let b = Dataset::new(vec![ex("neg", "b")]);
        assert_eq!(
            Splits::from_vec(vec![a.clone()]).unwrap(),
            Splits::Single(a.clone())
        );
        assert_eq!(
            Splits::from_vec(vec![a.clone(), b.clone()]).unwrap(),
            Splits::Pair(a.clone(), b.clone())
        );
        assert!(Splits::from_vec(vec![a.clone(), b.clone(), a.clone()]).is_err());
    }

    #[test]
    fn into_vec() {
        let a = Dataset::new(vec![ex("pos", "a")]);
        let b = Dataset::new(vec![ex("neg", "b")]);
        assert_eq!(
            Splits::Pair(a.clone(), b.clone()).into_vec(),
            vec![a, b]
        );
        assert!(Splits::Empty.into_vec().is_empty());
    }
}
