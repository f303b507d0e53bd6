use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::dataset::Example;
use crate::error::Error;
use crate::normalize::Normalize;

use super::LengthStats;

/// Walk `<split_dir>/<sentiment>/*.txt` for each sentiment, in the given order.
///
/// Only the first line of each file is read. Examples that normalize to an empty string are dropped
/// and do not count in the statistics.
/// Files are visited in alphabetical order within a sentiment directory.
///
/// Fails with [Error::Layout] if the split or a sentiment directory is missing,
/// and with [Error::Io] on unreadable or non UTF-8 files.
pub fn walk_split<S, N>(
    split_dir: &Path,
    sentiments: &[S],
    normalizer: &N,
) -> Result<(Vec<Example>, LengthStats), Error>
where
    S: AsRef<str>,
    N: Normalize + ?Sized,
{
    if !split_dir.is_dir() {
        return Err(Error::Layout(split_dir.to_path_buf()));
    }

    let mut examples = Vec::new();
    let mut stats = LengthStats::default();

    for sentiment in sentiments {
        let sentiment = sentiment.as_ref();
        let mut kept = 0;
        let mut dropped = 0;

        for path in example_files(split_dir, sentiment)? {
            let text = normalizer.normalize(&first_line(&path)?);
            if text.is_empty() {
                debug!("{:?} is empty after normalization, skipping", path);
                dropped += 1;
                continue;
            }

            stats.update(text.split_whitespace().count());
            examples.push(Example::new(sentiment.to_string(), text));
            kept += 1;
        }

        info!(
            "[{:?}/{}] kept {} examples, dropped {}",
            split_dir, sentiment, kept, dropped
        );
    }

    Ok((examples, stats))
}

/// `*.txt` files of `<split_dir>/<sentiment>`, sorted by glob. Hidden files are not matched.
fn example_files(split_dir: &Path, sentiment: &str) -> Result<Vec<PathBuf>, Error> {
    let sentiment_dir = split_dir.join(sentiment);
    if !sentiment_dir.is_dir() {
        return Err(Error::Layout(sentiment_dir));
    }

    let pattern = format!(
        "{}/*.txt",
        glob::Pattern::escape(&sentiment_dir.to_string_lossy())
    );
    debug!("globbing {}", pattern);

    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        files.push(entry?);
    }
    Ok(files)
}

/// First line of the file, without its line terminator.
fn first_line(path: &Path) -> Result<String, Error> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}
