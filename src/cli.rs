//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use imdb_loader::{error::Error, ImdbConfig};

#[derive(Debug, StructOpt)]
#[structopt(name = "imdb-loader", about = "IMDB sentiment corpus loader.")]
/// Holds every command that is callable by the `imdb-loader` command.
pub enum ImdbLoader {
    #[structopt(about = "Download and extract the corpus")]
    Download(Download),
    #[structopt(about = "Load splits and write them as JSON lines")]
    Load(Load),
}

#[derive(Debug, StructOpt)]
/// Options shared by every command.
pub struct Source {
    #[structopt(
        parse(from_os_str),
        long = "config",
        short = "c",
        help = "JSON configuration file. Flags override its values."
    )]
    pub config: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "directory",
        short = "d",
        help = "cache directory. Default is data/."
    )]
    pub directory: Option<PathBuf>,
    #[structopt(long = "url", help = "archive location")]
    pub url: Option<String>,
}

impl Source {
    /// Build a configuration from the optional config file, then apply flags.
    pub fn config(&self) -> Result<ImdbConfig, Error> {
        let mut config = match &self.config {
            Some(path) => ImdbConfig::from_json_file(path)?,
            None => ImdbConfig::default(),
        };
        if let Some(directory) = &self.directory {
            config.directory = directory.clone();
        }
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        Ok(config)
    }
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
pub struct Download {
    #[structopt(flatten)]
    pub source: Source,
}

#[derive(Debug, StructOpt)]
/// Load command and parameters.
///
/// Each loaded split is written to `<dst>/<split directory>.jsonl`.
pub struct Load {
    #[structopt(flatten)]
    pub source: Source,
    #[structopt(long = "train", help = "load the training split")]
    pub train: bool,
    #[structopt(long = "test", help = "load the test split")]
    pub test: bool,
    #[structopt(
        long = "sentiments",
        use_delimiter = true,
        help = "sentiments to load, in order. Default is pos,neg."
    )]
    pub sentiments: Option<Vec<String>>,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
}

impl Load {
    pub fn config(&self) -> Result<ImdbConfig, Error> {
        let mut config = self.source.config()?;
        config.train |= self.train;
        config.test |= self.test;
        if let Some(sentiments) = &self.sentiments {
            config.sentiments = sentiments.clone();
        }
        Ok(config)
    }
}
