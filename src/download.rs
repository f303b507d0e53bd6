/*! Archive acquisition

[Downloader::download_file_maybe_extract] makes sure the corpus archive is downloaded and extracted in a cache directory.
Existence of a set of check files is what tells a previous extraction apart from a missing one,
so repeated calls only hit the network once.

The cache directory is not locked: running two acquisitions against the same directory concurrently is up to the caller.
!*/
use log::{debug, info, warn};
use reqwest::Url;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::decompress;
use crate::error::Error;

/// Puts the resource at `url` into the file at `dst`.
pub trait Fetch {
    fn fetch(&self, url: &Url, dst: &Path) -> Result<(), Error>;
}

/// [Fetch] over http(s), using a blocking [reqwest] client.
///
/// `file://` urls are copied from the local filesystem, which is handy for offline mirrors.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url, dst: &Path) -> Result<(), Error> {
        if url.scheme() == "file" {
            let src = url
                .to_file_path()
                .map_err(|_| Error::Custom(format!("not a local path: {}", url)))?;
            debug!("copying {:?} to {:?}", src, dst);
            std::fs::copy(src, dst)?;
            return Ok(());
        }

        //fire blocking request, create out file,
        //and stream the body into it.
        debug!("downloading {}", url);
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let mut out = File::create(dst)?;
        let mut buf = BufReader::new(response);
        std::io::copy(&mut buf, &mut out)?;

        Ok(())
    }
}

/// holds the [Fetch] implementation used to get archives.
pub struct Downloader<F: Fetch> {
    fetcher: F,
}

impl Default for Downloader<HttpFetcher> {
    fn default() -> Self {
        Self::new(HttpFetcher::default())
    }
}

impl<F: Fetch> Downloader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Download the archive at `url` into `directory` and extract it there,
    /// unless every path of `check_files` (relative to `directory`) already exists.
    ///
    /// Returns the archive path. Fails with [Error::Acquisition] if a check file is still missing after extraction.
    pub fn download_file_maybe_extract(
        &self,
        url: &str,
        directory: &Path,
        check_files: &[PathBuf],
    ) -> Result<PathBuf, Error> {
        let url = Url::parse(url)?;
        let filename = archive_name(&url)?;
        let filepath = directory.join(filename);

        // an empty list can't prove anything, so it always triggers a download
        if !check_files.is_empty() && first_missing(directory, check_files).is_none() {
            debug!("all check files present in {:?}, skipping download", directory);
            return Ok(filepath);
        }

        std::fs::create_dir_all(directory)?;

        if filepath.exists() {
            info!("reusing archive {:?}", filepath);
        } else {
            info!("downloading {} to {:?}", url, filepath);
            self.fetch_atomic(&url, &filepath)?;
        }

        decompress::extract(&filepath, directory)?;

        match first_missing(directory, check_files) {
            Some(missing) => Err(Error::Acquisition(missing)),
            None => Ok(filepath),
        }
    }

    /// fetch into `<filepath>.part`, only moving it to `filepath` once complete.
    fn fetch_atomic(&self, url: &Url, filepath: &Path) -> Result<(), Error> {
        let mut partial = filepath.as_os_str().to_owned();
        partial.push(".part");
        let partial = PathBuf::from(partial);

        if let Err(e) = self.fetcher.fetch(url, &partial) {
            if partial.exists() {
                warn!("removing incomplete download {:?}", partial);
                std::fs::remove_file(&partial)?;
            }
            return Err(e);
        }

        std::fs::rename(&partial, filepath)?;
        Ok(())
    }
}

/// last path segment of the url
fn archive_name(url: &Url) -> Result<String, Error> {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .map(String::from)
        .ok_or_else(|| Error::Custom(format!("no file name in url {}", url)))
}

fn first_missing(directory: &Path, check_files: &[PathBuf]) -> Option<PathBuf> {
    check_files
        .iter()
        .map(|f| directory.join(f))
        .find(|f| !f.exists())
}
