//! # imdb-loader
//!
//! ```sh
//! imdb-loader 0.1.0
//! IMDB sentiment corpus loader.
//!
//! USAGE:
//!     imdb-loader <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     download    Download and extract the corpus
//!     help        Prints this message or the help of the given subcommand(s)
//!     load        Load splits and write them as JSON lines
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::fs::File;
use std::io::BufWriter;

use structopt::StructOpt;

use imdb_loader::{
    download::Downloader, error::Error, imdb::imdb_dataset_with, normalize::TextPreprocess,
};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::ImdbLoader::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::ImdbLoader::Download(d) => {
            let config = d.source.config()?;
            let archive = Downloader::default().download_file_maybe_extract(
                &config.url,
                &config.directory,
                &config.check_files,
            )?;
            info!("corpus available ({:?})", archive);
        }

        cli::ImdbLoader::Load(l) => {
            let config = l.config()?;
            if config.requested_splits().is_empty() {
                warn!("no split requested (use --train and/or --test), nothing to write");
            }

            let splits = imdb_dataset_with(&config, &Downloader::default(), &TextPreprocess)?;

            std::fs::create_dir_all(&l.dst)?;
            for (split_directory, dataset) in config
                .requested_splits()
                .into_iter()
                .zip(splits.into_vec())
            {
                let out_name = format!("{}.jsonl", split_directory.replace('/', "_"));
                let out_path = l.dst.join(out_name);
                dataset.write_jsonl(BufWriter::new(File::create(&out_path)?))?;
                info!("wrote {} examples to {:?}", dataset.len(), out_path);
            }
        }
    };
    Ok(())
}
