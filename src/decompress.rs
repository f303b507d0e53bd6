use flate2::read::GzDecoder;
use log::debug;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::error::Error;

enum ArchiveKind {
    TarGz,
    Tar,
}

impl ArchiveKind {
    fn from_path(archive: &Path) -> Option<Self> {
        let name = archive.file_name()?.to_str()?;
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(ArchiveKind::TarGz)
        } else if name.ends_with(".tar") {
            Some(ArchiveKind::Tar)
        } else {
            None
        }
    }
}

/// Extract `archive` into `dst`, choosing the decoder from the file extension.
pub fn extract(archive: &Path, dst: &Path) -> Result<(), Error> {
    let kind = ArchiveKind::from_path(archive)
        .ok_or_else(|| Error::UnsupportedArchive(archive.to_path_buf()))?;

    debug!("extracting {:?} into {:?}", archive, dst);
    let f = BufReader::new(File::open(archive)?);
    match kind {
        ArchiveKind::TarGz => unpack(GzDecoder::new(f), dst),
        ArchiveKind::Tar => unpack(f, dst),
    }
}

fn unpack<R: Read>(reader: R, dst: &Path) -> Result<(), Error> {
    let mut archive = tar::Archive::new(reader);
    archive.unpack(dst)?;
    Ok(())
}
