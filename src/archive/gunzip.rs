use std::{
    collections::HashSet,
    ffi::{OsStr, OsString},
    fs::{read_dir, File},
    io::Read,
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use tracing::{debug, warn};

use crate::errors::CdaacErr;

/// Decompress every file directly in `dir` whose name ends in `gz`.
///
/// The decompressed data goes to a sibling with the `.gz` suffix removed, the compressed file is
/// left alone. Sub-directories are not searched. Returns the paths written, in name order.
///
/// When two files would decompress to the same name (`x.gz` and `xgz`), the first in name order
/// is used and the other is skipped with a warning.
///
/// The first file that is not valid gzip data stops the scan with `CdaacErr::Gzip`, files already
/// written are kept.
pub fn decompress_gz_siblings(dir: &Path) -> Result<Vec<PathBuf>, CdaacErr> {
    let mut compressed: Vec<(PathBuf, PathBuf)> = vec![];
    for entry in read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        if let Some(name) = decompressed_name(&entry.file_name()) {
            compressed.push((entry.path(), dir.join(name)));
        }
    }
    compressed.sort();

    let mut claimed = HashSet::with_capacity(compressed.len());
    let mut written = Vec::with_capacity(compressed.len());
    for (path, target) in compressed {
        if !claimed.insert(target.clone()) {
            warn!(
                file = %path.display(),
                target = %target.display(),
                "another file already decompressed to this name, skipping"
            );
            continue;
        }

        let mut data = vec![];
        MultiGzDecoder::new(File::open(&path)?)
            .read_to_end(&mut data)
            .map_err(|source| CdaacErr::Gzip {
                path: path.clone(),
                source,
            })?;

        std::fs::write(&target, &data)?;
        debug!(file = %target.display(), bytes = data.len(), "decompressed");

        written.push(target);
    }

    Ok(written)
}

fn strip_gz(name: &[u8]) -> Option<&[u8]> {
    name.strip_suffix(b".gz")
        .or_else(|| name.strip_suffix(b"gz"))
        .filter(|stem| !stem.is_empty())
}

#[cfg(unix)]
fn decompressed_name(file_name: &OsStr) -> Option<OsString> {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    strip_gz(file_name.as_bytes()).map(|stem| OsString::from_vec(stem.to_vec()))
}

#[cfg(not(unix))]
fn decompressed_name(file_name: &OsStr) -> Option<OsString> {
    let name = match file_name.to_str() {
        Some(name) => name,
        None => {
            if file_name.to_string_lossy().ends_with("gz") {
                warn!(file = ?file_name, "skipping file with a name that is not unicode");
            }
            return None;
        }
    };

    // Removing an ascii suffix leaves valid utf-8.
    strip_gz(name.as_bytes())
        .and_then(|stem| std::str::from_utf8(stem).ok())
        .map(OsString::from)
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
