//! Module for errors.
use std::{error::Error, fmt::Display, path::PathBuf};

use chrono::NaiveDate;

/// Error from downloading and unpacking archives.
#[derive(Debug)]
pub enum CdaacErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Other forwarded errors
    /// Error forwarded from the http client.
    Http(::reqwest::Error),
    /// A file ending in gz could not be decompressed.
    Gzip {
        /// The compressed file.
        path: PathBuf,
        /// What went wrong while decoding it.
        source: ::std::io::Error,
    },

    // My own errors from this crate
    /// An archive member would land outside of the extraction directory.
    PathTraversal(PathBuf),
    /// An archive member is a symbolic or hard link.
    LinkMember(PathBuf),
    /// The server answered with a non-success status and the policy is to fail fast.
    HttpStatus {
        /// The requested URL.
        url: String,
        /// The status code returned.
        status: u16,
    },
    /// The start of a date range is after the end.
    ReversedRange {
        /// First day requested.
        start: NaiveDate,
        /// Last day requested.
        end: NaiveDate,
    },
    /// There was an internal logic error.
    LogicError(&'static str),
}

impl Display for CdaacErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::CdaacErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),

            Http(err) => write!(f, "http client error: {}", err),
            Gzip { path, .. } => write!(f, "unable to decompress {}", path.display()),

            PathTraversal(path) => write!(
                f,
                "attempted path traversal in tar file: {}",
                path.display()
            ),
            LinkMember(path) => write!(f, "link member in tar file: {}", path.display()),
            HttpStatus { url, status } => write!(f, "HTTP error ({}): {}", status, url),
            ReversedRange { start, end } => {
                write!(f, "start date {} is after end date {}", start, end)
            }
            LogicError(msg) => write!(f, "internal logic error: {}", msg),
        }
    }
}

impl Error for CdaacErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use crate::errors::CdaacErr::*;

        match self {
            IO(err) => Some(err),
            Http(err) => Some(err),
            Gzip { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<::std::io::Error> for CdaacErr {
    fn from(err: ::std::io::Error) -> CdaacErr {
        CdaacErr::IO(err)
    }
}

impl From<::reqwest::Error> for CdaacErr {
    fn from(err: ::reqwest::Error) -> CdaacErr {
        CdaacErr::Http(err)
    }
}
