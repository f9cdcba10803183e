#![deny(missing_docs)]
//! Package to download and unpack daily archives from the CDAAC tar service.

//
// Public API
//
pub use archive::{decompress_gz_siblings, is_within_directory, safe_extract};
pub use catalog::{FileType, Mission};
pub use cmd_line::CmdLineArgs;
pub use download::{DateRange, DownloadConfig, Downloader, FailurePolicy};
pub use errors::CdaacErr;
pub use fetch::{Credentials, Fetch, FetchOutcome, HttpFetcher};
pub use request::{Request, DEFAULT_BASE_URL};

//
// Implementation only
//
#[macro_use]
extern crate strum_macros;

mod archive;
mod catalog;
mod cmd_line;
mod download;
mod errors;
mod fetch;
mod request;
