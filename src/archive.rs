//! Unpack downloaded tar archives.
//!
//! Extraction refuses archives with members that would land outside of the destination, and the
//! gzip members of a day's directory are expanded next to the originals.

pub use self::extract::{is_within_directory, safe_extract};
pub use self::gunzip::decompress_gz_siblings;

mod extract;
mod gunzip;
