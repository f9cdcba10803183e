//! Describe the archive for a single mission, file type, and day.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};

use crate::catalog::{FileType, Mission};

/// The tar service endpoint everything is requested from.
pub const DEFAULT_BASE_URL: &str = "http://cdaac-www.cosmic.ucar.edu/cdaac/rest/tarservice/data";

/// One day's worth of one product from one mission.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Request {
    mission: Mission,
    file_type: FileType,
    year: i32,
    day_of_year: u32,
}

impl Request {
    /// Describe the archive for `date`.
    pub fn new(mission: Mission, file_type: FileType, date: NaiveDate) -> Self {
        Request {
            mission,
            file_type,
            year: date.year(),
            day_of_year: date.ordinal(),
        }
    }

    /// The mission
    pub fn mission(&self) -> Mission {
        self.mission
    }

    /// The file type
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// The year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The day of the year, starting at 1.
    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Build the URL of the archive at the service rooted at `base`.
    pub fn url(&self, base: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            base.trim_end_matches('/'),
            self.mission,
            self.file_type,
            self.day_stamp()
        )
    }

    /// The name the downloaded archive is saved under.
    pub fn archive_file_name(&self) -> String {
        format!(
            "{}_{}_{}_{:03}.tar",
            self.mission, self.file_type, self.year, self.day_of_year
        )
    }

    /// Where the archive puts its files once it is extracted into `out_dir`.
    pub fn extraction_root(&self, out_dir: &Path) -> PathBuf {
        out_dir
            .join(self.mission.code())
            .join(self.file_type.code())
            .join(self.day_stamp())
    }

    fn day_stamp(&self) -> String {
        format!("{}.{:03}", self.year, self.day_of_year)
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
