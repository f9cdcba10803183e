//! Download and unpack a range of days.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use chrono::{Duration, NaiveDate};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::{
    archive::{decompress_gz_siblings, safe_extract},
    catalog::{FileType, Mission},
    errors::CdaacErr,
    fetch::{Credentials, Fetch, FetchOutcome},
    request::{Request, DEFAULT_BASE_URL},
};

/// An inclusive range of calendar days.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from `start` through `end`, `start` may not be after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CdaacErr> {
        if start > end {
            return Err(CdaacErr::ReversedRange { start, end });
        }

        Ok(DateRange { start, end })
    }

    /// The first day.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Iterate over every day in the range, earliest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let num_days = (self.end - self.start).num_days();

        (0..=num_days).map(move |day| start + Duration::days(day))
    }
}

/// What to do when the server does not answer a request with a success code.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, IntoStaticStr, EnumIter)]
pub enum FailurePolicy {
    /// Log it and move on to the next day.
    #[strum(to_string = "skip")]
    Skip,
    /// Stop the whole run with an error.
    #[strum(to_string = "fail-fast")]
    FailFast,
}

impl FailurePolicy {
    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All valid policy names, space separated.
    pub fn all_names() -> String {
        FailurePolicy::iter()
            .map(FailurePolicy::name)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Skip
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything a download run needs besides the days and product.
#[derive(Clone, Debug)]
pub struct DownloadConfig {
    /// Passed along with every request.
    pub credentials: Credentials,
    /// Root of the tar service.
    pub base_url: String,
    /// Archives are saved and extracted here.
    pub out_dir: PathBuf,
    /// How to handle unsuccessful responses.
    pub policy: FailurePolicy,
}

impl DownloadConfig {
    /// Configuration for the default service with the default failure policy.
    pub fn new(credentials: Credentials, out_dir: impl Into<PathBuf>) -> Self {
        DownloadConfig {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            out_dir: out_dir.into(),
            policy: FailurePolicy::default(),
        }
    }
}

/// Fetches, extracts, and decompresses archives one day at a time.
#[derive(Debug)]
pub struct Downloader<F> {
    fetcher: F,
    config: DownloadConfig,
}

impl<F: Fetch> Downloader<F> {
    /// Create a new downloader.
    pub fn new(fetcher: F, config: DownloadConfig) -> Self {
        Downloader { fetcher, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &DownloadConfig {
        &self.config
    }

    /// Download and unpack `file_type` for `mission` for every day in `range`, in order.
    ///
    /// Days the server does not have are handled according to the failure policy. Any other
    /// error, including an archive that tries to write outside of the output directory, stops the
    /// run.
    pub fn download(
        &self,
        range: &DateRange,
        mission: Mission,
        file_type: FileType,
    ) -> Result<(), CdaacErr> {
        for day in range.days() {
            self.download_day(&Request::new(mission, file_type, day))?;
        }

        Ok(())
    }

    /// Download and unpack a single day.
    pub fn download_day(&self, request: &Request) -> Result<(), CdaacErr> {
        let url = request.url(&self.config.base_url);
        debug!(%url, "requesting");

        let data = match self.fetcher.fetch(&url, &self.config.credentials)? {
            FetchOutcome::Archive(data) => data,
            FetchOutcome::NotOk { url, status } => {
                return match self.config.policy {
                    FailurePolicy::Skip => {
                        warn!(%url, status, "no archive retrieved, skipping");
                        Ok(())
                    }
                    FailurePolicy::FailFast => Err(CdaacErr::HttpStatus { url, status }),
                };
            }
        };

        let out_dir: &Path = &self.config.out_dir;
        let archive_path = out_dir.join(request.archive_file_name());
        std::fs::write(&archive_path, &data)?;
        debug!(file = %archive_path.display(), bytes = data.len(), "saved archive");

        safe_extract(&archive_path, out_dir)?;

        let extraction_root = request.extraction_root(out_dir);
        if !extraction_root.is_dir() {
            warn!(
                archive = %archive_path.display(),
                expected = %extraction_root.display(),
                "archive did not contain the expected directory"
            );
            return Ok(());
        }

        let decompressed = decompress_gz_siblings(&extraction_root)?;

        info!(
            mission = %request.mission(),
            file_type = %request.file_type(),
            year = request.year(),
            day_of_year = request.day_of_year(),
            decompressed = decompressed.len(),
            "downloaded"
        );

        Ok(())
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
