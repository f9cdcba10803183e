//! Command line options for the downloader.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{crate_version, Arg, ArgMatches, Command};

use crate::{
    catalog::{FileType, Mission},
    download::{DateRange, DownloadConfig, FailurePolicy},
    errors::CdaacErr,
    fetch::Credentials,
    request::DEFAULT_BASE_URL,
};

/// Struct to package up command line arguments.
#[derive(Clone, Debug)]
pub struct CmdLineArgs {
    // User name and password for the data service
    credentials: Credentials,
    // Days to download
    range: DateRange,
    // Mission and product to download
    mission: Mission,
    file_type: FileType,
    // Where to put the archives
    out_dir: PathBuf,
    // Root of the tar service
    base_url: String,
    // What to do when a day can't be retrieved
    policy: FailurePolicy,
}

impl CmdLineArgs {
    const DATE_FORMAT: &'static str = "%Y%m%d";

    /// Create a new set of args.
    pub fn new_app(app_name: &'static str, about: &'static str) -> Command {
        Command::new(app_name)
            .about(about)
            .version(crate_version!())
            .arg(
                Arg::new("user")
                    .short('u')
                    .long("user")
                    .required(true)
                    .help("User name for the data service."),
            )
            .arg(
                Arg::new("password")
                    .short('p')
                    .long("password")
                    .required(true)
                    .help("Password for the data service."),
            )
            .arg(
                Arg::new("start")
                    .short('s')
                    .long("start")
                    .required(true)
                    .value_parser(parse_date)
                    .help("First day to download, YYYYMMDD."),
            )
            .arg(
                Arg::new("end")
                    .short('e')
                    .long("end")
                    .required(true)
                    .value_parser(parse_date)
                    .help("Last day to download, YYYYMMDD.")
                    .long_help("Last day to download, YYYYMMDD. Must not be before the start."),
            )
            .arg(
                Arg::new("mission")
                    .short('m')
                    .long("mission")
                    .required(true)
                    .value_parser(parse_mission)
                    .help("Mission code (e.g. cosmic, metopa, grace)."),
            )
            .arg(
                Arg::new("type")
                    .short('t')
                    .long("type")
                    .required(true)
                    .value_parser(parse_file_type)
                    .help("File type code (e.g. atmPrf, wetPrf, ionPrf)."),
            )
            .arg(
                Arg::new("out")
                    .short('o')
                    .long("out")
                    .required(true)
                    .value_parser(parse_out_dir)
                    .help("Existing directory to save and extract archives in."),
            )
            .arg(
                Arg::new("base-url")
                    .long("base-url")
                    .default_value(DEFAULT_BASE_URL)
                    .help("Root URL of the tar service."),
            )
            .arg(
                Arg::new("on-failure")
                    .long("on-failure")
                    .default_value("skip")
                    .value_parser(parse_policy)
                    .help("What to do when a day can't be retrieved.")
                    .long_help(concat!(
                        "What to do when the server does not answer with a success code. ",
                        "'skip' moves on to the next day, 'fail-fast' stops with an error."
                    )),
            )
            .after_help(concat!(
                "Every day from start through end is downloaded, one at a time. Archives are ",
                "saved in the output directory and extracted there, then any gzip files in the ",
                "day's directory are decompressed next to the originals."
            ))
    }

    /// Process a `Command` to get the parsed values out of it and the matches object so an
    /// application can continue with further argument parsing.
    pub fn matches(app: Command) -> Result<(Self, ArgMatches), CdaacErr> {
        let mut app = app;
        let usage = app.render_usage().to_string();
        let matches = app.get_matches();

        let print_usage_message = |msg: &str| -> ! {
            println!("\n{}\n\n{}\n", msg, usage);
            println!("Try the -h or --help option for more instructions.");
            ::std::process::exit(1);
        };

        match Self::from_matches(&matches) {
            Ok(cmd_line_opts) => Ok((cmd_line_opts, matches)),
            Err(err @ CdaacErr::ReversedRange { .. }) => print_usage_message(&err.to_string()),
            Err(err) => Err(err),
        }
    }

    /// Pull the values out of already parsed matches.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CdaacErr> {
        let user = matches
            .get_one::<String>("user")
            .ok_or(CdaacErr::LogicError("missing user"))?;
        let password = matches
            .get_one::<String>("password")
            .ok_or(CdaacErr::LogicError("missing password"))?;

        let start = *matches
            .get_one::<NaiveDate>("start")
            .ok_or(CdaacErr::LogicError("missing start date"))?;
        let end = *matches
            .get_one::<NaiveDate>("end")
            .ok_or(CdaacErr::LogicError("missing end date"))?;

        let mission = *matches
            .get_one::<Mission>("mission")
            .ok_or(CdaacErr::LogicError("missing mission"))?;
        let file_type = *matches
            .get_one::<FileType>("type")
            .ok_or(CdaacErr::LogicError("missing file type"))?;

        let out_dir = matches
            .get_one::<PathBuf>("out")
            .cloned()
            .ok_or(CdaacErr::LogicError("missing output directory"))?;
        let base_url = matches
            .get_one::<String>("base-url")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let policy = matches
            .get_one::<FailurePolicy>("on-failure")
            .copied()
            .unwrap_or_default();

        Ok(CmdLineArgs {
            credentials: Credentials::new(user.as_str(), password.as_str()),
            range: DateRange::new(start, end)?,
            mission,
            file_type,
            out_dir,
            base_url,
            policy,
        })
    }

    /// Get the days to download.
    pub fn range(&self) -> &DateRange {
        &self.range
    }

    /// Get the mission
    pub fn mission(&self) -> Mission {
        self.mission
    }

    /// Get the file type
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Get the output directory
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Bundle up everything the downloader needs.
    pub fn download_config(&self) -> DownloadConfig {
        DownloadConfig {
            credentials: self.credentials.clone(),
            base_url: self.base_url.clone(),
            out_dir: self.out_dir.clone(),
            policy: self.policy,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, CmdLineArgs::DATE_FORMAT)
        .map_err(|_| format!("Not a valid date: {}", s))
}

fn parse_mission(s: &str) -> Result<Mission, String> {
    Mission::from_str(s)
        .map_err(|_| format!("Not a valid mission: {}\n {}", s, Mission::all_codes()))
}

fn parse_file_type(s: &str) -> Result<FileType, String> {
    FileType::from_str(s)
        .map_err(|_| format!("Not valid file type: {}\n {}", s, FileType::all_codes()))
}

fn parse_out_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("Not a valid path: {}", s))
    }
}

fn parse_policy(s: &str) -> Result<FailurePolicy, String> {
    FailurePolicy::from_str(s).map_err(|_| {
        format!(
            "Not a valid failure policy: {}\n {}",
            s,
            FailurePolicy::all_names()
        )
    })
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use clap::error::ErrorKind;
    use tempdir::TempDir;

    fn args_with<'a>(out: &'a str, replace: &[(&'a str, &'a str)]) -> Vec<&'a str> {
        let mut pairs = vec![
            ("-u", "ucar"),
            ("-p", "secret"),
            ("-s", "20160205"),
            ("-e", "20160207"),
            ("-m", "cosmic2013"),
            ("-t", "atmPrf"),
            ("-o", out),
        ];

        for (flag, val) in replace {
            if let Some(pair) = pairs.iter_mut().find(|(f, _)| f == flag) {
                pair.1 = *val;
            } else {
                pairs.push((*flag, *val));
            }
        }

        let mut args = vec!["cdaacdn"];
        for (flag, val) in pairs {
            args.push(flag);
            args.push(val);
        }
        args
    }

    fn app() -> Command {
        CmdLineArgs::new_app("cdaacdn", "test app")
    }

    #[test]
    fn test_valid_args() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let out = tmp.path().to_str().unwrap();

        let matches = app()
            .try_get_matches_from(args_with(out, &[]))
            .expect("Valid arguments rejected.");
        let args = CmdLineArgs::from_matches(&matches).expect("Error unpacking matches.");

        assert_eq!(args.mission(), Mission::Cosmic2013);
        assert_eq!(args.file_type(), FileType::AtmPrf);
        assert_eq!(args.out_dir(), tmp.path());
        assert_eq!(args.range().start(), NaiveDate::from_ymd_opt(2016, 2, 5).unwrap());
        assert_eq!(args.range().days().count(), 3);

        let config = args.download_config();
        assert_eq!(config.credentials, Credentials::new("ucar", "secret"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.policy, FailurePolicy::Skip);
    }

    #[test]
    fn test_long_flags_and_options() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let out = tmp.path().to_str().unwrap();

        let matches = app()
            .try_get_matches_from(vec![
                "cdaacdn",
                "--user",
                "ucar",
                "--password",
                "secret",
                "--start",
                "20200101",
                "--end",
                "20200101",
                "--mission",
                "metopb",
                "--type",
                "ionPrf",
                "--out",
                out,
                "--base-url",
                "http://localhost:8080/data",
                "--on-failure",
                "fail-fast",
            ])
            .expect("Valid arguments rejected.");
        let args = CmdLineArgs::from_matches(&matches).expect("Error unpacking matches.");

        let config = args.download_config();
        assert_eq!(args.mission(), Mission::MetopB);
        assert_eq!(args.file_type(), FileType::IonPrf);
        assert_eq!(config.base_url, "http://localhost:8080/data");
        assert_eq!(config.policy, FailurePolicy::FailFast);
    }

    #[test]
    fn test_invalid_mission() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let out = tmp.path().to_str().unwrap();

        let err = app()
            .try_get_matches_from(args_with(out, &[("-m", "cosmic3")]))
            .expect_err("Invalid mission accepted.");

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_ne!(err.exit_code(), 0);
        let msg = err.to_string();
        assert!(msg.contains("Not a valid mission: cosmic3"));
        assert!(msg.contains(&Mission::all_codes()));
    }

    #[test]
    fn test_invalid_file_type() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let out = tmp.path().to_str().unwrap();

        let err = app()
            .try_get_matches_from(args_with(out, &[("-t", "atmprf")]))
            .expect_err("Invalid file type accepted.");

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        let msg = err.to_string();
        assert!(msg.contains("Not valid file type: atmprf"));
        assert!(msg.contains(&FileType::all_codes()));
    }

    #[test]
    fn test_invalid_dates() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let out = tmp.path().to_str().unwrap();

        for bad in &["2016-02-05", "20161305", "yesterday"] {
            let err = app()
                .try_get_matches_from(args_with(out, &[("-s", *bad)]))
                .expect_err("Invalid date accepted.");

            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            assert!(err.to_string().contains(&format!("Not a valid date: {}", bad)));
        }
    }

    #[test]
    fn test_invalid_out_dir() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let missing = tmp.path().join("not_here");
        let missing = missing.to_str().unwrap();

        let err = app()
            .try_get_matches_from(args_with(missing, &[]))
            .expect_err("Missing directory accepted.");

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains(&format!("Not a valid path: {}", missing)));
    }

    #[test]
    fn test_invalid_policy() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let out = tmp.path().to_str().unwrap();

        let err = app()
            .try_get_matches_from(args_with(out, &[("--on-failure", "retry")]))
            .expect_err("Invalid policy accepted.");

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        let msg = err.to_string();
        assert!(msg.contains("Not a valid failure policy: retry"));
        assert!(msg.contains("skip fail-fast"));
    }

    #[test]
    fn test_missing_required() {
        let err = app()
            .try_get_matches_from(vec!["cdaacdn", "-u", "ucar", "-p", "secret"])
            .expect_err("Missing arguments accepted.");

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_reversed_range() {
        let tmp = TempDir::new("cdaac-cmd-line-test").unwrap();
        let out = tmp.path().to_str().unwrap();

        let matches = app()
            .try_get_matches_from(args_with(out, &[("-s", "20160210")]))
            .expect("Each date is valid on its own.");

        assert!(matches!(
            CmdLineArgs::from_matches(&matches),
            Err(CdaacErr::ReversedRange { .. })
        ));
    }
}
