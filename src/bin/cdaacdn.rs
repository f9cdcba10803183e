//! CDAAC Downloader.
//!
//! Downloads daily tar archives from the CDAAC tar service, extracts them, and decompresses the
//! gzip files they contain.

use std::error::Error;

use cdaac_data::{CdaacErr, CmdLineArgs, Downloader, HttpFetcher};
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(ref e) = run() {
        println!("error: {}", e);

        let mut err: &dyn Error = e;

        while let Some(cause) = err.source() {
            println!("caused by: {}", cause);
            err = cause;
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), CdaacErr> {
    let app = CmdLineArgs::new_app(
        "cdaacdn",
        "Download and unpack daily archives from the CDAAC tar service.",
    );

    let (args, _matches) = CmdLineArgs::matches(app)?;

    let range = args.range();
    info!(
        mission = %args.mission(),
        file_type = %args.file_type(),
        start = %range.start(),
        end = %range.end(),
        out_dir = %args.out_dir().display(),
        "starting download"
    );

    let dnldr = Downloader::new(HttpFetcher::new(), args.download_config());
    dnldr.download(range, args.mission(), args.file_type())
}
