use gpx_splitter::config::Config;
use gpx_splitter::error::Result;
use gpx_splitter::logs;
use gpx_splitter::splitter::{split_file, Destination, SplitReport};
use gpx_splitter::utils::file::save_to_file;

use clap::{Args, Parser};
use log::{info, warn};

#[derive(Parser)]
#[command(about = "Split a GPX track into files of at most 500 points")]
struct ArgParser {
    /// GPX file to split
    input: String,
    /// Prefix (or suffix, with chunk index naming) of the output file names
    base_name: String,
    /// Directory for the output files, created if missing
    output_dir: String,
    #[command(flatten)]
    report_output: ReportOutput,
    #[command(flatten)]
    config: Config,
}

#[derive(Clone, Args)]
struct ReportOutput {
    /// Save a JSON summary of the written files
    #[arg(long)]
    report: Option<String>,
    /// Pretty print the summary
    #[arg(long, requires = "report")]
    pretty: bool,
}

impl ReportOutput {
    fn write(&self, report: &SplitReport) -> Result<()> {
        let Some(path) = &self.report else {
            return Ok(());
        };
        let data = if self.pretty {
            serde_json::to_vec_pretty(report)?
        } else {
            serde_json::to_vec(report)?
        };
        save_to_file(&data, path)
    }
}

fn main() -> Result<()> {
    let args = ArgParser::parse();
    logs::init(args.config.level_filter())?;

    let destination = Destination::new(&args.output_dir, &args.base_name);
    let report =
        split_file(&args.input, &destination, &args.config.profile())?;

    let failed = report.failed().count();
    if failed > 0 {
        warn!(
            "{} of {} chunks could not be written",
            failed,
            report.chunks.len()
        );
    }
    info!(
        "Split {} points into {} files",
        report.input_points,
        report.written().count()
    );

    args.report_output.write(&report)
}
