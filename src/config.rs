use crate::splitter::{NamingScheme, Profile};

use clap::Args;
use log::LevelFilter;

#[derive(Clone, Args)]
pub struct Config {
    /// Print more information (repeat for even more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
    /// How output files are named
    #[arg(long, value_enum, default_value_t = NamingScheme::DistanceRange)]
    pub naming: NamingScheme,
    /// Keep the document order instead of sorting by time
    #[arg(long)]
    pub no_sort: bool,
    /// Leave timestamps out of the output files
    #[arg(long)]
    pub no_time: bool,
}

impl Config {
    pub fn is_v(&self) -> bool {
        self.verbose >= 1
    }

    pub fn is_vv(&self) -> bool {
        self.verbose >= 2
    }

    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.is_vv() {
            LevelFilter::Trace
        } else if self.is_v() {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// The preset for the naming scheme with the `--no-*` switches applied.
    /// Distance tracking follows the naming scheme, since distance range
    /// names are meaningless without it.
    pub fn profile(&self) -> Profile {
        let preset = Profile::for_naming(self.naming);
        Profile {
            track_distance: preset.track_distance,
            sort_by_time: preset.sort_by_time && !self.no_sort,
            include_time: preset.include_time && !self.no_time,
            naming: self.naming,
        }
    }
}
