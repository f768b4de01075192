use crate::chunk::{chunk, CHUNK_SIZE};
use crate::error::{Error, Result};
use crate::track_reader::parse_track;
use crate::track_writer::render_track;
use crate::utils::file::{load_from_file, save_to_file};
use crate::waypoint::{build_waypoints, sort_by_time_descending, Waypoint};

use clap::ValueEnum;
use log::{info, warn};
use serde::Serialize;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NamingScheme {
    /// `<base><first km>_<last km>km.gpx`
    DistanceRange,
    /// `<chunk index>_<base>.gpx`
    ChunkIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub track_distance: bool,
    pub sort_by_time: bool,
    pub include_time: bool,
    pub naming: NamingScheme,
}

impl Profile {
    pub fn distance_range() -> Self {
        Profile {
            track_distance: true,
            sort_by_time: true,
            include_time: true,
            naming: NamingScheme::DistanceRange,
        }
    }

    pub fn chunk_index() -> Self {
        Profile {
            track_distance: false,
            sort_by_time: false,
            include_time: false,
            naming: NamingScheme::ChunkIndex,
        }
    }

    pub fn for_naming(naming: NamingScheme) -> Self {
        match naming {
            NamingScheme::DistanceRange => Self::distance_range(),
            NamingScheme::ChunkIndex => Self::chunk_index(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::distance_range()
    }
}

/// Where the chunk files go.
#[derive(Debug, Clone)]
pub struct Destination {
    pub directory: PathBuf,
    pub base_name: String,
}

impl Destination {
    pub fn new<P: AsRef<Path>>(directory: P, base_name: &str) -> Self {
        Destination {
            directory: directory.as_ref().to_path_buf(),
            base_name: base_name.to_string(),
        }
    }

    pub fn file_name(
        &self,
        naming: NamingScheme,
        index: usize,
        waypoints: &[Waypoint],
    ) -> String {
        match naming {
            NamingScheme::DistanceRange => {
                let first = waypoints.first().map_or(0, |w| w.distance);
                let last = waypoints.last().map_or(0, |w| w.distance);
                format!("{}{}_{}km.gpx", self.base_name, first, last)
            }
            NamingScheme::ChunkIndex => {
                format!("{}_{}.gpx", index, self.base_name)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChunkReport {
    pub index: usize,
    pub file: PathBuf,
    pub points: usize,
    pub first: Waypoint,
    pub last: Waypoint,
    pub error: Option<Error>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input_points: usize,
    pub profile: Profile,
    pub chunks: Vec<ChunkReport>,
}

impl SplitReport {
    pub fn written(&self) -> impl Iterator<Item = &ChunkReport> {
        self.chunks.iter().filter(|c| c.error.is_none())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ChunkReport> {
        self.chunks.iter().filter(|c| c.error.is_some())
    }
}

/// Parses a track document and returns its waypoints in output order.
pub fn prepare_waypoints(
    data: &[u8],
    profile: &Profile,
) -> Result<Vec<Waypoint>> {
    let points = parse_track(data)?;
    let mut waypoints = build_waypoints(points, profile.track_distance);
    if profile.sort_by_time {
        sort_by_time_descending(&mut waypoints);
    }
    Ok(waypoints)
}

fn write_chunk(
    path: &Path,
    waypoints: &[Waypoint],
    profile: &Profile,
) -> Result<()> {
    let data = render_track(waypoints, profile.include_time)?;
    save_to_file(&data, path)
}

/// Writes one file per chunk. A chunk that cannot be written is recorded in
/// the report and the remaining chunks are still attempted.
pub fn write_chunks(
    waypoints: &[Waypoint],
    destination: &Destination,
    profile: &Profile,
) -> Vec<ChunkReport> {
    let mut names = HashSet::new();
    chunk(waypoints, CHUNK_SIZE)
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            let name = destination.file_name(profile.naming, index, group);
            if !names.insert(name.clone()) {
                warn!("Chunk {} overwrites earlier file {}", index, name);
            }
            let file = destination.directory.join(name);
            let error = match write_chunk(&file, group, profile) {
                Ok(()) => {
                    info!("Created file: {}", file.display());
                    None
                }
                Err(e) => {
                    warn!(
                        "Skipping chunk {} ({}): {}",
                        index,
                        file.display(),
                        e
                    );
                    Some(e)
                }
            };
            ChunkReport {
                index,
                file,
                points: group.len(),
                first: group[0].clone(),
                last: group[group.len() - 1].clone(),
                error,
            }
        })
        .collect()
}

pub fn split_track(
    data: &[u8],
    destination: &Destination,
    profile: &Profile,
) -> Result<SplitReport> {
    let waypoints = prepare_waypoints(data, profile)?;
    if waypoints.is_empty() {
        warn!("Track has no points, nothing to write");
    }
    let chunks = write_chunks(&waypoints, destination, profile);
    Ok(SplitReport {
        input_points: waypoints.len(),
        profile: *profile,
        chunks,
    })
}

pub fn split_file<P: AsRef<Path>>(
    input: P,
    destination: &Destination,
    profile: &Profile,
) -> Result<SplitReport> {
    let data = load_from_file(input)?;
    split_track(&data, destination, profile)
}
