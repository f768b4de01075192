pub mod chunk;
pub mod config;
pub mod error;
pub mod geo_distance;
pub mod logs;
pub mod splitter;
pub mod track_reader;
pub mod track_writer;
pub mod utils;
pub mod waypoint;

#[cfg(test)]
mod track_writer_test;
