pub mod candidates;
pub mod config;
pub mod geometry;
pub mod geopoint;
pub mod profile;
pub mod provider;
pub mod response;
pub mod route_result;
pub mod service;
pub mod synthesizer;

#[cfg(test)]
mod test_utils;
