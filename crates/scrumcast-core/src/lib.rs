// Library root: the computational core of the fantasy rugby dashboard.
//
// Data flows one way: dataset -> selection/derived tables -> chart specs.
// Rendering lives in the `scrumcast-tui` crate.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod export;
pub mod pipeline;
pub mod rounds;

pub use dashboard::{Dashboard, LookupError};
pub use pipeline::filter::Selection;
pub use rounds::RoundLabel;
