//! Testing infrastructure for taskview tests.
//!
//! - `fixtures`: agent response chunks and task states
//! - `assertions`: view-model checks that read well in tests
//! - `world`: isolated environment for driving the CLI binary

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{ListingFixture, SshListingFixture};
pub use world::TestWorld;
