//! Static site content and the project catalog.

pub mod profile;
pub mod projects;
pub mod skills;

pub use profile::*;
pub use projects::*;
pub use skills::*;
