//! UI components for the portfolio page.

mod app;
mod carousel_driver;
mod description;
mod project_gallery;
mod project_modal;
mod skills;

#[cfg(test)]
mod testing;

pub use app::*;
pub use carousel_driver::*;
pub use description::*;
pub use project_gallery::*;
pub use project_modal::*;
pub use skills::*;
