//! State management for the project modal.

pub mod carousel;
pub mod modal_view;

pub use carousel::*;
pub use modal_view::*;
