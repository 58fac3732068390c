//! HTML fragment rendering for the publication list.

pub mod pubs;

pub use pubs::{featured, render_featured, render_list, PLACEHOLDER};
