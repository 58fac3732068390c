mod build;
mod list;
mod metrics;
mod render;
mod sync;

pub use build::run_build;
pub use list::run_list;
pub use metrics::run_metrics;
pub use render::run_render;
pub use sync::run_sync;
