//! Driver helpers: work list resolution, output routing, presentation and
//! end-of-run statistics.

pub mod input;
pub mod output;
pub mod presenter;
pub mod statistics;

// Re-export public API
pub use input::resolve_domains;
pub use output::{output_path, print_results, save_to_file};
pub use presenter::Presenter;
pub use statistics::{print_error_statistics, print_scan_summary};
