// Export: the reviewed submission rendered as a printable HTML document
// (the application's "PDF").

pub mod categorize;
pub mod render;

pub use categorize::{categorize_field, group_fields};
pub use render::{export_file_name, render_submission};
