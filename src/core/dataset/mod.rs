mod discovery;
mod layout;

pub use discovery::{discover_pairs, find_label, has_recognized_extension, FilePair};
pub use layout::{DatasetLayout, DatasetSplit};
