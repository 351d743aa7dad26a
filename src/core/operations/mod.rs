mod file_ops;

pub use file_ops::{ensure_destination_free, move_file, CollisionPolicy};
