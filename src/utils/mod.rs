pub mod fs;

pub use fs::{calculate_string_hash, create_backup, read_file_to_string, write_file_atomic};
