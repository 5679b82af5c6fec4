//! Small helpers shared by the storage backends.
//!
//! - [`db_error`] - Classification of database driver errors

pub mod db_error;
