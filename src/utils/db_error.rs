//! Classification of database driver errors.

/// Returns true if the error is a unique-index violation.
///
/// MySQL reports these as error 1062 (SQLSTATE 23000).
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
