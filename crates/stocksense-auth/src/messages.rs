//! Warning text shown under the login form after a failed attempt.

/// Message for the given cumulative failure count.
#[must_use]
pub fn failure_message(failures: u32) -> String {
    let fixed = match failures {
        1 => "Failed attempts: 1/5 before permanent lock",
        2 => "Failed attempts: 2/5 before permanent lock",
        3 => "Failed attempts: 3/5 - 2 more until permanent lock",
        4 => "Failed attempts: 4/5 - 1 more until final warning",
        5 => "WARNING: Next attempt will permanently lock your account!",
        6 => "Account permanently locked. Contact IT support.",
        other => return format!("Failed attempts: {other}/5"),
    };
    fixed.to_string()
}
