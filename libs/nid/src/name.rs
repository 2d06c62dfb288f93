//! Grammar for identifier names.
//!
//! A name is a non-empty snake_case string over `[a-z0-9_]`: it may not
//! start with a digit or an underscore, may not end with an underscore,
//! and may not contain two underscores in a row.

/// Checks `name` against the snake_case name grammar.
pub const fn validate_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    // Set once an alphanumeric character has been accepted since the last
    // underscore (or the start).
    let mut ok = false;

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'_' => {
                if !ok {
                    return false;
                }
                ok = false;
            }
            b'0'..=b'9' => {
                if i == 0 {
                    return false;
                }
                ok = true;
            }
            b'a'..=b'z' => ok = true,
            _ => return false,
        }
        i += 1;
    }

    ok
}
