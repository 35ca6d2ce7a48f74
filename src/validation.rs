use crate::error::{Error, Result};

/// Checks that the proposed project name is usable both as a Python package
/// identifier and as a file-system directory segment.
///
/// The rule is deliberately stricter than Python's `str.isidentifier()`:
/// only ASCII letters, digits and underscores are accepted, and the first
/// character must not be a digit. That keeps the name portable as a
/// directory segment and console-script name on every platform.
///
/// # Arguments
/// * `name` - The proposed project name
///
/// # Returns
/// * `Result<()>` - Ok for a legal name, `Error::InvalidName` otherwise
pub fn validate_project_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let legal = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if legal {
        Ok(())
    } else {
        Err(Error::InvalidName { name: name.to_string() })
    }
}
