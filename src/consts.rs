// src/consts.rs
//! Shared constants — canonical field names and output conventions

/// Host-side lookup name for the title field
pub const TITLE_FIELD: &str = "Title";

/// Host-side lookup name for the username field
// Host stores use "UserName"; the output label is "Username"
pub const USERNAME_FIELD: &str = "UserName";

/// Host-side lookup name for the password field
pub const PASSWORD_FIELD: &str = "Password";

/// Host-side lookup name for the URL field
pub const URL_FIELD: &str = "Url";

/// Host-side lookup name for the notes field
pub const NOTES_FIELD: &str = "Notes";

/// CSV column names, in the fixed output order
pub const CSV_HEADER: [&str; 5] = ["Title", "Username", "Password", "Url", "Notes"];

/// Separator line between plain-text blocks
pub const TEXT_SEPARATOR: &str =
    "----------------------------------------------------------";
