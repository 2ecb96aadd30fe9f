//! Line rendering shared by every formatter

/// Width of one indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Leading whitespace for an entry at `depth`.
pub fn indent(depth: usize) -> String {
    " ".repeat(INDENT_WIDTH * depth)
}

/// `<indent>name/`
pub fn format_dir_line(name: &str, depth: usize) -> String {
    format!("{}{}/", indent(depth), name)
}

/// `<indent>name`
pub fn format_file_line(name: &str, depth: usize) -> String {
    format!("{}{}", indent(depth), name)
}
