//! Format constants for the text matrix format

/// Key of the first header line, `rows=<n>`
pub const ROWS_KEY: &str = "rows";

/// Key of the second header line, `cols=<n>`
pub const COLS_KEY: &str = "cols";

/// Separator between a header key and its value
pub const HEADER_SEPARATOR: char = '=';

/// Delimiters and separator of an entry line, `(<row>,<col>,<value>)`
pub const ENTRY_OPEN: char = '(';
pub const ENTRY_CLOSE: char = ')';
pub const ENTRY_SEPARATOR: char = ',';
