//! Common constants used throughout the touch application.

/// Name of the configuration file, looked up next to the executable.
pub const CONFIG_FILE: &str = "touch.conf";

/// Type group whose options apply to every file extension.
pub const ALL_TYPE: &str = ".all";

/// Comment token used when the extension is not in [`COMMENT_PREFIXES`].
pub const DEFAULT_COMMENT: &str = "// ";

/// Phrase the user has to type to confirm an overwrite.
pub const OVERWRITE_PHRASE: &str = "overwrite";

/// File extensions and the line comment token written before each header line.
pub const COMMENT_PREFIXES: [(&str, &str); 51] = [
    (".c", "// "),
    (".cpp", "// "),
    (".h", "// "),
    (".hpp", "// "),
    (".py", "# "),
    (".java", "// "),
    (".js", "// "),
    (".ts", "// "),
    (".rb", "# "),
    (".go", "// "),
    (".rs", "// "),
    (".cs", "// "),
    (".php", "// "),
    (".swift", "// "),
    (".kt", "// "),
    (".scala", "// "),
    (".sh", "# "),
    (".pl", "# "),
    (".r", "# "),
    (".lua", "-- "),
    (".sql", "-- "),
    (".asm", "; "),
    (".s", "; "),
    (".vb", "' "),
    (".vba", "' "),
    // Objective-C, clashes with MATLAB
    (".m", "// "),
    (".mm", "// "),
    (".erl", "% "),
    (".ex", "# "),
    (".exs", "# "),
    (".hs", "-- "),
    (".lisp", ";; "),
    (".clj", ";; "),
    (".scm", ";; "),
    (".f90", "!"),
    (".f95", "!"),
    (".f03", "!"),
    (".ada", "-- "),
    (".pas", "// "),
    (".dart", "// "),
    (".coffee", "# "),
    (".groovy", "// "),
    (".nim", "# "),
    (".rkt", "; "),
    (".vhd", "-- "),
    (".vhdl", "-- "),
    (".pro", "% "),
    (".sml", "(* "),
    (".ml", "(* "),
    (".bat", "REM "),
    (".ps1", "# "),
];
