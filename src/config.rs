//! Configuration handling for touch.
//! Reads the line-oriented `touch.conf` file and turns its directives into
//! variables, per-extension option groups and raw code lines.

use crate::constants::CONFIG_FILE;
use indexmap::IndexMap;
use log::{debug, error, warn};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A single header line taken from a type group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOption {
    /// Literal text or a placeholder such as `<date>`.
    pub identifier: String,
    /// Whether the option goes before the `.all` defaults.
    pub is_prepend: bool,
}

impl HeaderOption {
    pub fn new(identifier: impl Into<String>, is_prepend: bool) -> Self {
        Self { identifier: identifier.into(), is_prepend }
    }
}

/// Everything collected from one pass over the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Variables keyed by their placeholder form, e.g. `<author>`.
    pub variables: IndexMap<String, String>,
    /// Options keyed by extension (or `.all`), in file order.
    pub type_groups: IndexMap<String, Vec<HeaderOption>>,
    /// Raw code lines captured for the target extension only.
    pub raw_lines: Vec<String>,
}

impl Config {
    /// Returns the options of a type group, if the group was declared.
    pub fn options(&self, type_name: &str) -> Option<&[HeaderOption]> {
        self.type_groups.get(type_name).map(Vec::as_slice)
    }
}

/// Classification of one trimmed configuration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    Blank,
    SetVar { name: &'a str, value: &'a str },
    /// A `SET` line without `=`.
    InvalidSet(&'a str),
    OpenType(&'a str),
    Prepend,
    Append,
    Raw,
    OptionLine(&'a str),
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Removes one pair of surrounding double quotes.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Classifies a single line of the configuration file.
///
/// Leading and trailing blanks are ignored. Prefixes are checked in a fixed
/// order: `SET `, `<type `, `<prepend>`, `<append>`, `<raw>`; anything else
/// that is not blank is an option line.
pub fn classify_line(line: &str) -> Directive<'_> {
    let line = trim(line);

    if line.is_empty() {
        return Directive::Blank;
    }

    if let Some(rest) = line.strip_prefix("SET ") {
        return match rest.split_once('=') {
            Some((name, value)) => Directive::SetVar {
                name: trim(name),
                value: strip_quotes(trim(value)),
            },
            None => Directive::InvalidSet(line),
        };
    }

    if let Some(rest) = line.strip_prefix("<type ") {
        return Directive::OpenType(rest.split_once('>').map_or(rest, |(name, _)| name));
    }

    if line.starts_with("<prepend>") {
        Directive::Prepend
    } else if line.starts_with("<append>") {
        Directive::Append
    } else if line.starts_with("<raw>") {
        Directive::Raw
    } else {
        Directive::OptionLine(line)
    }
}

/// Parser mode carried from one line to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserState {
    pub current_type: Option<String>,
    pub prepend_mode: bool,
    pub raw_mode: bool,
}

impl ParserState {
    /// Applies one directive, recording its effect in `config`, and returns
    /// the state for the next line.
    pub fn apply(self, directive: Directive<'_>, target_extension: &str, config: &mut Config) -> Self {
        match directive {
            Directive::Blank => self,
            Directive::SetVar { name, value } => {
                config.variables.insert(format!("<{}>", name), value.to_string());
                self
            }
            Directive::InvalidSet(line) => {
                error!("Invalid SET command syntax: {}", line);
                self
            }
            Directive::OpenType(name) if name.is_empty() => {
                error!("Type block without a name, following options are ignored");
                Self::default()
            }
            Directive::OpenType(name) => {
                debug!("Found type: {}", name);
                config.type_groups.entry(name.to_string()).or_default();
                Self { current_type: Some(name.to_string()), prepend_mode: false, raw_mode: false }
            }
            Directive::Prepend => {
                debug!("Found prepend");
                Self { prepend_mode: true, ..self }
            }
            Directive::Append => {
                debug!("Found append");
                Self { prepend_mode: false, ..self }
            }
            Directive::Raw => {
                debug!("Found raw");
                Self { raw_mode: true, ..self }
            }
            Directive::OptionLine(line) => {
                match self.current_type.as_deref() {
                    None => error!("Option {} is not inside a type block", line),
                    Some(current) if self.raw_mode && current == target_extension => {
                        debug!("Found raw option: {}", line);
                        config.raw_lines.push(line.to_string());
                    }
                    Some(current) => {
                        debug!("Found option: {}", line);
                        config
                            .type_groups
                            .entry(current.to_string())
                            .or_default()
                            .push(HeaderOption::new(line, self.prepend_mode));
                    }
                }
                self
            }
        }
    }
}

/// Parses configuration content for a file with the given extension.
///
/// Malformed lines are logged and skipped; parsing always runs to the end.
pub fn parse_config(content: &str, target_extension: &str) -> Config {
    let mut config = Config::default();
    let mut state = ParserState::default();
    for line in content.lines() {
        state = state.apply(classify_line(line), target_extension, &mut config);
    }
    config
}

/// Loads and parses the configuration file at `config_path`.
///
/// An unreadable file is reported once and yields an empty [`Config`], so the
/// target file is still created, just without a header.
pub fn load_config<P: AsRef<Path>>(config_path: P, target_extension: &str) -> Config {
    let config_path = config_path.as_ref();
    match std::fs::read(config_path) {
        Ok(bytes) => {
            debug!("Loading configuration from {}", config_path.display());
            let content = String::from_utf8_lossy(&bytes);
            if let Cow::Owned(_) = content {
                warn!(
                    "Configuration file {} is not valid UTF-8, invalid bytes were replaced",
                    config_path.display()
                );
            }
            parse_config(&content, target_extension)
        }
        Err(e) => {
            error!("Could not open configuration file {}: {}", config_path.display(), e);
            Config::default()
        }
    }
}

/// Default location of the configuration file: next to the executable.
pub fn config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_line() {
        assert_eq!(classify_line("  \t "), Directive::Blank);
        assert_eq!(classify_line("<type .rs>"), Directive::OpenType(".rs"));
        assert_eq!(classify_line("<type .py> trailing"), Directive::OpenType(".py"));
        assert_eq!(classify_line("<type .h"), Directive::OpenType(".h"));
        assert_eq!(classify_line("  <prepend>"), Directive::Prepend);
        assert_eq!(classify_line("<append>\t"), Directive::Append);
        assert_eq!(classify_line("<raw>"), Directive::Raw);
        assert_eq!(classify_line("<date>"), Directive::OptionLine("<date>"));
        assert_eq!(classify_line("SETTINGS"), Directive::OptionLine("SETTINGS"));
    }

    #[test]
    fn test_classify_set() {
        assert_eq!(
            classify_line("SET author = \"Alice\""),
            Directive::SetVar { name: "author", value: "Alice" }
        );
        assert_eq!(
            classify_line("SET url=a=b"),
            Directive::SetVar { name: "url", value: "a=b" }
        );
        assert_eq!(classify_line("SET author"), Directive::InvalidSet("SET author"));
    }

    #[test]
    fn test_strip_quotes_bounds() {
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("\"\""), "");
        assert_eq!(strip_quotes("\"a\"b\""), "a\"b");
        assert_eq!(strip_quotes("\"open"), "\"open");
    }

    #[test]
    fn test_type_resets_modes() {
        let mut config = Config::default();
        let state = ParserState {
            current_type: Some(".c".to_string()),
            prepend_mode: true,
            raw_mode: true,
        };
        let state = state.apply(Directive::OpenType(".c"), ".c", &mut config);
        assert_eq!(state.current_type.as_deref(), Some(".c"));
        assert!(!state.prepend_mode);
        assert!(!state.raw_mode);
    }

    #[test]
    fn test_empty_type_name_closes_block() {
        let config = parse_config("<type >\norphan\n", "");
        assert!(config.type_groups.is_empty());
        assert!(config.raw_lines.is_empty());
    }
}
