//! Header rendering for touch.
//! Merges the option groups that apply to the target extension, resolves
//! placeholders and prefixes every line with the extension's comment token.

use crate::config::Config;
use crate::constants::{ALL_TYPE, COMMENT_PREFIXES, DEFAULT_COMMENT};
use chrono::{Local, NaiveDate};
use log::debug;

/// Returns the line comment token for an extension, `"// "` when unknown.
pub fn comment_prefix(extension: &str) -> &'static str {
    COMMENT_PREFIXES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, prefix)| *prefix)
        .unwrap_or(DEFAULT_COMMENT)
}

/// Orders the option identifiers for an extension.
///
/// The result is the extension's prepend options, then every `.all` option
/// regardless of its own placement flag, then the extension's append options.
/// Each part keeps configuration file order.
pub fn merge_options<'a>(config: &'a Config, extension: &str) -> Vec<&'a str> {
    let (prepend, append): (Vec<_>, Vec<_>) = config
        .options(extension)
        .unwrap_or_else(|| {
            debug!("No configuration found for file type {}", extension);
            Default::default()
        })
        .iter()
        .partition(|option| option.is_prepend);

    let defaults = config.options(ALL_TYPE).unwrap_or(&[]);

    prepend
        .into_iter()
        .chain(defaults)
        .chain(append)
        .map(|option| option.identifier.as_str())
        .collect()
}

/// Removes one leading quote and the last character of a raw line.
fn strip_raw_quotes(line: &str) -> &str {
    let mut chars = line.chars();
    if matches!(chars.next(), Some('"' | '\'')) && chars.next_back().is_some() {
        chars.as_str()
    } else {
        line
    }
}

/// Renders the raw code block that follows the header.
///
/// A line that reads `\n` once unquoted becomes an empty line. Every other
/// line is written exactly as it appeared in the configuration, quotes included.
pub fn render_raw_lines(raw_lines: &[String]) -> String {
    if raw_lines.is_empty() {
        return String::new();
    }

    let mut block = String::from("\n");
    for line in raw_lines {
        debug!("{}", line);
        if strip_raw_quotes(line) == "\\n" {
            block.push('\n');
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    block
}

/// Renders the text written into a freshly created file.
pub struct Renderer<'a> {
    config: &'a Config,
    date: NaiveDate,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer that stamps `<date>` with today's local date.
    pub fn new(config: &'a Config) -> Self {
        Self::with_date(config, Local::now().date_naive())
    }

    /// Creates a renderer with a fixed date for `<date>`.
    pub fn with_date(config: &'a Config, date: NaiveDate) -> Self {
        Self { config, date }
    }

    /// Resolves a single option identifier.
    ///
    /// `<date>` and `<file>` are only recognised as the whole identifier. An
    /// identifier that is exactly a variable name gives its value; otherwise
    /// variables are replaced wherever they appear and unknown placeholders
    /// stay as literal text. Substitution is single pass: a variable's value is
    /// used as is, even if it looks like another placeholder.
    pub fn resolve(&self, identifier: &str, filename: &str) -> String {
        match identifier {
            "<date>" => format!("DATE: {}", self.date.format("%Y-%m-%d")),
            "<file>" => format!("FILE: {}", filename),
            _ => match self.config.variables.get(identifier) {
                Some(value) => value.clone(),
                None => self.substitute_variables(identifier),
            },
        }
    }

    fn substitute_variables(&self, text: &str) -> String {
        let mut resolved = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find('<') {
            resolved.push_str(&rest[..start]);
            let candidate = &rest[start..];
            let value = candidate
                .find('>')
                .and_then(|end| self.config.variables.get(&candidate[..=end]).map(|v| (end, v)));
            match value {
                Some((end, value)) => {
                    resolved.push_str(value);
                    rest = &candidate[end + 1..];
                }
                None => {
                    resolved.push('<');
                    rest = &candidate[1..];
                }
            }
        }

        resolved.push_str(rest);
        resolved
    }

    /// Builds the complete file content for `filename`.
    ///
    /// # Arguments
    /// * `extension` - Extension of the target, including the dot
    /// * `filename` - Target name as given on the command line
    pub fn render(&self, extension: &str, filename: &str) -> String {
        let prefix = comment_prefix(extension);
        let mut content = String::new();

        for identifier in merge_options(self.config, extension) {
            let line = self.resolve(identifier, filename);
            debug!("{}{}", prefix, line);
            content.push_str(prefix);
            content.push_str(&line);
            content.push('\n');
        }

        content.push_str(&render_raw_lines(&self.config.raw_lines));
        content
    }
}
