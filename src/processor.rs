//! Creation of the target file.
//! Ties the configuration parser and the renderer together: probe the target,
//! confirm an overwrite, create it, render the header and write it out.

use crate::config::load_config;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::renderer::Renderer;
use log::{debug, error, info};
use std::fs::{self, File};
use std::path::Path;

/// Returns the extension of the file name in `filename`, dot included.
///
/// Only the last path component is inspected and everything from its last
/// `.` is taken, so `archive.tar.gz` gives `.gz` and `.bashrc` gives
/// `.bashrc`. A name without a dot has the empty extension.
pub fn target_extension(filename: &str) -> &str {
    let name = Path::new(filename).file_name().and_then(|n| n.to_str()).unwrap_or_default();
    name.rfind('.').map(|pos| &name[pos..]).unwrap_or_default()
}

/// Creates (or truncates) the target file.
///
/// An existing file is only truncated when `force` is set or the prompter
/// confirms the overwrite.
///
/// # Errors
/// * `Error::FileExistsError` if the overwrite is declined
/// * `Error::FileCreateError` if the file cannot be created
pub fn prepare_target(path: &Path, force: bool, prompter: &dyn Prompter) -> Result<()> {
    if path.exists() {
        error!("File {} already exists", path.display());
        if !force && !prompter.confirm_overwrite(path)? {
            info!("Aborting file creation...");
            return Err(Error::FileExistsError { path: path.display().to_string() });
        }
    }

    debug!("Creating file: {}", path.display());
    File::create(path)
        .map(|_| ())
        .map_err(|source| Error::FileCreateError { path: path.display().to_string(), source })
}

/// Writes the rendered content to the target file.
pub fn write_target(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|source| Error::FileCreateError { path: path.display().to_string(), source })
}

/// Creates `filename` and fills it with the header configured for its extension.
///
/// # Arguments
/// * `filename` - Target file, as given on the command line
/// * `config_path` - Location of the configuration file
/// * `force` - Overwrite an existing file without asking
/// * `prompter` - Asked for confirmation when the file exists
///
/// # Flow
/// 1. Creates the target, confirming an overwrite if needed
/// 2. Parses the configuration for the target's extension
/// 3. Renders the header and raw code
/// 4. Writes the result to the target
pub fn touch_file(
    filename: &str,
    config_path: &Path,
    force: bool,
    prompter: &dyn Prompter,
) -> Result<()> {
    let target = Path::new(filename);
    prepare_target(target, force, prompter)?;

    let extension = target_extension(filename);
    debug!("Created file of type {}: {}", extension, filename);

    let config = load_config(config_path, extension);
    let content = Renderer::new(&config).render(extension, filename);

    write_target(target, &content)
}
