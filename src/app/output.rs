//! Result routing: derived filenames, file writes and print mode.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::app::presenter::Presenter;
use crate::config::{OUTPUT_FILE_EXTENSION, OUTPUT_FILE_PREFIX};
use crate::domain::{Domain, ResultSet};
use crate::error_handling::OutputError;

/// Default file name for a domain's results: `subcrt-<domain>.txt`.
///
/// Path separators in the domain are replaced with `_` so the file always lands
/// directly in the output directory.
pub fn derived_file_name(domain: &Domain) -> String {
    let stem: String = domain
        .as_str()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}{}.{}", OUTPUT_FILE_PREFIX, stem, OUTPUT_FILE_EXTENSION)
}

/// Chooses where a domain's results are written.
///
/// The explicit `output` path wins only when the work list holds exactly one
/// domain. Otherwise the derived name is placed in `output_dir`.
pub fn output_path(
    output: Option<&Path>,
    output_dir: &Path,
    domain: &Domain,
    work_len: usize,
) -> PathBuf {
    match output {
        Some(explicit) if work_len == 1 => explicit.to_path_buf(),
        _ => output_dir.join(derived_file_name(domain)),
    }
}

/// Writes one hostname per line, creating or truncating `path`.
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be created or written.
pub fn save_to_file(path: &Path, subdomains: &ResultSet) -> Result<(), OutputError> {
    let write_error = |source| OutputError::Write {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for name in subdomains {
        writeln!(writer, "{}", name).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

/// Writes a header line followed by each hostname to `out`.
///
/// # Errors
///
/// Returns `OutputError::Stdout` if writing to `out` fails.
pub fn print_results<W: Write>(
    out: &mut W,
    presenter: &Presenter,
    domain: &Domain,
    subdomains: &ResultSet,
) -> Result<(), OutputError> {
    writeln!(out, "{}", presenter.domain_header(domain.as_str(), subdomains.len()))
        .map_err(OutputError::Stdout)?;
    for name in subdomains {
        writeln!(out, "{}", name).map_err(OutputError::Stdout)?;
    }
    out.flush().map_err(OutputError::Stdout)
}
