//! Work list resolution.

use log::debug;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Input;
use crate::domain::Domain;
use crate::error_handling::InputError;

/// Resolves the list of domains to query, in input order.
///
/// A single `--domain` yields one entry. A file yields one entry per line after
/// trimming; only blank lines are skipped. The whole file is
/// read before any domain is fetched.
///
/// # Errors
///
/// Returns `InputError::Read` if the file cannot be opened or read.
pub async fn resolve_domains(input: &Input) -> Result<Vec<Domain>, InputError> {
    match input {
        Input::Domain(raw) => Ok(Domain::parse(raw).into_iter().collect()),
        Input::File(path) => {
            let read_error = |source| InputError::Read {
                path: path.display().to_string(),
                source,
            };

            let file = tokio::fs::File::open(path).await.map_err(read_error)?;
            let mut lines = BufReader::new(file).lines();
            let mut domains = Vec::new();
            while let Some(line) = lines.next_line().await.map_err(read_error)? {
                if let Some(domain) = Domain::parse(&line) {
                    domains.push(domain);
                }
            }
            debug!("Read {} domains from {}", domains.len(), path.display());
            Ok(domains)
        }
    }
}
