//! Endpoint groups and their request options

pub mod cryptocurrency;
pub mod global_metrics;

use crate::params::{present, ListParam};
use cmc_core::{Error, Result};

/// Resolve the `id` / `symbol` pair where exactly one must be given
///
/// Returns the wire key together with the comma joined value.
pub(crate) fn id_or_symbol(
  id: &Option<ListParam>,
  symbol: &Option<ListParam>,
) -> Result<(&'static str, String)> {
  match (present(id), present(symbol)) {
    (Some(_), Some(_)) => Err(Error::validation("id and symbol cannot both be specified")),
    (Some(id), None) => Ok(("id", id.join_csv())),
    (None, Some(symbol)) => Ok(("symbol", symbol.join_csv())),
    (None, None) => Err(Error::validation("either id or symbol must be specified")),
  }
}
