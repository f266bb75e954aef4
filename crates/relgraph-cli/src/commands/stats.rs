//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use relgraph_store::RelationStore;

/// Execute the stats command.
pub fn execute_stats(args: StatsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let path = config.snapshot_or_default(args.snapshot);
    let store = RelationStore::load(&path)?;

    println!("{}", formatter.format_stats(&path, &store.stats())?);

    Ok(())
}
