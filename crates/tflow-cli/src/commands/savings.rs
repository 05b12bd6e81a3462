use anyhow::Result;
use tflow_config::Config;
use tflow_storage::SavingsLedger;

pub fn handle(config: &Config) -> Result<()> {
    let ledger = match &config.ledger.path {
        Some(path) => SavingsLedger::open(path)?,
        None => SavingsLedger::open_default()?,
    };

    if ledger.is_empty() {
        println!("No savings recorded yet.");
        return Ok(());
    }

    println!("Tokens saved:");
    for (date, tokens) in ledger.entries() {
        println!("  {}  {:>8}", date, tokens);
    }
    println!("  {:<10}  {:>8}", "total", ledger.total());

    Ok(())
}
