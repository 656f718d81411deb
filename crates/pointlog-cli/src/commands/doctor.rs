//! Ledger integrity diagnostics.

use pointlog_core::{Ledger, LedgerError};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let ledger = Ledger::open()?;
    let report = ledger.check_integrity()?;
    if report.ok {
        println!("ok: {}", report.reason);
        Ok(())
    } else {
        Err(LedgerError::Integrity(report.reason).into())
    }
}
