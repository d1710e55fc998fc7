//! Statement engine.
//!
//! Resolves every performance of an invoice against the catalog, prices it,
//! accrues its volume credits and renders the result as plain text. Any
//! failing performance aborts the whole statement.

use crate::error::Result;
use crate::invoice::Invoice;
use crate::money::Usd;
use crate::play::PlayCatalog;
use crate::pricing;
use log::debug;
use std::fmt;

/// Line separator used in rendered statements.
pub const LINE_SEPARATOR: &str = "\n";

/// One priced performance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub play_name: String,
    pub audience: u32,
    pub amount_cents: u64,
    pub credits: u64,
}

/// The priced roll-up of an invoice.
///
/// # Invariants
///
/// - `lines` follow the invoice's performance order
/// - `total_amount_cents` and `total_credits` are the sums over `lines`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    pub total_amount_cents: u64,
    pub total_credits: u64,
}

impl Statement {
    /// Prices every performance of `invoice`.
    pub fn build(invoice: &Invoice, catalog: &PlayCatalog) -> Result<Self> {
        if invoice.is_empty() {
            debug!("{}: no performances to bill", invoice.customer);
        }

        let lines = invoice
            .performances
            .iter()
            .map(|performance| -> Result<StatementLine> {
                let play = catalog.play_for(performance)?;
                let amount_cents = pricing::amount_for(performance, play)?;
                let credits = pricing::credits_for(performance, play)?;

                debug!(
                    "{}: {} seats of '{}' priced at {} cents, {} credits",
                    invoice.customer, performance.audience, play.name, amount_cents, credits
                );

                Ok(StatementLine {
                    play_name: play.name.clone(),
                    audience: performance.audience,
                    amount_cents,
                    credits,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total_amount_cents = lines.iter().map(|line| line.amount_cents).sum();
        let total_credits = lines.iter().map(|line| line.credits).sum();

        Ok(Statement {
            customer: invoice.customer.clone(),
            lines,
            total_amount_cents,
            total_credits,
        })
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Statement for {}{}", self.customer, LINE_SEPARATOR)?;
        for line in &self.lines {
            write!(
                f,
                "  {}: {} ({} seats){}",
                line.play_name,
                Usd::from_cents(line.amount_cents),
                line.audience,
                LINE_SEPARATOR
            )?;
        }
        write!(
            f,
            "Amount owed is {}{}",
            Usd::from_cents(self.total_amount_cents),
            LINE_SEPARATOR
        )?;
        write!(f, "You earned {} credits{}", self.total_credits, LINE_SEPARATOR)
    }
}

/// Renders the billing statement for `invoice`.
///
/// # Examples
///
/// ```
/// use theater_statement::{statement, Invoice, Performance, Play, PlayCatalog};
///
/// let catalog: PlayCatalog = [("hamlet", Play::new("Hamlet", "tragedy"))]
///     .into_iter()
///     .collect();
/// let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
///
/// let text = statement(&invoice, &catalog).unwrap();
/// assert!(text.contains("  Hamlet: $650.00 (55 seats)\n"));
/// ```
pub fn statement(invoice: &Invoice, catalog: &PlayCatalog) -> Result<String> {
    Ok(Statement::build(invoice, catalog)?.to_string())
}
