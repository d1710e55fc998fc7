//! # Theater Statement
//!
//! Produces the billing statement for a theater customer from an invoice
//! of performances and a catalog of plays.
//!
//! ## Design Principles
//!
//! - **Integer money**: all charges are cents; dollars appear only when rendered
//! - **Closed genres**: pricing and credit rules come from one table keyed by [`Genre`]
//! - **All or nothing**: an unresolved play or unknown genre fails the whole statement
//! - **Deterministic output**: performances are listed in invoice order, lines end in `\n`
//!
//! ## Example
//!
//! ```
//! use theater_statement::{statement, Invoice, Performance, Play, PlayCatalog};
//!
//! let catalog: PlayCatalog = [
//!     ("hamlet", Play::new("Hamlet", "tragedy")),
//!     ("as-like", Play::new("As You Like It", "comedy")),
//! ]
//! .into_iter()
//! .collect();
//! let invoice = Invoice::new(
//!     "BigCo",
//!     vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
//! );
//!
//! let text = statement(&invoice, &catalog).unwrap();
//! assert!(text.ends_with("Amount owed is $1,230.00\nYou earned 37 credits\n"));
//! ```

pub mod error;
pub mod invoice;
pub mod loader;
pub mod money;
pub mod play;
pub mod pricing;
pub mod statement;

pub use error::{Result, StatementError};
pub use invoice::{Invoice, Performance};
pub use money::{usd, Usd};
pub use play::{Genre, Play, PlayCatalog};
pub use pricing::{amount_for, credits_for, GenreRules};
pub use statement::{statement, Statement, StatementLine};
