//! CSV loading of play catalogs and invoices.
//!
//! Plays are read from `id,name,type` rows. Invoices are read from
//! `customer,play_id,audience` rows and grouped per customer in order of
//! first appearance; each customer's performances keep their row order.
//! Unlike the statement engine, the loader is not pure: it reports the first
//! bad row and stops.

use crate::error::{Result, StatementError};
use crate::invoice::{Invoice, Performance};
use crate::play::{Play, PlayCatalog};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Raw play row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct PlayRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub genre: String,
}

/// Raw performance row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct PerformanceRecord {
    pub customer: String,
    pub play_id: String,
    pub audience: u32,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(reader)
}

/// Reads a play catalog.
///
/// Duplicate ids and empty names are rejected with
/// [`StatementError::InvalidRecord`]. Genre tags are not checked here.
pub fn load_catalog<R: Read>(reader: R) -> Result<PlayCatalog> {
    let mut catalog = PlayCatalog::new();

    for (row_idx, result) in csv_reader(reader).deserialize::<PlayRecord>().enumerate() {
        let row = row_idx + 2; // 1-indexed, accounting for header row
        let record = result?;

        if record.name.is_empty() {
            return Err(StatementError::InvalidRecord {
                row,
                message: format!("play '{}' has an empty name", record.id),
            });
        }
        if catalog.contains(&record.id) {
            return Err(StatementError::InvalidRecord {
                row,
                message: format!("duplicate play id '{}'", record.id),
            });
        }

        debug!("Row {}: loaded play '{}' ({})", row, record.id, record.genre);
        catalog.insert(record.id, Play::new(record.name, record.genre));
    }

    Ok(catalog)
}

/// Reads performances and groups them into one invoice per customer.
pub fn load_invoices<R: Read>(reader: R) -> Result<Vec<Invoice>> {
    let mut invoices: Vec<Invoice> = Vec::new();
    let mut by_customer: HashMap<String, usize> = HashMap::new();

    for (row_idx, result) in csv_reader(reader)
        .deserialize::<PerformanceRecord>()
        .enumerate()
    {
        let row = row_idx + 2;
        let record = result?;

        let idx = *by_customer
            .entry(record.customer.clone())
            .or_insert_with(|| {
                invoices.push(Invoice::new(record.customer.clone(), Vec::new()));
                invoices.len() - 1
            });

        debug!(
            "Row {}: {} seats of '{}' for {}",
            row, record.audience, record.play_id, record.customer
        );
        invoices[idx].push(Performance::new(record.play_id, record.audience));
    }

    Ok(invoices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_catalog() {
        let csv = r#"id,name,type
hamlet,Hamlet,tragedy
as-like, As You Like It , comedy"#;

        let catalog = load_catalog(Cursor::new(csv)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("as-like").unwrap(), &Play::new("As You Like It", "comedy"));
    }

    #[test]
    fn test_load_catalog_keeps_unknown_genres() {
        let csv = "id,name,type\ncats,Cats,musical\n";

        let catalog = load_catalog(Cursor::new(csv)).unwrap();
        assert_eq!(catalog.get("cats").unwrap().genre, "musical");
    }

    #[test]
    fn test_load_catalog_rejects_duplicate_id() {
        let csv = "id,name,type\nhamlet,Hamlet,tragedy\nhamlet,Hamlet,comedy\n";

        match load_catalog(Cursor::new(csv)) {
            Err(StatementError::InvalidRecord { row, message }) => {
                assert_eq!(row, 3);
                assert!(message.contains("hamlet"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_load_catalog_rejects_empty_name() {
        let csv = "id,name,type\nhamlet,,tragedy\n";

        assert!(matches!(
            load_catalog(Cursor::new(csv)),
            Err(StatementError::InvalidRecord { row: 2, .. })
        ));
    }

    #[test]
    fn test_load_invoices_groups_by_first_appearance() {
        let csv = r#"customer,play_id,audience
BigCo,hamlet,55
Solo,othello,12
BigCo,as-like,35"#;

        let invoices = load_invoices(Cursor::new(csv)).unwrap();
        assert_eq!(invoices.len(), 2);

        assert_eq!(invoices[0].customer, "BigCo");
        assert_eq!(
            invoices[0].performances,
            vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)]
        );
        assert_eq!(invoices[1].customer, "Solo");
        assert_eq!(invoices[1].performances, vec![Performance::new("othello", 12)]);
    }

    #[test]
    fn test_load_invoices_rejects_negative_audience() {
        let csv = "customer,play_id,audience\nBigCo,hamlet,-5\n";

        assert!(matches!(
            load_invoices(Cursor::new(csv)),
            Err(StatementError::Csv(_))
        ));
    }

    #[test]
    fn test_load_invoices_empty_input() {
        let csv = "customer,play_id,audience\n";
        assert!(load_invoices(Cursor::new(csv)).unwrap().is_empty());
    }
}
