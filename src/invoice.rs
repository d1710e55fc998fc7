//! Invoice and performance models.

use serde::{Deserialize, Serialize};

/// A single staging of a play with a known seat count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Key into the play catalog.
    #[serde(rename = "playID")]
    pub play_id: String,

    /// Seats sold.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's ordered set of performances, billed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Printed verbatim in the statement header.
    pub customer: String,

    /// Performances in billing order.
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }

    /// Appends a performance at the end of the invoice.
    pub fn push(&mut self, performance: Performance) {
        self.performances.push(performance);
    }

    pub fn is_empty(&self) -> bool {
        self.performances.is_empty()
    }
}
