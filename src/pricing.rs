//! Pricing and volume-credit rules per genre.
//!
//! All coefficients live in [`RULES`], one row per [`Genre`]. Supporting a
//! new genre means adding a variant with its tag and a row at the variant's
//! position.
//!
//! Amounts are integer cents and are never rounded here.

use crate::error::Result;
use crate::invoice::Performance;
use crate::play::{Genre, Play};

/// Charge and credit coefficients for one genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreRules {
    /// Flat charge for any performance, in cents.
    pub base_amount: u64,

    /// Audience above which the over-capacity charges apply.
    pub audience_threshold: u32,

    /// One-off charge once the threshold is exceeded, in cents.
    pub over_threshold_amount: u64,

    /// Charge per seat beyond the threshold, in cents.
    pub over_threshold_per_seat: u64,

    /// Charge per seat for the whole audience, in cents.
    pub per_seat: u64,

    /// Audience above which each extra seat earns a volume credit.
    pub credit_threshold: u32,

    /// Extra credit for every this many seats, if the genre earns one.
    pub bonus_credit_divisor: Option<u32>,
}

/// The rule table, one row per genre in the order of [`Genre::ALL`].
pub static RULES: [(Genre, GenreRules); 2] = [
    (
        Genre::Tragedy,
        GenreRules {
            base_amount: 40_000,
            audience_threshold: 30,
            over_threshold_amount: 0,
            over_threshold_per_seat: 1_000,
            per_seat: 0,
            credit_threshold: 30,
            bonus_credit_divisor: None,
        },
    ),
    (
        Genre::Comedy,
        GenreRules {
            base_amount: 30_000,
            audience_threshold: 20,
            over_threshold_amount: 10_000,
            over_threshold_per_seat: 500,
            per_seat: 300,
            credit_threshold: 30,
            bonus_credit_divisor: Some(5),
        },
    ),
];

impl Genre {
    /// Looks up this genre's row in [`RULES`].
    pub fn rules(&self) -> &'static GenreRules {
        &RULES[*self as usize].1
    }
}

impl GenreRules {
    /// Charge in cents for `audience` seats.
    pub fn amount(&self, audience: u32) -> u64 {
        let mut amount = self.base_amount;
        if audience > self.audience_threshold {
            amount += self.over_threshold_amount
                + self.over_threshold_per_seat * u64::from(audience - self.audience_threshold);
        }
        amount + self.per_seat * u64::from(audience)
    }

    /// Volume credits earned by `audience` seats.
    pub fn credits(&self, audience: u32) -> u64 {
        let base = u64::from(audience.saturating_sub(self.credit_threshold));
        let bonus = self
            .bonus_credit_divisor
            .map(|divisor| u64::from(audience / divisor))
            .unwrap_or(0);
        base + bonus
    }
}

/// Charge in cents for a performance of `play`.
///
/// Fails with `UnknownGenre` when the play's genre tag has no rules.
pub fn amount_for(performance: &Performance, play: &Play) -> Result<u64> {
    Ok(play.genre()?.rules().amount(performance.audience))
}

/// Volume credits earned by a performance of `play`.
pub fn credits_for(performance: &Performance, play: &Play) -> Result<u64> {
    Ok(play.genre()?.rules().credits(performance.audience))
}
