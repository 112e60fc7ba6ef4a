//! Income normalization
//!
//! Folds heterogeneous income sources into a single period-equivalent
//! figure. Recurring salaries are prorated by the flat day-ratio rule:
//! each pay frequency has a fixed cycle length in days (7, 14, 30, 91,
//! 365) and contributes `amount * period_days / cycle_days`, rounded
//! half-up. One-off receipts count only when received inside the period.
//!
//! The day-ratio rule was chosen over calendar pay-date stepping because it
//! is order-free and needs no pay-date bookkeeping; the tradeoff is that a
//! monthly salary scales slightly with month length (28 to 31 days over a
//! 30-day cycle).

use crate::models::{IncomeSource, IncomeSourceType, Money, Period, UserId};

/// Which partner's income to count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeScope {
    /// Only the viewer's own sources
    SelfOnly,
    /// Only sources attributed to the partner
    PartnerOnly,
    /// Both partners
    Combined,
}

/// Total period-equivalent income across the matching sources
///
/// Inactive sources and sources outside the ownership scope contribute
/// nothing. Zero sources yields zero, never an error.
pub fn normalized_income(
    sources: &[IncomeSource],
    period: &Period,
    scope: IncomeScope,
    viewer: UserId,
) -> Money {
    sources
        .iter()
        .filter(|source| source.active)
        .filter(|source| match scope {
            IncomeScope::SelfOnly => !source.is_partner_income(viewer),
            IncomeScope::PartnerOnly => source.is_partner_income(viewer),
            IncomeScope::Combined => true,
        })
        .map(|source| period_amount(source, period))
        .sum()
}

/// A single source's contribution to the period
fn period_amount(source: &IncomeSource, period: &Period) -> Money {
    match source.source_type {
        IncomeSourceType::RecurringSalary => source
            .amount
            .prorate(period.days(), source.frequency.cycle_days()),
        IncomeSourceType::OneOff => {
            let received_in_period = source.is_received
                && source
                    .received_date
                    .map(|d| period.contains(d))
                    .unwrap_or(false);
            if received_in_period {
                source.amount
            } else {
                Money::zero()
            }
        }
    }
}
