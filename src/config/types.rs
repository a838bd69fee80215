//! Configuration types for leave policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the leave policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier for the policy (e.g., "statutory").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// An accruing tier band.
///
/// Employees whose tenure is at least `min_years` (and below the next band's
/// `min_years`) accrue `days` of leave per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBand {
    /// Whole years of tenure at which this band starts (inclusive).
    pub min_years: u32,
    /// Annual accrual for the band.
    pub days: Decimal,
}

/// Structure of policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// First calendar year for which entitlement is computed.
    pub series_start_year: i32,
    /// Maximum entitlement for a single calendar year.
    pub annual_cap: Decimal,
    /// Divisor used to turn day counts into year fractions.
    pub days_per_year: u32,
}

/// Structure of tiers.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct TiersConfig {
    /// Accruing bands, ordered by `min_years`.
    pub tiers: Vec<TierBand>,
}

/// The numeric rules the calculation functions run against.
///
/// # Example
///
/// ```
/// use leave_engine::config::LeavePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy::statutory();
/// assert_eq!(policy.series_start_year, 2018);
/// assert_eq!(policy.annual_cap, Decimal::from(15));
/// assert_eq!(policy.tiers.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// First calendar year of every entitlement series.
    pub series_start_year: i32,
    /// Per-year cap applied after adding tier accrual and seniority bonus.
    pub annual_cap: Decimal,
    /// Length of a year in days for accrual fractions and seniority periods.
    pub days_per_year: u32,
    /// Accruing bands, ascending by `min_years`.
    pub tiers: Vec<TierBand>,
}

impl LeavePolicy {
    /// The statutory policy: 5 days from 1 year, 10 from 10 years, 15 from 20 years,
    /// series from 2018, capped at 15 days per year.
    pub fn statutory() -> Self {
        Self {
            series_start_year: 2018,
            annual_cap: Decimal::from(15),
            days_per_year: 365,
            tiers: vec![
                TierBand {
                    min_years: 1,
                    days: Decimal::from(5),
                },
                TierBand {
                    min_years: 10,
                    days: Decimal::from(10),
                },
                TierBand {
                    min_years: 20,
                    days: Decimal::from(15),
                },
            ],
        }
    }

    /// Checks that the policy values are internally consistent.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tiers.is_empty() {
            return Err(invalid("at least one tier band is required"));
        }
        if self.annual_cap <= Decimal::ZERO {
            return Err(invalid("annual_cap must be positive"));
        }
        if !(1..=MAX_DAYS_PER_YEAR).contains(&self.days_per_year) {
            return Err(invalid(format!(
                "days_per_year must be between 1 and {}",
                MAX_DAYS_PER_YEAR
            )));
        }
        if self.annual_cap > Decimal::from(self.days_per_year) {
            return Err(invalid("annual_cap must not exceed days_per_year"));
        }

        let mut previous: Option<&TierBand> = None;
        for band in &self.tiers {
            if band.min_years == 0 {
                return Err(invalid("tier min_years must be at least 1"));
            }
            if band.days <= Decimal::ZERO {
                return Err(invalid(format!(
                    "tier starting at {} years must accrue a positive number of days",
                    band.min_years
                )));
            }
            if band.days > self.annual_cap {
                return Err(invalid(format!(
                    "tier starting at {} years exceeds annual_cap",
                    band.min_years
                )));
            }
            if let Some(prev) = previous {
                if band.min_years <= prev.min_years {
                    return Err(invalid("tier min_years must be strictly increasing"));
                }
                if band.days < prev.days {
                    return Err(invalid("tier days must not decrease with tenure"));
                }
            }
            previous = Some(band);
        }

        Ok(())
    }
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self::statutory()
    }
}

/// Upper bound for `days_per_year`; keeps every accrual product far inside
/// `Decimal` range.
const MAX_DAYS_PER_YEAR: u32 = 366;

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidPolicy {
        message: message.into(),
    }
}

/// The complete policy configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    metadata: PolicyMetadata,
    policy: LeavePolicy,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, policy: LeavePolicy) -> Self {
        Self { metadata, policy }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the calculation rules.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }
}
