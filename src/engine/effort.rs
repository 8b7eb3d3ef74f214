// src/engine/effort.rs

//! Effort adjustment and daily-progress projection.

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::engine::availability::AvailabilityOracle;
use crate::model::calendar::{is_weekend, next_day, one_year_after};
use crate::model::{Calendar, Developer, RoleTable};

/// Fixed part of the parallelism surcharge, in percent.
pub const BASE_SURCHARGE_PERCENT: f64 = 40.0;
/// Surcharge added per unit of parallel factor, in percent.
pub const SURCHARGE_PER_PARALLEL_PERCENT: f64 = 10.0;
/// Share of the parent's nominal effort given to Frontend / QA companions.
pub const COMPANION_EFFORT_SHARE: f64 = 0.25;

/// `1 + (10 × parallelFactor + 40) / 100`.
pub fn effort_multiplier(parallel_factor: usize) -> f64 {
    1.0 + (SURCHARGE_PER_PARALLEL_PERCENT * parallel_factor as f64 + BASE_SURCHARGE_PERCENT) / 100.0
}

/// Nominal effort scaled by the parallelism surcharge, rounded half away
/// from zero.
pub fn adjusted_effort(nominal: f64, parallel_factor: usize) -> f64 {
    (nominal * effort_multiplier(parallel_factor)).round()
}

/// Effort of a generated companion task; the surcharge is the parent's.
pub fn companion_effort(nominal: f64, parent_parallel_factor: usize) -> f64 {
    (nominal * COMPANION_EFFORT_SHARE * effort_multiplier(parent_parallel_factor)).round()
}

/// Result of an end-date projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    pub end_date: NaiveDate,
    /// The iteration bound was hit and `end_date` is the one-year fallback.
    pub saturated: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct EffortModel<'a> {
    roles: &'a RoleTable,
    oracle: AvailabilityOracle<'a>,
    max_projection_days: u32,
}

impl<'a> EffortModel<'a> {
    pub fn new(roles: &'a RoleTable, calendar: &'a Calendar, max_projection_days: u32) -> Self {
        Self {
            roles,
            oracle: AvailabilityOracle::new(calendar),
            max_projection_days,
        }
    }

    /// Sum of role availability over `devs`. Unknown roles add nothing.
    pub fn daily_progress<'d>(&self, devs: impl IntoIterator<Item = &'d Developer>) -> f64 {
        let mut progress = 0.0;
        for dev in devs {
            if let Some(availability) = self.roles.availability_of(&dev.role) {
                trace!(developer = %dev.name, availability, "developer contributes progress");
                progress += availability;
            }
        }
        progress
    }

    /// Walk forward from `start` until `remaining` effort is consumed.
    ///
    /// Weekends advance the date without consuming effort and do not count
    /// toward the iteration bound. On working days only the developers who
    /// are neither on call nor on leave contribute. If the bound is reached
    /// with effort left, the projection falls back to one year after `start`.
    pub fn project_end_date(
        &self,
        devs: &[&Developer],
        start: NaiveDate,
        remaining: f64,
    ) -> Projection {
        let mut current = start;
        let mut remaining = remaining;
        let mut iterations = 0u32;

        while remaining > 0.0 && iterations < self.max_projection_days {
            if is_weekend(current) {
                current = next_day(current);
                continue;
            }

            let present = devs
                .iter()
                .copied()
                .filter(|dev| !self.oracle.is_blocked(&dev.name, current));
            let progress = self.daily_progress(present);
            if progress > 0.0 {
                remaining -= progress;
            }

            if remaining > 0.0 {
                current = next_day(current);
            }
            iterations += 1;
        }

        if remaining > 0.0 {
            return Projection {
                end_date: one_year_after(start),
                saturated: true,
            };
        }

        debug!(%start, end = %current, "projected end date");
        Projection {
            end_date: current,
            saturated: false,
        }
    }
}
