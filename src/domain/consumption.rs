// ============================================================================
// Consumption Profile
// Typical day per month, hourly averages (12 × 24)
// ============================================================================

use super::errors::{CalculationError, CalculationResult};
use super::tariff::TariffInfo;
use crate::numeric::{Amount, Kw, Kwh, NumericError, NumericResult};
use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MONTHS: usize = 12;
pub const HOURS: usize = 24;

/// How many days each month contributes when scaling a typical day to a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DaysPerMonth {
    /// Every month counts 30 days
    Thirty,
    /// Every month counts 30.44 days (365.25 / 12, rounded)
    #[default]
    Average,
    /// Actual calendar days of the given year
    Calendar { year: i32 },
}

impl DaysPerMonth {
    /// Days for `month0` (0 = January).
    pub fn days(self, month0: usize) -> NumericResult<Amount> {
        match self {
            DaysPerMonth::Thirty => Ok(Amount::from_integer(30)),
            DaysPerMonth::Average => Ok(Amount::from_raw_parts(3044, 2)),
            DaysPerMonth::Calendar { year } => days_in_month(year, month0 as u32 + 1)
                .map(Amount::from)
                .ok_or(NumericError::InvalidInput),
        }
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Hourly average consumption for a typical day of each month.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsumptionProfile {
    hourly_kwh: [[Kwh; HOURS]; MONTHS],
}

impl ConsumptionProfile {
    /// Create a profile, rejecting negative values.
    pub fn new(hourly_kwh: [[Kwh; HOURS]; MONTHS]) -> CalculationResult<Self> {
        for (month0, row) in hourly_kwh.iter().enumerate() {
            for (hour, value) in row.iter().enumerate() {
                if value.is_negative() {
                    return Err(CalculationError::invalid_input(
                        "consumption_profile",
                        format!(
                            "month {} hour {} is negative ({})",
                            month0 + 1,
                            hour,
                            value
                        ),
                    ));
                }
            }
        }
        Ok(Self { hourly_kwh })
    }

    /// Create from nested rows as they arrive from a form, checking the shape.
    pub fn from_rows(rows: &[Vec<Kwh>]) -> CalculationResult<Self> {
        if rows.len() != MONTHS {
            return Err(CalculationError::invalid_input(
                "consumption_profile",
                format!("expected {} months, got {}", MONTHS, rows.len()),
            ));
        }

        let mut hourly_kwh = [[Kwh::ZERO; HOURS]; MONTHS];
        for (month0, row) in rows.iter().enumerate() {
            if row.len() != HOURS {
                return Err(CalculationError::invalid_input(
                    "consumption_profile",
                    format!(
                        "month {} has {} hours, expected {}",
                        month0 + 1,
                        row.len(),
                        HOURS
                    ),
                ));
            }
            hourly_kwh[month0].copy_from_slice(row);
        }

        Self::new(hourly_kwh)
    }

    /// Same value for every hour of every month.
    pub fn flat(kwh_per_hour: Kwh) -> CalculationResult<Self> {
        Self::new([[kwh_per_hour; HOURS]; MONTHS])
    }

    /// Value for `month0` (0 = January) and `hour` (0-23).
    pub fn get(&self, month0: usize, hour: usize) -> Option<Kwh> {
        self.hourly_kwh.get(month0)?.get(hour).copied()
    }

    pub fn months(&self) -> &[[Kwh; HOURS]; MONTHS] {
        &self.hourly_kwh
    }

    /// Energy of the typical day in `month0`.
    pub fn daily_total(&self, month0: usize) -> NumericResult<Kwh> {
        let row = self.hourly_kwh.get(month0).ok_or(NumericError::InvalidInput)?;
        Amount::checked_sum(row.iter().copied())
    }

    /// Σ over months of (typical-day energy × days in month).
    pub fn annual_energy(&self, days: DaysPerMonth) -> NumericResult<Kwh> {
        (0..MONTHS).try_fold(Kwh::ZERO, |total, month0| {
            let monthly = self.daily_total(month0)?.checked_mul(days.days(month0)?)?;
            total.checked_add(monthly)
        })
    }

    /// Highest hourly average anywhere in the year; an hour's kWh equals its
    /// mean kW.
    pub fn peak_kw(&self) -> Kw {
        self.hourly_kwh
            .iter()
            .flatten()
            .copied()
            .fold(Kw::ZERO, Amount::max)
    }

    /// Annual energy inside and outside the tariff's day window.
    pub fn day_night_split(
        &self,
        tariff: &TariffInfo,
        days: DaysPerMonth,
    ) -> NumericResult<(Kwh, Kwh)> {
        let mut day = Kwh::ZERO;
        let mut night = Kwh::ZERO;

        for (month0, row) in self.hourly_kwh.iter().enumerate() {
            let month_days = days.days(month0)?;
            for (hour, value) in row.iter().enumerate() {
                let energy = value.checked_mul(month_days)?;
                if tariff.is_day_hour(hour as u8) {
                    day = day.checked_add(energy)?;
                } else {
                    night = night.checked_add(energy)?;
                }
            }
        }

        Ok((day, night))
    }
}
