// ============================================================================
// Electricity Price Reference Data
// Price zones and quarterly day/night averages
// ============================================================================

use super::errors::CalculationError;
use crate::numeric::{NumericResult, Ore};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Swedish electricity bidding zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum PriceZone {
    /// Luleå
    Se1,
    /// Sundsvall
    Se2,
    /// Stockholm
    Se3,
    /// Malmö
    Se4,
}

impl PriceZone {
    pub const ALL: [PriceZone; 4] = [PriceZone::Se1, PriceZone::Se2, PriceZone::Se3, PriceZone::Se4];

    /// Zone identifier as used by Nord Pool, e.g. `"SE4"`.
    pub fn id(self) -> &'static str {
        match self {
            PriceZone::Se1 => "SE1",
            PriceZone::Se2 => "SE2",
            PriceZone::Se3 => "SE3",
            PriceZone::Se4 => "SE4",
        }
    }
}

impl fmt::Display for PriceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PriceZone {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceZone::ALL
            .into_iter()
            .find(|zone| zone.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CalculationError::invalid_input("price_zone", format!("unknown zone `{}`", s))
            })
    }
}

/// Calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Quarter containing `month` (1-12).
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=3 => Some(Quarter::Q1),
            4..=6 => Some(Quarter::Q2),
            7..=9 => Some(Quarter::Q3),
            10..=12 => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// Quarter containing `date`.
    pub fn from_date(date: impl Datelike) -> Self {
        match date.month0() / 3 {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }
}

/// Average day and night spot price for one zone and quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceQuarterInfo {
    pub zone: PriceZone,
    pub year: i32,
    pub quarter: Quarter,
    pub avg_day_price_ore: Ore,
    pub avg_night_price_ore: Ore,
}

impl PriceQuarterInfo {
    pub fn new(
        zone: PriceZone,
        year: i32,
        quarter: Quarter,
        avg_day_price_ore: Ore,
        avg_night_price_ore: Ore,
    ) -> Self {
        Self {
            zone,
            year,
            quarter,
            avg_day_price_ore,
            avg_night_price_ore,
        }
    }

    /// Day minus night price. Negative when nights are more expensive.
    pub fn spread_ore(&self) -> NumericResult<Ore> {
        self.avg_day_price_ore.checked_sub(self.avg_night_price_ore)
    }

    /// Find the record for `zone` covering `date`.
    pub fn find(infos: &[PriceQuarterInfo], zone: PriceZone, date: NaiveDate) -> Option<&Self> {
        let quarter = Quarter::from_date(date);
        infos
            .iter()
            .find(|info| info.zone == zone && info.year == date.year() && info.quarter == quarter)
    }
}
