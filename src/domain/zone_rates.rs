// ============================================================================
// Zone Rate Table
// Guaranteed monthly grid-services income per price zone
// ============================================================================

use super::price::PriceZone;
use crate::numeric::{Amount, Currency};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed monthly income paid during a guaranteed-income campaign, by zone.
///
/// Zones missing from the table are not covered by the campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoneRateTable {
    monthly_rates: BTreeMap<PriceZone, Currency>,
}

impl ZoneRateTable {
    /// Empty table: no zone is covered.
    pub fn empty() -> Self {
        Self {
            monthly_rates: BTreeMap::new(),
        }
    }

    /// Builder method: Add or replace a zone's monthly rate
    pub fn with_rate(mut self, zone: PriceZone, monthly_rate: Currency) -> Self {
        self.monthly_rates.insert(zone, monthly_rate);
        self
    }

    pub fn monthly_rate(&self, zone: PriceZone) -> Option<Currency> {
        self.monthly_rates.get(&zone).copied()
    }

    pub fn covers(&self, zone: PriceZone) -> bool {
        self.monthly_rates.contains_key(&zone)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PriceZone, Currency)> + '_ {
        self.monthly_rates.iter().map(|(zone, rate)| (*zone, *rate))
    }

    pub fn len(&self) -> usize {
        self.monthly_rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_rates.is_empty()
    }
}

impl Default for ZoneRateTable {
    /// The published campaign rates.
    fn default() -> Self {
        Self::empty().with_rate(PriceZone::Se4, Amount::from_integer(1370))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ZoneRateTable::default();
        assert_eq!(
            table.monthly_rate(PriceZone::Se4),
            Some(Amount::from_integer(1370))
        );
        assert!(!table.covers(PriceZone::Se1));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_with_rate_replaces() {
        let table = ZoneRateTable::default()
            .with_rate(PriceZone::Se3, Amount::from_integer(1100))
            .with_rate(PriceZone::Se4, Amount::from_integer(1400));

        assert_eq!(
            table.monthly_rate(PriceZone::Se3),
            Some(Amount::from_integer(1100))
        );
        assert_eq!(
            table.monthly_rate(PriceZone::Se4),
            Some(Amount::from_integer(1400))
        );
        assert_eq!(
            table.iter().map(|(zone, _)| zone).collect::<Vec<_>>(),
            vec![PriceZone::Se3, PriceZone::Se4]
        );
        assert!(ZoneRateTable::empty().is_empty());
    }
}
