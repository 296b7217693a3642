use crate::platform::{LineItem, ReturnItem};
use crate::types::Weight;

/// Weight assumed for a unit whose variant has no weight
pub const DEFAULT_UNIT_WEIGHT_GRAMS: f64 = 500.0;

/// Weight contribution of one line: `quantity * unit_weight`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedItem {
    pub unit_weight: Option<f64>,
    pub quantity: Option<u64>,
}

impl WeightedItem {
    /// Never negative; a nonsensical negative unit weight counts as nothing
    pub fn grams(&self) -> f64 {
        let grams = self.quantity.unwrap_or(1) as f64
            * self.unit_weight.unwrap_or(DEFAULT_UNIT_WEIGHT_GRAMS);
        grams.max(0.0)
    }

    /// Contribution of a line item being fulfilled
    pub fn fulfilled(item: &LineItem) -> Self {
        Self {
            unit_weight: item.variant.as_ref().and_then(|v| v.weight),
            quantity: item.fulfilled_quantity,
        }
    }

    /// Contribution of a line item coming back in a return
    pub fn returned(item: &ReturnItem) -> Self {
        let line = item.item.as_ref();
        Self {
            unit_weight: line.and_then(|l| l.variant.as_ref()).and_then(|v| v.weight),
            quantity: line.and_then(|l| l.returned_quantity),
        }
    }
}

/// Sum of all contributions, rounded to whole grams for the carrier
pub fn total_weight(items: impl IntoIterator<Item = WeightedItem>) -> Weight {
    let grams: f64 = items.into_iter().map(|item| item.grams()).sum();
    // `as` saturates and maps NaN to 0
    Weight::grams(grams.round() as u64)
}
