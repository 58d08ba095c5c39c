use crate::category::WasteCategory;

/// The outcome of classifying a single image.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: WasteCategory,
    /// Probability of the predicted label in the range `0.0..=1.0`.
    pub confidence: f64,
    /// Per-class probabilities as reported by the classifier.
    pub probabilities: Vec<(WasteCategory, f64)>,
}

impl Classification {
    pub fn new(label: WasteCategory, confidence: f64) -> Self {
        Self {
            label,
            confidence,
            probabilities: vec![(label, confidence)],
        }
    }

    pub const fn is_recyclable(&self) -> bool {
        self.label.is_recyclable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recyclable_follows_label() {
        assert!(Classification::new(WasteCategory::Glass, 0.9).is_recyclable());
        assert!(!Classification::new(WasteCategory::Trash, 0.9).is_recyclable());
    }
}
