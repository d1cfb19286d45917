use derive_more::Display;
use strum::AsRefStr;

/// Value Object - which dashboard chart raised an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Region")]
    #[strum(serialize = "region")]
    Region,
    #[display(fmt = "Revenue")]
    #[strum(serialize = "revenue")]
    Revenue,
}

/// Value Object - a click on a chart, reduced to the indices of the
/// elements under the pointer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartClickEvent {
    pub active_indices: Vec<usize>,
}

impl ChartClickEvent {
    pub fn new(active_indices: Vec<usize>) -> Self {
        Self { active_indices }
    }

    pub fn at(index: usize) -> Self {
        Self { active_indices: vec![index] }
    }

    pub fn first_index(&self) -> Option<usize> {
        self.active_indices.first().copied()
    }
}

/// What a chart click did to the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartInteraction {
    /// The click hit no element
    NoActiveElement,
    /// Search text was set to the clicked label
    Filtered { label: String },
    /// This chart kind does not drive the filter
    UnhandledKind(ChartKind),
    /// The index does not address a label of the chart
    IndexOutOfRange { index: usize, len: usize },
}

impl ChartInteraction {
    pub fn changed_state(&self) -> bool {
        matches!(self, ChartInteraction::Filtered { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_key_is_lowercase() {
        assert_eq!(ChartKind::Region.as_ref(), "region");
        assert_eq!(ChartKind::Revenue.to_string(), "Revenue");
    }

    #[test]
    fn first_index_of_empty_event_is_none() {
        assert_eq!(ChartClickEvent::default().first_index(), None);
        assert_eq!(ChartClickEvent::new(vec![3, 1]).first_index(), Some(3));
    }
}
