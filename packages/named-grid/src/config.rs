use crate::axis::Axis;
use crate::length::GridLength;

/// How resolution treats names that only lead into an alias cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AliasCyclePolicy {
    /// Resolve to `[0, 0]` like any other unresolvable name, and log a warning.
    #[default]
    Fallback,
    /// Fail placement with [`NamedGridError::AliasCycle`](crate::NamedGridError::AliasCycle).
    Reject,
}

/// Options used when constructing a [`NamedGridPanel`](crate::NamedGridPanel)
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Size of column tracks whose definition leaves `size` unset
    pub default_column_size: GridLength,
    /// Size of row tracks whose definition leaves `size` unset
    pub default_row_size: GridLength,
    /// Treatment of alias cycles during placement
    pub alias_cycle_policy: AliasCyclePolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_column_size: GridLength::STAR,
            default_row_size: GridLength::STAR,
            alias_cycle_policy: AliasCyclePolicy::Fallback,
        }
    }
}

impl PanelConfig {
    pub fn default_size(&self, axis: Axis) -> GridLength {
        match axis {
            Axis::Column => self.default_column_size,
            Axis::Row => self.default_row_size,
        }
    }
}

#[cfg(test)]
impl PanelConfig {
    /// Strict configuration for tests: alias cycles surface as errors.
    pub fn for_testing() -> Self {
        Self {
            alias_cycle_policy: AliasCyclePolicy::Reject,
            ..Default::default()
        }
    }
}
