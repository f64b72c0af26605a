use std::fmt;

/// One of the two grid dimensions.
///
/// Every algorithm in this crate runs identically and independently per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Column,
    Row,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Column, Axis::Row];

    pub fn name(self) -> &'static str {
        match self {
            Axis::Column => "column",
            Axis::Row => "row",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
