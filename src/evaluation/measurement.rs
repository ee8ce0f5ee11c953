use std::fmt::{Display, Formatter, Result};

/// Named scalar flattened out of a [`StatsSummary`](crate::evaluation::StatsSummary).
///
/// Latency measurements carry `unit = Some("ms")`; ratios carry no unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
    pub unit: Option<&'static str>,
}

impl Measurement {
    #[inline]
    pub fn millis<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            unit: Some("ms"),
        }
    }

    #[inline]
    pub fn ratio<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            unit: None,
        }
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.unit {
            Some(u) => write!(f, "{}={:.3}{u}", self.name, self.value),
            None => write!(f, "{}={:.4}", self.name, self.value),
        }
    }
}
