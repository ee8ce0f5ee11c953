use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The four aligned sequences recorded per successful probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum SeriesColumn {
    SampleRtt,
    EstimatedRtt,
    DevRtt,
    TimeoutInterval,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn names_are_snake_case() {
        let names: Vec<&'static str> = SeriesColumn::iter().map(Into::into).collect();
        assert_eq!(
            names,
            ["sample_rtt", "estimated_rtt", "dev_rtt", "timeout_interval"]
        );
        assert_eq!(
            SeriesColumn::from_str("dev_rtt").unwrap(),
            SeriesColumn::DevRtt
        );
    }
}
