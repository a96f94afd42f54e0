use anyhow::{bail, Context, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stat {
    Max,
    Min,
    Average,
}

impl Stat {
    pub fn adjective(&self) -> &'static str {
        match self {
            Stat::Max => "maximum",
            Stat::Min => "minimum",
            Stat::Average => "average",
        }
    }
}

/// Computes one statistic over the stored text samples of a single day.
///
/// Every sample must parse as a number; a bad stored value is an error, never
/// silently skipped. The average is truncated to two decimals, not rounded.
/// Callers are expected to have checked the day isn't empty.
pub fn compute(stat: Stat, samples: &[&str]) -> Result<f64> {
    if samples.is_empty() {
        bail!("no samples to aggregate");
    }

    let mut parsed = Vec::with_capacity(samples.len());

    for raw in samples {
        let value: f64 = raw
            .trim()
            .parse()
            .with_context(|| format!("stored measurement value {:?} is not numeric", raw))?;
        parsed.push(value);
    }

    let result = match stat {
        Stat::Max => parsed.iter().copied().fold(f64::MIN, f64::max),
        Stat::Min => parsed.iter().copied().fold(f64::MAX, f64::min),
        Stat::Average => {
            let average = parsed.iter().sum::<f64>() / parsed.len() as f64;
            (average * 100.0).floor() / 100.0
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_min_and_average_over_a_day() {
        let samples = ["40", "60", "50"];

        assert_eq!(compute(Stat::Max, &samples).unwrap(), 60.0);
        assert_eq!(compute(Stat::Min, &samples).unwrap(), 40.0);
        assert_eq!(compute(Stat::Average, &samples).unwrap(), 50.0);
    }

    #[test]
    fn average_truncates_instead_of_rounding() {
        //33.336 would round to 33.34; it has to floor to 33.33
        assert_eq!(compute(Stat::Average, &["33.336"]).unwrap(), 33.33);
        assert_eq!(compute(Stat::Average, &["33.33", "33.34", "33.34"]).unwrap(), 33.33);
    }

    #[test]
    fn single_sample_day_is_its_own_extreme() {
        assert_eq!(compute(Stat::Max, &["21.5"]).unwrap(), 21.5);
        assert_eq!(compute(Stat::Min, &["21.5"]).unwrap(), 21.5);
    }

    #[test]
    fn non_numeric_sample_is_fatal() {
        let err = compute(Stat::Max, &["40", "soggy", "50"]).unwrap_err();

        assert!(err.to_string().contains("soggy"));
    }

    #[test]
    fn empty_day_is_rejected() {
        assert!(compute(Stat::Average, &[]).is_err());
    }
}
