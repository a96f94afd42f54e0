use anyhow::{anyhow, Result};

//Fixed wire format of the sensor device: humidity-temperature-perceived
const PAYLOAD_DELIMITER: char = '-';

/// A parsed submission payload. Tokens stay as text; the store keeps them as
/// the device sent them.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub humidity: String,
    pub temperature: String,
    pub perceived_temperature: String,
}

/// Splits a raw payload into its three tokens. Empty tokens are skipped and
/// surplus tokens are ignored; fewer than three tokens is an error.
pub fn parse_payload(raw: &str) -> Result<Reading> {
    let mut tokens = raw.split(PAYLOAD_DELIMITER).filter(|token| !token.is_empty());

    let mut next_token = |field: &str| {
        tokens
            .next()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("payload {:?} is missing the {} token", raw, field))
    };

    Ok(Reading {
        humidity: next_token("humidity")?,
        temperature: next_token("temperature")?,
        perceived_temperature: next_token("perceived temperature")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_tokens_in_order() {
        let reading = parse_payload("60-22-21").unwrap();

        assert_eq!(reading.humidity, "60");
        assert_eq!(reading.temperature, "22");
        assert_eq!(reading.perceived_temperature, "21");
    }

    #[test]
    fn skips_empty_tokens() {
        let reading = parse_payload("60--22-21").unwrap();

        assert_eq!(reading.humidity, "60");
        assert_eq!(reading.temperature, "22");
        assert_eq!(reading.perceived_temperature, "21");
    }

    #[test]
    fn ignores_surplus_tokens() {
        let reading = parse_payload("60-22-21-99").unwrap();

        assert_eq!(reading.perceived_temperature, "21");
    }

    #[test]
    fn rejects_payloads_with_missing_tokens() {
        let err = parse_payload("60-22").unwrap_err();

        assert!(err.to_string().contains("perceived temperature"));
        assert!(parse_payload("").is_err());
    }
}
