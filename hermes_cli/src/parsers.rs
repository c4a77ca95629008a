pub fn parse_timestamp(input: &str) -> Result<jiff::Timestamp, String> {
    if let Ok(timestamp) = input.parse::<jiff::Timestamp>() {
        return Ok(timestamp);
    }

    if let Ok(zoned) = input.parse::<jiff::Zoned>() {
        return Ok(zoned.timestamp());
    }

    if let Ok(milliseconds) = input.parse::<i64>() {
        return jiff::Timestamp::from_millisecond(milliseconds).map_err(|error| error.to_string());
    }

    Err(String::from("Invalid timestamp"))
}

pub fn duration_from_millis(milliseconds: u64) -> anyhow::Result<jiff::SignedDuration> {
    Ok(jiff::SignedDuration::from_millis(i64::try_from(milliseconds)?))
}
