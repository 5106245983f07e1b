// Reason messages shown when a record carries none of its own.

/// Attached to every synthesized fallback record.
pub const FALLBACK_REASON: &str =
    "Showing a sample recommendation while personalised picks are being prepared.";

/// Substituted for a missing or blank curated reason.
pub fn value_reason(value_name: &str) -> String {
    format!("Your value \"{value_name}\" makes this a natural next step.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_reason_names_the_value() {
        assert!(value_reason("Curiosity").contains("\"Curiosity\""));
    }
}
