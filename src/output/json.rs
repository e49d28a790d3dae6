//! JSON rendering of calculation results.

use serde::Serialize;

/// Pretty-printed JSON for any result record.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::allocate_vlsm;

    #[test]
    fn test_plan_to_json() {
        let plan = allocate_vlsm("10.0.0.0", 24, &[2]);
        let json: serde_json::Value = serde_json::from_str(&to_json(&plan).unwrap()).unwrap();
        assert_eq!(json[0]["status"], "allocated");
        assert_eq!(json[0]["network"], "10.0.0.0");
        assert_eq!(json[0]["broadcast"], "10.0.0.3");
        assert_eq!(json[0]["requested_hosts"], 2);
    }
}
