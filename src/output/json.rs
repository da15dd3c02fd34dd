//! JSON output.

use crate::models::{Address, Network};
use serde::Serialize;
use std::error::Error;

/// Shape of a JSON result document.
#[derive(Serialize, Debug)]
pub struct JsonReport<'a> {
    pub op: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub networks: &'a [Network],
    pub count: usize,
}

/// Serialise a result as pretty printed JSON.
pub fn render_json(
    op: &str,
    address: Option<Address>,
    networks: &[Network],
) -> Result<String, Box<dyn Error>> {
    let report = JsonReport {
        op,
        address,
        networks,
        count: networks.len(),
    };
    serde_json::to_string_pretty(&report).map_err(|e| format!("Error serializing JSON: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_networks() {
        let nets = [
            Network::new("10.0.0.0/18").unwrap(),
            Network::new("10.0.64.0/18").unwrap(),
        ];
        let json = render_json("split", None, &nets).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["op"], "split");
        assert_eq!(value["count"], 2);
        assert_eq!(value["networks"][1], "10.0.64.0/18");
        assert!(value.get("address").is_none());
    }

    #[test]
    fn test_render_json_address() {
        let ip: Address = "9.255.255.255".parse().unwrap();
        let json = render_json("add", Some(ip), &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["address"], "9.255.255.255");
        assert_eq!(value["count"], 0);
    }
}
