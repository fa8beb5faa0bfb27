use serde::Serialize;
use std::collections::HashMap;

/// Point-in-time state of one wireless interface as reported by
/// `netsh wlan show interface`.
///
/// Every attribute is the trimmed string netsh printed for it; fields the
/// report did not mention are `None`. A snapshot is rebuilt from scratch on
/// every query and carries no persistent identity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Interface {
    pub name: Option<String>,
    pub description: Option<String>,
    pub guid: Option<String>,
    pub physical_address: Option<String>,
    pub state: Option<String>,
    pub ssid: Option<String>,
    pub bssid: Option<String>,
    pub network_type: Option<String>,
    pub radio_type: Option<String>,
    pub authentication: Option<String>,
    pub cipher: Option<String>,
    pub connection_mode: Option<String>,
    pub channel: Option<String>,
    pub receive_rate: Option<String>,
    pub transmit_rate: Option<String>,
    pub signal: Option<String>,
    pub profile: Option<String>,
}

impl Interface {
    fn from_fields(mut fields: HashMap<String, String>) -> Self {
        Interface {
            name: fields.remove("name"),
            description: fields.remove("description"),
            guid: fields.remove("guid"),
            physical_address: fields.remove("physical_address"),
            state: fields.remove("state"),
            ssid: fields.remove("ssid"),
            bssid: fields.remove("bssid"),
            network_type: fields.remove("network_type"),
            radio_type: fields.remove("radio_type"),
            authentication: fields.remove("authentication"),
            cipher: fields.remove("cipher"),
            connection_mode: fields.remove("connection_mode"),
            channel: fields.remove("channel"),
            receive_rate: fields.remove("receive_rate"),
            transmit_rate: fields.remove("transmit_rate"),
            signal: fields.remove("signal"),
            profile: fields.remove("profile"),
        }
    }
}

/// Parse a full `netsh wlan show interface` report.
///
/// The report opens with a banner line ("There are N interfaces on the
/// system:") followed by one blank-line-separated paragraph per interface
/// and a trailing hosted-network paragraph. Each paragraph is parsed as
/// `" : "`-separated key/value lines; a line without the separator is a
/// wrapped continuation of the previous key and is appended to its value
/// joined by `", "`. Keys are normalized to lowercase with spaces replaced
/// by underscores, and the `(Mbps)` unit suffix on the rate lines is
/// dropped.
///
/// Returns every paragraph that reported a `Name`, in report order. The
/// hosted-network paragraph has no `Name` line and is skipped.
pub fn parse_interfaces(report: &str) -> Vec<Interface> {
    let report = report.replace("\r\n", "\n").replace("(Mbps)", "");

    report
        .split("\n\n")
        .skip(1)
        .map(parse_fields)
        .filter(|fields| fields.contains_key("name"))
        .map(Interface::from_fields)
        .collect()
}

/// Parse one detail paragraph into normalized key/value pairs.
fn parse_fields(block: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    let mut last_key: Option<String> = None;

    for line in block.lines() {
        match line.split_once(" : ") {
            Some((key, value)) => {
                let key = key.trim().to_lowercase().replace(' ', "_");
                fields.insert(key.clone(), value.trim().to_string());
                last_key = Some(key);
            }
            None => {
                // Wrapped continuation of the previous field, e.g. a rate
                // list that netsh emits across multiple lines.
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                if let Some(key) = &last_key {
                    if let Some(value) = fields.get_mut(key) {
                        value.push_str(", ");
                        value.push_str(text);
                    }
                }
            }
        }
    }

    fields
}
