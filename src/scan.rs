//! Visible-network scanning.
//!
//! This module parses the report produced by `netsh wlan show networks`
//! into [`Network`] records. Each visible network is printed as a block of
//! four consecutive labeled lines:
//!
//! ```text
//! SSID 1 : HomeWifi
//!     Network type            : Infrastructure
//!     Authentication          : WPA2-Personal
//!     Encryption              : CCMP
//! ```
//!
//! A single case-insensitive pattern captures the value after the colon on
//! each of the four lines, repeated across the report. Networks are
//! returned in report order, which is whatever order netsh emitted
//! (typically strongest signal first); this module does not re-sort them.
//!
//! The field labels and line layout are those of the English-locale netsh
//! output. Localized or reformatted output from other tool versions is not
//! recognized.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// One wireless network visible at scan time.
///
/// Discarded after use; a fresh scan produces fresh records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    /// Network name. Empty for hidden networks.
    pub ssid: String,

    /// Network type, e.g. "Infrastructure" or "Adhoc".
    pub network_type: String,

    /// Authentication scheme, e.g. "WPA2-Personal" or "Open".
    pub authentication: String,

    /// Encryption cipher, e.g. "CCMP" or "None".
    pub encryption: String,
}

lazy_static! {
    static ref NETWORK_RE: Regex = Regex::new(
        r"(?i)ssid[^:\n]*:[ \t]*(.*)\n[^:\n]*type[^:\n]*:[ \t]*(.*)\n[^:\n]*authentication[^:\n]*:[ \t]*(.*)\n[^:\n]*encryption[^:\n]*:[ \t]*(.*)\n"
    )
    .unwrap();
}

/// Parse a `netsh wlan show networks` report into visible networks, in
/// report order.
pub fn parse_networks(report: &str) -> Vec<Network> {
    let report = report.replace("\r\n", "\n");

    NETWORK_RE
        .captures_iter(&report)
        .map(|caps| Network {
            ssid: caps[1].trim().to_string(),
            network_type: caps[2].trim().to_string(),
            authentication: caps[3].trim().to_string(),
            encryption: caps[4].trim().to_string(),
        })
        .collect()
}
