//! WiFi management for Windows through the `netsh wlan` utility.
//!
//! This library shells out to `netsh wlan`, captures its human-readable
//! reports, and parses them into small typed records. netsh itself is
//! treated as an opaque external tool: there is no driver access and no
//! use of the native WLAN APIs, and a hang in the tool blocks the caller.
//! Every query re-invokes netsh; nothing is cached between calls.
//!
//! # Modules
//!
//! - [`command`] - Command templating for the netsh operations
//! - [`error`] - Custom error types for the library
//! - [`interface`] - Interface state records and report parsing
//! - [`invoke`] - Synchronous shell invocation and error classification
//! - [`profile`] - Connection profiles and WLAN profile XML generation
//! - [`scan`] - Visible-network records and report parsing
//! - [`wifi`] - The high-level [`Wifi`] facade
//!
//! # Example Usage
//!
//! ```no_run
//! use win_wlan::{Authentication, Encryption, Profile, Wifi};
//!
//! let wifi = Wifi::new();
//!
//! // List visible networks
//! for network in wifi.networks().expect("Scan failed") {
//!     println!("{} [{}]", network.ssid, network.authentication);
//! }
//!
//! // Register a profile and connect with it
//! let profile = Profile::new("HomeWifi")
//!     .with_security(Authentication::Wpa2Psk, Encryption::Aes)
//!     .with_password("hunter2");
//! wifi.connect(profile).expect("Connect failed");
//! ```

/// Command templating module mapping operations to netsh command lines.
/// The template table is built once and immutable afterwards.
pub mod command;

/// Error module defining custom error types for the library.
/// Uses `thiserror` for ergonomic error handling.
pub mod error;

/// Interface module for wireless adapter state reporting.
/// Parses `netsh wlan show interface` output into records.
pub mod interface;

/// Invocation module running command lines through the platform shell.
/// Classifies netsh's in-band error reporting.
pub mod invoke;

/// Profile module for connection descriptors.
/// Renders WLAN profile XML and manages the temp file lifecycle.
pub mod profile;

/// Scan module for discovering visible WiFi networks.
/// Parses `netsh wlan show networks` output into records.
pub mod scan;

/// Facade module exposing the high-level WiFi operations.
pub mod wifi;

// Re-export the main error type for library users
pub use error::WinWlanError;

// Re-export the records and their parsers
pub use interface::{Interface, parse_interfaces};
pub use scan::{Network, parse_networks};

// Re-export profile types and the security constants
pub use profile::{
    Authentication, DEFAULT_AUTHENTICATION, DEFAULT_ENCRYPTION, Encryption, Profile, ProfileXml,
};

// Re-export the facade and its argument types
pub use wifi::{ProfileRef, ProfileSource, Wifi, parse_profile_names};
