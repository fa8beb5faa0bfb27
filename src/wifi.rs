//! High-level facade over the netsh wlan operations.
//!
//! [`Wifi`] holds no state of its own: every query re-invokes netsh and
//! parses a fresh report, and every command is a single blocking call.
//! Operations that accept "a profile" take it as a sum type, matched
//! explicitly instead of inspected at runtime: [`ProfileRef`] for
//! name-or-record arguments and [`ProfileSource`] for file-or-record.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::command::{self, Op};
use crate::error::WinWlanError;
use crate::interface::{Interface, parse_interfaces};
use crate::invoke;
use crate::profile::{Profile, ProfileXml};
use crate::scan::{Network, parse_networks};

lazy_static! {
    static ref PROFILE_VALUE_RE: Regex = Regex::new(r" : (.*)").unwrap();
}

/// A profile argument for connect and delete: either the name of a profile
/// netsh already knows, or a full [`Profile`] record.
#[derive(Debug, Clone)]
pub enum ProfileRef {
    Name(String),
    Profile(Profile),
}

impl From<&str> for ProfileRef {
    fn from(name: &str) -> Self {
        ProfileRef::Name(name.to_string())
    }
}

impl From<String> for ProfileRef {
    fn from(name: String) -> Self {
        ProfileRef::Name(name)
    }
}

impl From<Profile> for ProfileRef {
    fn from(profile: Profile) -> Self {
        ProfileRef::Profile(profile)
    }
}

/// A profile argument for add: either a WLAN profile XML file already on
/// disk, or a [`Profile`] record to render and clean up automatically.
#[derive(Debug, Clone)]
pub enum ProfileSource {
    XmlFile(PathBuf),
    Profile(Profile),
}

impl From<&Path> for ProfileSource {
    fn from(path: &Path) -> Self {
        ProfileSource::XmlFile(path.to_path_buf())
    }
}

impl From<PathBuf> for ProfileSource {
    fn from(path: PathBuf) -> Self {
        ProfileSource::XmlFile(path)
    }
}

impl From<Profile> for ProfileSource {
    fn from(profile: Profile) -> Self {
        ProfileSource::Profile(profile)
    }
}

/// WiFi state queries and commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wifi;

impl Wifi {
    pub fn new() -> Self {
        Wifi
    }

    /// State snapshot of the first interface netsh reports.
    ///
    /// Most machines have exactly one wireless interface; use
    /// [`interfaces`](Self::interfaces) to see every adapter on machines
    /// with several.
    ///
    /// # Errors
    /// `WinWlanError::NoInterface` when the report lists no interface,
    /// `WinWlanError::ExternalTool` when netsh itself fails.
    pub fn interface(&self) -> Result<Interface> {
        self.interfaces()?
            .into_iter()
            .next()
            .ok_or_else(|| WinWlanError::NoInterface.into())
    }

    /// State snapshots of every wireless interface, in report order.
    pub fn interfaces(&self) -> Result<Vec<Interface>> {
        let output = invoke::run(&command::command(Op::ShowInterfaces))?;
        Ok(parse_interfaces(&output))
    }

    /// True iff the first interface reports the state `"connected"`.
    ///
    /// A machine with no wireless interface is simply not connected.
    pub fn connected(&self) -> Result<bool> {
        let interfaces = self.interfaces()?;
        Ok(interfaces
            .first()
            .is_some_and(|i| i.state.as_deref() == Some("connected")))
    }

    /// Scan result: every network currently visible, in report order.
    ///
    /// Re-queries netsh on every call; nothing is cached.
    pub fn networks(&self) -> Result<Vec<Network>> {
        let output = invoke::run(&command::command(Op::ShowNetworks))?;
        Ok(parse_networks(&output))
    }

    /// Names of the profiles netsh currently knows, in report order.
    ///
    /// Re-queries netsh on every call; nothing is cached.
    pub fn profiles(&self) -> Result<Vec<String>> {
        let output = invoke::run(&command::command(Op::ShowProfiles))?;
        Ok(parse_profile_names(&output))
    }

    /// Connect to a network.
    ///
    /// A [`ProfileRef::Name`] is assumed to be registered already and is
    /// connected to directly. A [`ProfileRef::Profile`] is first added
    /// (rendering its XML, submitting it, deleting the temp file) and then
    /// connected to by its SSID.
    pub fn connect(&self, profile: impl Into<ProfileRef>) -> Result<()> {
        match profile.into() {
            ProfileRef::Name(name) => {
                invoke::run(&command::fill(Op::Connect, &name))?;
            }
            ProfileRef::Profile(profile) => {
                let ssid = profile.ssid.clone();
                self.add_profile(profile)?;
                invoke::run(&command::fill(Op::Connect, &ssid))?;
            }
        }
        Ok(())
    }

    /// Connect with free-form `netsh wlan connect` arguments, flattened in
    /// order, e.g. `&[("name", "HomeWifi"), ("interface", "Wi-Fi")]`.
    ///
    /// The pairs are passed through to netsh untouched.
    pub fn connect_with(&self, args: &[(&str, &str)]) -> Result<()> {
        let flattened = command::flatten_pairs(args);
        invoke::run(&command::fill(Op::ConnectWith, &flattened))?;
        Ok(())
    }

    /// Register a profile with netsh (permanent until deleted).
    ///
    /// A [`ProfileSource::XmlFile`] is submitted as-is and left on disk. A
    /// [`ProfileSource::Profile`] is rendered to a temp file that is
    /// removed again whether or not the submission succeeds.
    pub fn add_profile(&self, source: impl Into<ProfileSource>) -> Result<()> {
        match source.into() {
            ProfileSource::XmlFile(path) => {
                let cmd = command::fill(Op::AddProfile, &path.display().to_string());
                invoke::run(&cmd)?;
            }
            ProfileSource::Profile(profile) => {
                let xml = ProfileXml::create(&profile)?;
                let cmd = command::fill(Op::AddProfile, &xml.path().display().to_string());
                // The guard lives across the call, so the temp file is
                // removed on the error path as well as on success.
                invoke::run(&cmd)?;
            }
        }
        Ok(())
    }

    /// Remove a profile from netsh (permanent).
    ///
    /// Deleting a name that is not in the current profile list is a no-op,
    /// not an error.
    pub fn delete_profile(&self, profile: impl Into<ProfileRef>) -> Result<()> {
        let name = match profile.into() {
            ProfileRef::Name(name) => name,
            ProfileRef::Profile(profile) => profile.name,
        };

        if !self.profiles()?.iter().any(|p| p == &name) {
            return Ok(());
        }

        invoke::run(&command::fill(Op::DeleteProfile, &name))?;
        Ok(())
    }

    /// Disconnect from whatever network is connected, if any.
    pub fn disconnect(&self) -> Result<()> {
        invoke::run(&command::command(Op::Disconnect))?;
        Ok(())
    }
}

/// Parse a `netsh wlan show profile ""` listing into profile names.
///
/// Harvests the trimmed right-hand value of every `" : "` line. The
/// listing's own labels ("All User Profile") sit left of the separator and
/// never appear in the result.
pub fn parse_profile_names(report: &str) -> Vec<String> {
    PROFILE_VALUE_RE
        .captures_iter(report)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
Profiles on interface Wi-Fi:

Group policy profiles (read only)
---------------------------------
    <None>

User profiles
-------------
    All User Profile     : HomeWifi
    All User Profile     : Office
    All User Profile     : Airport Guest
";

    #[test]
    fn profile_names_are_right_hand_values_in_order() {
        assert_eq!(
            parse_profile_names(LISTING),
            vec!["HomeWifi", "Office", "Airport Guest"]
        );
    }

    #[test]
    fn listing_without_profiles_yields_nothing() {
        let listing = "\
Profiles on interface Wi-Fi:

Group policy profiles (read only)
---------------------------------
    <None>

User profiles
-------------
    <None>
";
        assert!(parse_profile_names(listing).is_empty());
    }

    #[test]
    fn profile_ref_from_str_is_a_name() {
        assert!(matches!(ProfileRef::from("HomeWifi"), ProfileRef::Name(n) if n == "HomeWifi"));
    }

    #[test]
    fn profile_ref_from_profile_keeps_record() {
        let profile = Profile::new("HomeWifi");
        assert!(matches!(
            ProfileRef::from(profile),
            ProfileRef::Profile(p) if p.name == "HomeWifi"
        ));
    }
}
