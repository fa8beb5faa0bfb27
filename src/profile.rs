//! Connection profile records and WLAN profile XML generation.
//!
//! A [`Profile`] describes one connection: display name, SSID,
//! authentication, encryption, and password. Submitting a profile to netsh
//! requires it on disk as WLAN profile XML, so [`ProfileXml`] renders the
//! embedded template to a temp file and removes the file again when
//! dropped. Holding the guard across the `netsh wlan add profile` call
//! guarantees the file is gone on every exit path.
//!
//! Field values are substituted into the template verbatim; nothing is
//! XML-escaped.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;

use crate::error::WinWlanError;

const PROFILE_TEMPLATE: &str = include_str!("../templates/profile.xml");

lazy_static! {
    static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();
        tera.add_raw_template("profile.xml", PROFILE_TEMPLATE)
            .expect("embedded profile template parses");
        tera.autoescape_on(vec![]);
        tera
    };
}

/// Authentication methods accepted in a WLAN profile, with the exact
/// spelling netsh expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Authentication {
    Open,
    Shared,
    Wpa,
    WpaPsk,
    Wpa2,
    Wpa2Psk,
}

impl Authentication {
    pub fn as_str(self) -> &'static str {
        match self {
            Authentication::Open => "open",
            Authentication::Shared => "shared",
            Authentication::Wpa => "WPA",
            Authentication::WpaPsk => "WPAPSK",
            Authentication::Wpa2 => "WPA2",
            Authentication::Wpa2Psk => "WPA2PSK",
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encryption ciphers accepted in a WLAN profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Encryption {
    None,
    Wep,
    Tkip,
    Aes,
}

impl Encryption {
    pub fn as_str(self) -> &'static str {
        match self {
            Encryption::None => "none",
            Encryption::Wep => "WEP",
            Encryption::Tkip => "TKIP",
            Encryption::Aes => "AES",
        }
    }
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_AUTHENTICATION: Authentication = Authentication::Wpa2Psk;
pub const DEFAULT_ENCRYPTION: Encryption = Encryption::Aes;

/// A named connection descriptor.
///
/// `new` defaults the display name to the SSID; the builder methods refine
/// the rest. Profiles are plain input values, never tracked state: the set
/// of profiles netsh knows is always re-fetched, not cached here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub ssid: String,
    pub authentication: String,
    pub encryption: String,
    pub password: String,
}

impl Profile {
    pub fn new(ssid: &str) -> Self {
        Profile {
            name: ssid.to_string(),
            ssid: ssid.to_string(),
            authentication: String::new(),
            encryption: String::new(),
            password: String::new(),
        }
    }

    /// Override the display name (defaults to the SSID).
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_security(mut self, authentication: Authentication, encryption: Encryption) -> Self {
        self.authentication = authentication.as_str().to_string();
        self.encryption = encryption.as_str().to_string();
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    /// Render this profile as WLAN profile XML.
    ///
    /// All five fields are substituted into the template exactly as given.
    pub fn to_xml(&self) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("name", &self.name);
        context.insert("ssid", &self.ssid);
        context.insert("authentication", &self.authentication);
        context.insert("encryption", &self.encryption);
        context.insert("password", &self.password);

        let xml = TEMPLATES
            .render("profile.xml", &context)
            .map_err(WinWlanError::Template)?;
        Ok(xml)
    }
}

/// A profile rendered to a temp file, removed again on drop.
///
/// The file lives at `<temp dir>/<profile name>.xml` for exactly as long
/// as the guard does, so the netsh call that consumes it can never leave
/// it behind.
#[derive(Debug)]
pub struct ProfileXml {
    path: PathBuf,
}

impl ProfileXml {
    /// Render `profile` and write it to the temp directory.
    pub fn create(profile: &Profile) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("{}.xml", profile.name));
        let xml = profile.to_xml()?;
        fs::write(&path, xml)
            .with_context(|| format!("Failed to write profile XML: {}", path.display()))?;
        Ok(ProfileXml { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ProfileXml {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_defaults_to_ssid() {
        let profile = Profile::new("test_ssid_01");
        assert_eq!(profile.name, profile.ssid);
        assert_eq!(profile.name, "test_ssid_01");
    }

    #[test]
    fn explicit_name_is_kept() {
        let profile = Profile::new("test_ssid_01").with_name("test network");
        assert_eq!(profile.name, "test network");
        assert_eq!(profile.ssid, "test_ssid_01");
    }

    #[test]
    fn security_builder_uses_netsh_spellings() {
        let profile = Profile::new("net").with_security(Authentication::Wpa2Psk, Encryption::Aes);
        assert_eq!(profile.authentication, "WPA2PSK");
        assert_eq!(profile.encryption, "AES");
    }

    #[test]
    fn xml_fields_are_substituted_verbatim() {
        let profile = Profile::new("a<b")
            .with_security(DEFAULT_AUTHENTICATION, DEFAULT_ENCRYPTION)
            .with_password("pass&word");
        let xml = profile.to_xml().unwrap();
        assert!(xml.contains("<name>a<b</name>"));
        assert!(xml.contains("<keyMaterial>pass&word</keyMaterial>"));
    }

    #[test]
    fn guard_removes_file_on_drop() {
        let profile = Profile::new("win-wlan guard test")
            .with_security(DEFAULT_AUTHENTICATION, DEFAULT_ENCRYPTION)
            .with_password("testpassphrase");

        let path = {
            let xml = ProfileXml::create(&profile).unwrap();
            assert!(xml.path().exists());
            xml.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
