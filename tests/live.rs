//! Round-trip tests against a live netsh. They mutate the machine's saved
//! profiles, so they only run when asked for explicitly on a Windows host
//! with a wireless adapter: `cargo test -- --ignored`.
#![cfg(windows)]

use win_wlan::{Authentication, Encryption, Profile, ProfileXml, Wifi};

fn test_profile() -> Profile {
    Profile::new("TEST SSID")
        .with_name("TEST NAME")
        .with_security(Authentication::Wpa2Psk, Encryption::Aes)
        .with_password("testpassphrase")
}

#[test]
#[ignore = "requires a Windows host with netsh"]
fn add_and_delete_profile_round_trip() {
    let wifi = Wifi::new();
    let profile = test_profile();

    wifi.add_profile(profile.clone()).unwrap();
    assert!(wifi.profiles().unwrap().contains(&profile.name));

    // Delete with the full record
    wifi.delete_profile(profile.clone()).unwrap();
    assert!(!wifi.profiles().unwrap().contains(&profile.name));
}

#[test]
#[ignore = "requires a Windows host with netsh"]
fn add_by_file_and_delete_by_name() {
    let wifi = Wifi::new();
    let profile = test_profile();

    let xml = ProfileXml::create(&profile).unwrap();
    wifi.add_profile(xml.path().to_path_buf()).unwrap();
    assert!(wifi.profiles().unwrap().contains(&profile.name));

    // Delete with the plain name string
    wifi.delete_profile(profile.name.as_str()).unwrap();
    assert!(!wifi.profiles().unwrap().contains(&profile.name));
}

#[test]
#[ignore = "requires a Windows host with netsh"]
fn deleting_absent_profile_is_a_noop() {
    let wifi = Wifi::new();
    assert!(wifi.delete_profile("win-wlan absent profile").is_ok());
}

#[test]
#[ignore = "requires a Windows host with netsh"]
fn interface_query_returns_a_snapshot() {
    let iface = Wifi::new().interface().unwrap();
    assert!(iface.name.is_some());
    assert!(iface.state.is_some());
}
