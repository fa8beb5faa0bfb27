use win_wlan::{Authentication, Encryption, Profile};

const REFERENCE: &str = include_str!("fixtures/test_profile.xml");

#[test]
fn rendered_profile_matches_reference_xml() {
    let profile = Profile::new("TEST SSID")
        .with_name("TEST NAME")
        .with_security(Authentication::Wpa2Psk, Encryption::Aes)
        .with_password("testpassphrase");

    assert_eq!(profile.to_xml().unwrap(), REFERENCE);
}

#[test]
fn rendered_profile_carries_every_field() {
    let profile = Profile::new("TEST SSID")
        .with_name("TEST NAME")
        .with_security(Authentication::Wpa2Psk, Encryption::Aes)
        .with_password("testpassphrase");
    let xml = profile.to_xml().unwrap();

    assert!(xml.contains("<name>TEST NAME</name>"));
    assert!(xml.contains("<name>TEST SSID</name>"));
    assert!(xml.contains("<authentication>WPA2PSK</authentication>"));
    assert!(xml.contains("<encryption>AES</encryption>"));
    assert!(xml.contains("<keyMaterial>testpassphrase</keyMaterial>"));
}
