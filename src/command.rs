//! Command templating for the netsh wlan utility.
//!
//! Every operation the library performs maps to a fixed command template.
//! The table is built once at process start and never modified afterwards;
//! templates with a `{}` slot are filled with a caller-supplied value via
//! [`fill`].
//!
//! Caller-supplied names are substituted as-is: characters with meaning to
//! the platform shell are neither escaped nor rejected, so callers must
//! avoid them.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Operations the library issues to netsh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ShowInterfaces,
    ShowNetworks,
    ShowProfiles,
    Connect,
    ConnectWith,
    Disconnect,
    AddProfile,
    DeleteProfile,
}

lazy_static! {
    static ref COMMANDS: HashMap<Op, &'static str> = {
        let mut table = HashMap::new();
        table.insert(Op::ShowInterfaces, "netsh wlan show interface");
        table.insert(Op::ShowNetworks, "netsh wlan show networks");
        // An empty name makes netsh list every profile instead of showing one.
        table.insert(Op::ShowProfiles, "netsh wlan show profile \"\"");
        table.insert(Op::Connect, "netsh wlan connect \"{}\"");
        // Free-form variant: the slot takes pre-flattened arguments rather
        // than a quoted profile name.
        table.insert(Op::ConnectWith, "netsh wlan connect {}");
        table.insert(Op::Disconnect, "netsh wlan disconnect");
        table.insert(Op::AddProfile, "netsh wlan add profile filename=\"{}\"");
        table.insert(Op::DeleteProfile, "netsh wlan delete profile \"{}\"");
        table
    };
}

/// Return the literal command line for an operation that takes no argument.
pub fn command(op: Op) -> String {
    COMMANDS[&op].to_string()
}

/// Fill an operation's `{}` slot with a caller-supplied value.
pub fn fill(op: Op, arg: &str) -> String {
    COMMANDS[&op].replacen("{}", arg, 1)
}

/// Flatten ordered key/value pairs into a single space-joined
/// `"k1 v1 k2 v2"` argument string, preserving slice order.
pub fn flatten_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{} {}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}
