//! Generates the Rust code that ties a Wayland protocol XML description to
//! `waylink-backend`'s wire codec and object engine.
//!
//! Unlike the historical `wayland-scanner` crate, which ran as a proc-macro invoked from
//! inside the generated module, this crate exposes plain functions meant to be called from a
//! `build.rs` script or from the `waylink-scanner-cli` binary. Each function takes the path to
//! a protocol XML file and returns the generated Rust source as a string.
//!
//! ```rust,ignore
//! let interfaces = waylink_scanner::generate_interfaces(Path::new("wayland.xml"))?;
//! let client_code = waylink_scanner::generate_code(Path::new("wayland.xml"), Side::Client)?;
//! std::fs::write(out_dir.join("interfaces.rs"), interfaces)?;
//! std::fs::write(out_dir.join("client.rs"), client_code)?;
//! ```

use std::{fs::File, io, path::Path};

mod client_gen;
mod common;
mod interfaces;
mod parse;
mod protocol;
mod server_gen;
mod util;

/// Which side of the protocol to generate the typed wrapper API for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    /// wayland client applications
    Client,
    /// wayland compositors
    Server,
}

/// A previously-generated protocol package whose interfaces may be referenced from this
/// protocol's object and new_id arguments.
#[derive(Debug, Clone)]
pub struct Import {
    /// Rust path under which the foreign package's per-interface modules live, e.g.
    /// `crate::xdg_shell` for modules generated as `crate::xdg_shell::xdg_wm_base::XdgWmBase`.
    pub module_path: String,
    /// Interface names, as they appear in the foreign XML's `interface` attributes, that this
    /// import provides.
    pub interfaces: Vec<String>,
    /// Common interface-name prefix that package was itself generated with, so its type names
    /// are reconstructed the same way here.
    pub prefix: Option<String>,
}

/// Generation options: the interface-name prefix to strip from this protocol's own type names,
/// and the foreign packages this protocol's messages may reference interfaces from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub prefix: Option<String>,
    pub imports: Vec<Import>,
}

/// Check that every interface an object/new_id argument points at is either declared locally or
/// covered by one of `config.imports`, aborting generation with a diagnostic otherwise.
fn resolve_foreign_interfaces(protocol: &protocol::Protocol, config: &Config) -> io::Result<()> {
    let local: std::collections::HashSet<&str> =
        protocol.interfaces.iter().map(|iface| iface.name.as_str()).collect();
    let unresolved = protocol
        .interfaces
        .iter()
        .flat_map(|iface| iface.requests.iter().chain(iface.events.iter()))
        .flat_map(|msg| msg.args.iter())
        .filter_map(|arg| arg.interface.as_deref())
        .find(|iface| {
            !local.contains(iface)
                && !config.imports.iter().any(|import| import.interfaces.iter().any(|i| i == iface))
        });
    match unresolved {
        Some(iface) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "interface `{iface}` is referenced but neither declared in this protocol nor provided by any import"
            ),
        )),
        None => Ok(()),
    }
}

fn open_and_parse(xml_path: &Path) -> io::Result<protocol::Protocol> {
    let file = File::open(xml_path)?;
    let protocol = parse::parse_stream(file);
    for interface in &protocol.interfaces {
        interface
            .destructor_sanitize()
            .map_err(|message| io::Error::new(io::ErrorKind::InvalidData, message))?;
    }
    Ok(protocol)
}

/// Generate the low-level `Interface` descriptor statics for every interface declared in
/// `xml_path`.
///
/// The returned source declares one `pub static FOO_INTERFACE: waylink_backend::protocol::Interface`
/// per `<interface>` element; it is typically placed in a private `__interfaces` submodule
/// that the typed wrapper code generated by [`generate_code`] depends on.
pub fn generate_interfaces(xml_path: &Path) -> io::Result<String> {
    generate_interfaces_with(xml_path, &Config::default())
}

/// Like [`generate_interfaces`], but resolving object/new_id interface references against
/// `config.imports` and aborting with a diagnostic if one is unresolved.
pub fn generate_interfaces_with(xml_path: &Path, config: &Config) -> io::Result<String> {
    let protocol = open_and_parse(xml_path)?;
    resolve_foreign_interfaces(&protocol, config)?;
    Ok(interfaces::generate(&protocol).to_string())
}

/// Generate the typed client or server wrapper API for the protocol described in `xml_path`.
pub fn generate_code(xml_path: &Path, side: Side) -> io::Result<String> {
    generate_code_with(xml_path, side, &Config::default())
}

/// Like [`generate_code`], but stripping `config.prefix` from this protocol's own type names and
/// qualifying object/new_id references to `config.imports`' interfaces against their module
/// paths instead of assuming a sibling module.
pub fn generate_code_with(xml_path: &Path, side: Side, config: &Config) -> io::Result<String> {
    let protocol = open_and_parse(xml_path)?;
    resolve_foreign_interfaces(&protocol, config)?;
    let tokens = match side {
        Side::Client => client_gen::generate_client_objects(&protocol, config),
        Side::Server => server_gen::generate_server_objects(&protocol, config),
    };
    Ok(tokens.to_string())
}

/// Read a foreign protocol XML file's protocol name and the interface names it declares, so a
/// caller can build an [`Import`] for it without regenerating its code.
pub fn protocol_interfaces(xml_path: &Path) -> io::Result<(String, Vec<String>)> {
    let protocol = open_and_parse(xml_path)?;
    Ok((protocol.name, protocol.interfaces.into_iter().map(|iface| iface.name).collect()))
}

#[cfg(test)]
fn format_rust_code(code: &str) -> String {
    use std::{
        io::Write,
        process::{Command, Stdio},
    };
    if let Ok(mut proc) = Command::new("rustfmt")
        .arg("--emit=stdout")
        .arg("--edition=2021")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
    {
        {
            let stdin = proc.stdin.as_mut().unwrap();
            stdin.write_all(code.as_bytes()).unwrap();
        }
        if let Ok(output) = proc.wait_with_output() {
            if output.status.success() {
                return std::str::from_utf8(&output.stdout).unwrap().to_owned();
            }
        }
    }
    panic!("Rustfmt failed!");
}
