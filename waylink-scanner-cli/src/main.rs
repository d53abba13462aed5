//! Command-line frontend for `waylink-scanner`.
//!
//! ```text
//! scanner <input.xml> [-i <import.xml>]* [-prefix <str>] [-mode client|server]
//! ```
//!
//! Reads a Wayland protocol XML file and writes the generated Rust source to stdout. `-i` names
//! a foreign protocol's own XML file (repeatable); its interfaces become importable from
//! `<input.xml>`'s object/new_id arguments, qualified against a module path derived from its
//! `<protocol name>` attribute (`foo_bar` -> `crate::foo_bar`) instead of `super::`. `-prefix`
//! strips a common interface-name prefix from generated type names; `-mode` selects the typed
//! wrapper shape, or is omitted to emit just the interface descriptors. The flags use a single
//! leading dash, matching the historical `wayland-scanner` CLI rather than clap's default
//! double-dash long options, so arguments are parsed by hand.

use std::{path::PathBuf, process::ExitCode};

use thiserror::Error;
use waylink_scanner::{generate_code_with, generate_interfaces_with, protocol_interfaces, Config, Import, Side};

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: scanner <input.xml> [-i <import.xml>]* [-prefix <str>] [-mode client|server]")]
    Usage,
    #[error("-i requires a path to a foreign protocol's XML file")]
    MissingImportValue,
    #[error("-prefix requires a value")]
    MissingPrefixValue,
    #[error("-mode requires a value")]
    MissingModeValue,
    #[error("unknown -mode `{0}`, expected `client` or `server`")]
    UnknownMode(String),
    #[error("unrecognized argument `{0}`")]
    UnrecognizedArgument(String),
    #[error("failed to read or parse import `{path}`: {source}")]
    ImportGeneration { path: PathBuf, #[source] source: std::io::Error },
    #[error("failed to read or parse `{path}`: {source}")]
    Generation { path: PathBuf, #[source] source: std::io::Error },
}

struct Args {
    input: PathBuf,
    imports: Vec<PathBuf>,
    prefix: Option<String>,
    mode: Option<Side>,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, CliError> {
    raw.next(); // argv[0]

    let mut input = None;
    let mut imports = Vec::new();
    let mut prefix = None;
    let mut mode = None;

    let mut raw = raw.peekable();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "-i" => {
                let value = raw.next().ok_or(CliError::MissingImportValue)?;
                imports.push(PathBuf::from(value));
            }
            "-prefix" => {
                let value = raw.next().ok_or(CliError::MissingPrefixValue)?;
                prefix = Some(value);
            }
            "-mode" => {
                let value = raw.next().ok_or(CliError::MissingModeValue)?;
                mode = Some(match value.as_str() {
                    "client" => Side::Client,
                    "server" => Side::Server,
                    _ => return Err(CliError::UnknownMode(value)),
                });
            }
            other if other.starts_with('-') => return Err(CliError::UnrecognizedArgument(other.to_owned())),
            other if input.is_none() => input = Some(PathBuf::from(other)),
            other => return Err(CliError::UnrecognizedArgument(other.to_owned())),
        }
    }

    Ok(Args { input: input.ok_or(CliError::Usage)?, imports, prefix, mode })
}

/// Turn the parsed `-i`/`-prefix` flags into a `Config`, reading each import's XML far enough to
/// learn its protocol name and interface list.
fn build_config(args: &Args) -> Result<Config, CliError> {
    let mut imports = Vec::with_capacity(args.imports.len());
    for import_path in &args.imports {
        let (protocol_name, interfaces) = protocol_interfaces(import_path)
            .map_err(|source| CliError::ImportGeneration { path: import_path.clone(), source })?;
        log::debug!(
            "importing {} interfaces from `{}` under module path `crate::{protocol_name}`",
            interfaces.len(),
            import_path.display(),
        );
        imports.push(Import {
            module_path: format!("crate::{protocol_name}"),
            interfaces,
            prefix: args.prefix.clone(),
        });
    }
    if let Some(prefix) = &args.prefix {
        log::debug!("stripping interface-name prefix `{prefix}` from generated type names");
    }
    Ok(Config { prefix: args.prefix.clone(), imports })
}

fn run(args: Args) -> Result<String, CliError> {
    let config = build_config(&args)?;

    let interfaces = generate_interfaces_with(&args.input, &config)
        .map_err(|source| CliError::Generation { path: args.input.clone(), source })?;

    let code = match args.mode {
        Some(side) => {
            let wrapper = generate_code_with(&args.input, side, &config)
                .map_err(|source| CliError::Generation { path: args.input.clone(), source })?;
            format!("{interfaces}\n{wrapper}")
        }
        None => interfaces,
    };

    Ok(code)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(code) => {
            println!("{code}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
