use std::{env, fs, path::Path};

use waylink_scanner::{generate_code, generate_interfaces, Side};

const PROTOCOL_XML: &str = "./protocols/wayland.xml";

fn main() {
    println!("cargo:rerun-if-changed={PROTOCOL_XML}");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR set by cargo");
    let out_dir = Path::new(&out_dir);
    let protocol_file = Path::new(PROTOCOL_XML);

    let interfaces = generate_interfaces(protocol_file).expect("generate core interfaces");
    fs::write(out_dir.join("wayland_interfaces.rs"), interfaces).expect("write interfaces module");

    if env::var_os("CARGO_FEATURE_CLIENT").is_some() {
        let client_code =
            generate_code(protocol_file, Side::Client).expect("generate client wrapper code");
        fs::write(out_dir.join("wayland_client_api.rs"), client_code)
            .expect("write client API module");
    }

    if env::var_os("CARGO_FEATURE_SERVER").is_some() {
        let server_code =
            generate_code(protocol_file, Side::Server).expect("generate server wrapper code");
        fs::write(out_dir.join("wayland_server_api.rs"), server_code)
            .expect("write server API module");
    }
}
