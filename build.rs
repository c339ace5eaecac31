use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        // the app falls back to built-in defaults
        return;
    }

    // OUT_DIR is target/<profile>/build/<pkg>/out; the executable lives three levels up
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    fs::copy(config_path, target_dir.join("config.toml")).expect("failed to copy config.toml");
}
