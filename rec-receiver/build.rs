use std::path::Path;
use std::{env, fs};

fn main() {
    let env_cargo_manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let env_profile = env::var("PROFILE").unwrap();

    let receiver_dir = Path::new(&env_cargo_manifest_dir);
    let workspace_dir = receiver_dir.parent().unwrap();

    // Default configuration lives next to the executable
    let exe_dir = workspace_dir.join("target").join(&env_profile);
    fs::create_dir_all(&exe_dir).unwrap();

    let deploy_dir = receiver_dir.join("deploy");
    println!("cargo:rerun-if-changed={}", deploy_dir.display());
    for file in deploy_dir.read_dir().unwrap() {
        let source = file.unwrap().path();
        if source.is_file() {
            println!("cargo:rerun-if-changed={}", source.display());
            fs::copy(&source, exe_dir.join(source.file_name().unwrap())).unwrap();
        }
    }
}
