use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    // Prefer a protoc from the environment, fall back to the vendored binary
    if env::var_os("PROTOC").is_none() {
        env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }
    let well_known = protoc_bin_vendored::include_path()?;

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("todo_descriptor.bin"))
        .compile_protos(&["proto/todo.proto"], &[PathBuf::from("proto"), well_known])?;

    println!("cargo:rerun-if-changed=proto/todo.proto");
    println!("cargo:rerun-if-changed=migrations");

    Ok(())
}
