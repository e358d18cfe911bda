use std::fs::read_dir;

const PROTO_DIR: &str = "./src/protobuf";

fn main() {
    let proto_files: Vec<_> = read_dir(PROTO_DIR)
        .expect("not found")
        .filter_map(|file| {
            let file = file.ok()?;
            if file.file_name().to_str()?.ends_with(".proto") {
                Some(file.path())
            } else {
                None
            }
        })
        .collect();

    // client only, the verifier never serves the drand API
    tonic_build::configure()
        .build_server(false)
        .out_dir(PROTO_DIR)
        .compile(&proto_files, &["."])
        .unwrap_or_else(|err| panic!("protobuf compile error: {err}"));
    for proto_file in proto_files {
        println!("cargo:rerun-if-changed={}", proto_file.display());
    }
    println!("cargo:rerun-if-changed=build.rs");
}
