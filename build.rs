fn main() {
    // SAFETY: single-threaded build script, set before any protoc lookup.
    unsafe { std::env::set_var("PROTOC", protobuf_src::protoc()) };
    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/account.proto"], &["proto"])
        .unwrap_or_else(|e| panic!("Failed to compile protos: {}", e));
}
