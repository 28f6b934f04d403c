fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_server(true)
        // Client stubs are exercised by the integration tests.
        .build_client(true)
        .compile_protos(
            &["../../proto/services/users.proto"],
            &["../../proto/services"],
        )?;
    Ok(())
}
