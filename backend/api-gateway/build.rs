fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_client(true)
        // Server stubs back the in-process mocks in the integration tests.
        .build_server(true)
        .compile_protos(
            &["../../proto/services/users.proto"],
            &["../../proto/services"],
        )?;
    Ok(())
}
