//! Shared setup for integration test binaries.

#[ctor::ctor]
fn init_integration_logging() {
    backend::test_support::logging::init();
}
