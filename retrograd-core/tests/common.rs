use retrograd_core::tensor::{from_vec, Tensor};

// Installs env_logger once per test binary so RUST_LOG=trace shows the
// engine's debug/trace output.
#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_test_tensor(data: Vec<f64>, shape: Vec<usize>) -> Tensor {
    from_vec(data, shape).expect("Test tensor creation failed")
}
