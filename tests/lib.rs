// Integration tests exercising the public API end to end. Unit tests that
// need access to internals live next to the code they test.

mod duration;
mod range;
mod year;

/// A type alias we use for tests.
///
/// Most tests here chain several fallible operations, so using `?` keeps
/// them readable.
type Result = std::result::Result<(), calendrical::Error>;

/// Initializes a logger so that lenient resolution shows up in test output
/// when the `logging` feature is enabled.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
