pub use hexgrid_test_macros::test;
use std::sync::Once;

static INIT: Once = Once::new();

/// Test setup executed before each test.
pub fn setup_test() {
    INIT.call_once(|| {
        color_backtrace::install();
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .try_init();
        log::trace!("test logger initialized");
    });
}
