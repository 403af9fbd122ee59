use log::info;
use paystripe::logger::setup_logger;

#[test]
fn second_setup_reports_instead_of_panicking() {
    assert!(setup_logger().is_ok());
    info!("logger installed for this test binary");
    assert!(setup_logger().is_err());
}
