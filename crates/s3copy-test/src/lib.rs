#![cfg_attr(feature = "aggressive_lint", deny(warnings))]

//! Helpers shared by the s3copy integration tests.

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::Client;
use aws_smithy_runtime::client::http::test_util::{capture_request, CaptureRequestReceiver};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

pub const TEST_BUCKET: &str = "s3copy-test";
pub const TEST_REGION: &str = "us-west-2";

static LOGGER: Lazy<()> = Lazy::new(|| {
    let _ = env_logger::builder().is_test(true).try_init();
});

/// Initialises `env_logger` once per test binary, honouring `RUST_LOG`.
pub fn init_logger() {
    Lazy::force(&LOGGER);
}

/// An S3 client which never touches the network. Every request it sends is handed to the
/// returned receiver and answered with an empty `200 OK`.
pub fn capturing_client() -> (Client, CaptureRequestReceiver) {
    init_logger();
    let (http_client, receiver) = capture_request(None);
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(Credentials::new(
            "ANOTREAL",
            "notrealrnrELgWzOk3IfjzDKtFBhDby",
            None,
            None,
            "s3copy-test",
        ))
        .http_client(http_client)
        .build();
    (Client::from_conf(config), receiver)
}

/// A fixed UTC timestamp, whole seconds so it survives the trip through S3's date formats.
pub fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid test date")
}
