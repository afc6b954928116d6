use aws_sdk_s3::operation::copy_object::{CopyObjectError, CopyObjectOutput};
use aws_sdk_s3::primitives::DateTime as SdkDateTime;
use aws_sdk_s3::types::CopyObjectResult as SdkCopyObjectResult;

use s3copy::types::{StorageClass, TaggingDirective};
use s3copy::{CopyObjectRequest, CopyObjectResult, Error, S3Location, Tag};

use crate::mock::MockClient;

fn test_request() -> CopyObjectRequest {
    let source = S3Location::new(s3copy_test::TEST_BUCKET, "source/test_file.txt");
    let destination = S3Location::new(s3copy_test::TEST_BUCKET, "destination/test_file.txt");
    CopyObjectRequest {
        storage_class: StorageClass::StandardIA,
        tagging: Some("team=nav".into()),
        tagging_tag_set: vec![Tag::new("stage", "ci")],
        tagging_directive: TaggingDirective::Replace,
        ..CopyObjectRequest::between(&source, &destination)
    }
}

#[tokio::test]
async fn test_copy_object() {
    s3copy_test::init_logger();
    let last_modified = s3copy_test::timestamp(2024, 5, 17);
    let s3client = MockClient::replying(
        CopyObjectOutput::builder()
            .version_id("dest-version")
            .copy_object_result(
                SdkCopyObjectResult::builder()
                    .e_tag("\"8d777f385d3dfec8815d20f7496026dc\"")
                    .last_modified(SdkDateTime::from_secs(last_modified.timestamp()))
                    .build(),
            )
            .build(),
    );

    let result = s3copy::copy_object(&s3client, test_request()).await;
    let result = result.expect("copy_object failed");
    assert_eq!(result.version_id, "dest-version");
    assert_eq!(result.e_tag, "\"8d777f385d3dfec8815d20f7496026dc\"");
    assert_eq!(result.last_modified, Some(last_modified));

    let seen = s3client.seen();
    assert_eq!(seen.len(), 1);
    let input = &seen[0];
    assert_eq!(input.get_bucket().as_deref(), Some(s3copy_test::TEST_BUCKET));
    assert_eq!(input.get_key().as_deref(), Some("destination/test_file.txt"));
    assert_eq!(
        input.get_copy_source().as_deref(),
        Some("s3copy-test/source/test_file.txt")
    );
    assert_eq!(input.get_tagging().as_deref(), Some("team=nav&stage=ci"));
    assert_eq!(input, &test_request().to_input());
}

#[tokio::test]
async fn test_copy_object_empty_response() {
    let s3client = MockClient::replying(CopyObjectOutput::builder().build());
    let result = s3copy::copy_object(&s3client, test_request()).await;
    assert_eq!(result.unwrap(), CopyObjectResult::default());
}

#[tokio::test]
async fn test_copy_object_failure() {
    s3copy_test::init_logger();
    let s3client = MockClient::failing("object is archived");
    let result = s3copy::copy_object(&s3client, test_request()).await;

    let err = result.expect_err("copy_object should fail");
    assert!(err.to_string().contains("CopyObject"));
    assert_eq!(err.operation(), Some("CopyObject"));
    match err {
        Error::OperationFailed { source, .. } => {
            let service_err = source
                .downcast_ref::<CopyObjectError>()
                .expect("service error is passed through");
            assert!(service_err.is_object_not_in_active_tier_error());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(s3client.seen().len(), 1, "failures are not retried");
}

#[tokio::test]
async fn test_copy_object_concurrent() {
    let s3client = MockClient::replying(CopyObjectOutput::builder().version_id("v").build());
    let (a, b, c) = tokio::join!(
        s3copy::copy_object(&s3client, test_request()),
        s3copy::copy_object(&s3client, CopyObjectRequest::new("b", "k", "s/k")),
        s3copy::copy_object(&s3client, test_request()),
    );
    assert!(a.is_ok());
    assert!(b.is_ok());
    assert!(c.is_ok());
    assert_eq!(s3client.seen().len(), 3);
}
