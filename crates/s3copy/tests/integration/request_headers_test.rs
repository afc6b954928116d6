use std::collections::HashMap;

use s3copy::types::{MetadataDirective, ObjectCannedAcl, ServerSideEncryption, StorageClass};
use s3copy::{CopyObjectRequest, CopyObjectResult, S3Location, Tag};

#[tokio::test]
async fn test_copy_object_request_headers() {
    let (s3client, receiver) = s3copy_test::capturing_client();

    let mut metadata = HashMap::new();
    metadata.insert("owner".to_string(), "ci".to_string());
    let request = CopyObjectRequest {
        acl: ObjectCannedAcl::BucketOwnerFullControl,
        content_type: Some("text/plain".into()),
        copy_source_if_modified_since: Some(s3copy_test::timestamp(2024, 3, 1)),
        metadata,
        metadata_directive: MetadataDirective::Replace,
        server_side_encryption: ServerSideEncryption::Aes256,
        storage_class: StorageClass::GlacierInstantRetrieval,
        tagging: Some("a=1".into()),
        tagging_tag_set: vec![Tag::new("b", "2"), Tag::new("c", "3")],
        ..CopyObjectRequest::new(
            s3copy_test::TEST_BUCKET,
            "dest/key.txt",
            "source-bucket/src/key.txt",
        )
    };

    // The canned reply is an empty 200, which carries no response fields.
    let result = s3copy::copy_object(&s3client, request).await;
    assert_eq!(
        result.expect("empty reply is a successful copy"),
        CopyObjectResult::default()
    );

    let http_request = receiver.expect_request();
    let headers = http_request.headers();
    assert!(http_request.uri().contains("dest/key.txt"));
    assert_eq!(
        headers.get("x-amz-copy-source"),
        Some("source-bucket/src/key.txt")
    );
    assert_eq!(headers.get("x-amz-tagging"), Some("a=1&b=2&c=3"));
    assert_eq!(headers.get("x-amz-storage-class"), Some("GLACIER_IR"));
    assert_eq!(headers.get("x-amz-acl"), Some("bucket-owner-full-control"));
    assert_eq!(headers.get("x-amz-metadata-directive"), Some("REPLACE"));
    assert_eq!(headers.get("x-amz-server-side-encryption"), Some("AES256"));
    assert_eq!(headers.get("x-amz-meta-owner"), Some("ci"));
    assert_eq!(headers.get("content-type"), Some("text/plain"));
    assert_eq!(
        headers.get("x-amz-copy-source-if-modified-since"),
        Some("Fri, 01 Mar 2024 00:00:00 GMT")
    );
}

#[tokio::test]
async fn test_copy_object_omits_unset_headers() {
    let (s3client, receiver) = s3copy_test::capturing_client();
    let request = CopyObjectRequest {
        cache_control: Some(String::new()),
        ..CopyObjectRequest::new(s3copy_test::TEST_BUCKET, "dest/key.txt", "src/key.txt")
    };

    let result = s3copy::copy_object(&s3client, request).await;
    assert!(result.is_ok());

    let http_request = receiver.expect_request();
    let headers = http_request.headers();
    assert!(headers.get("x-amz-tagging").is_none());
    assert!(headers.get("x-amz-storage-class").is_none());
    assert!(headers.get("x-amz-acl").is_none());
    assert!(headers.get("x-amz-tagging-directive").is_none());
    assert!(headers.get("cache-control").is_none());
    assert!(headers.get("x-amz-copy-source-if-modified-since").is_none());
}

#[tokio::test]
async fn test_copy_object_versioned_source_header() {
    let (s3client, receiver) = s3copy_test::capturing_client();
    let source: S3Location = "s3://source-bucket/dir/a b?c.txt?versionId=v1".parse().unwrap();
    let destination = S3Location::new(s3copy_test::TEST_BUCKET, "dest/key.txt");

    let result = s3copy::copy_object(&s3client, CopyObjectRequest::between(&source, &destination)).await;
    assert!(result.is_ok());

    let http_request = receiver.expect_request();
    assert_eq!(
        http_request.headers().get("x-amz-copy-source"),
        Some("source-bucket/dir/a%20b%3Fc.txt?versionId=v1")
    );
}
