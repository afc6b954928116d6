use s3copy::Config;

#[tokio::test]
async fn test_new_client_uses_config() {
    let config = Config::from_vars(vec![
        ("S3COPY_REGION", "eu-central-1"),
        ("S3COPY_ENDPOINT_URL", "http://localhost:9000"),
        ("S3COPY_FORCE_PATH_STYLE", "true"),
    ])
    .unwrap();

    let s3client = s3copy::new_client(&config).await;
    let region = s3client.config().region().map(|r| r.as_ref().to_string());
    assert_eq!(region.as_deref(), Some("eu-central-1"));
}
