/*
 * Copyright (C) 2026 Swift Navigation Inc.
 * Contact: Swift Navigation <dev@swiftnav.com>
 *
 * This source is subject to the license found in the file 'LICENSE' which must
 * be be distributed together with this source. All other rights reserved.
 *
 * THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
 * EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
 * WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
 */

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::copy_object::{builders::CopyObjectInputBuilder, CopyObjectOutput};
use aws_types::region::Region;
use log::debug;

use crate::errors::BoxError;
use crate::Config;

pub use aws_sdk_s3::Client;

/// The transport behind [crate::copy_object]. Owns signing, serialization, connection
/// handling and retries; implemented for [aws_sdk_s3::Client].
#[async_trait]
pub trait CopyObjectClient: Send + Sync {
    async fn copy_object(
        &self,
        input: CopyObjectInputBuilder,
    ) -> std::result::Result<CopyObjectOutput, BoxError>;
}

#[async_trait]
impl CopyObjectClient for Client {
    async fn copy_object(
        &self,
        input: CopyObjectInputBuilder,
    ) -> std::result::Result<CopyObjectOutput, BoxError> {
        input.send_with(self).await.map_err(|e| match e {
            SdkError::ServiceError(error) => Box::new(error.into_err()) as BoxError,
            _ => DisplayErrorContext(&e).to_string().into(),
        })
    }
}

/// Creates an S3 client from the default AWS credential chain, applying the region,
/// endpoint and addressing style from `config`.
pub async fn new_client(config: &Config) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = config.region() {
        loader = loader.region(Region::new(region.to_owned()));
    }
    if let Some(endpoint_url) = config.endpoint_url() {
        debug!("using endpoint url: {}", endpoint_url);
        loader = loader.endpoint_url(endpoint_url);
    }
    let sdk_config = loader.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.force_path_style())
        .build();
    Client::from_conf(s3_config)
}
