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

use aws_sdk_s3::operation::copy_object::CopyObjectOutput;
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::{DateTime, Utc};
use log::warn;

use crate::types::{RequestCharged, ServerSideEncryption};

/// The data returned from a copy object request. Fields S3 did not send are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyObjectResult {
    pub bucket_key_enabled: bool,
    pub copy_source_version_id: String,
    pub expiration: String,
    pub request_charged: RequestCharged,
    pub sse_customer_algorithm: String,
    pub sse_customer_key_md5: String,
    pub ssekms_encryption_context: String,
    pub ssekms_key_id: String,
    pub server_side_encryption: ServerSideEncryption,
    pub version_id: String,

    /// ETag of the newly written object.
    pub e_tag: String,
    pub last_modified: Option<DateTime<Utc>>,
}

impl CopyObjectResult {
    pub fn from_output(output: Option<CopyObjectOutput>) -> CopyObjectResult {
        let output = match output {
            Some(output) => output,
            None => return CopyObjectResult::default(),
        };

        let mut result = CopyObjectResult {
            bucket_key_enabled: output.bucket_key_enabled().unwrap_or_default(),
            copy_source_version_id: owned(output.copy_source_version_id()),
            expiration: owned(output.expiration()),
            sse_customer_algorithm: owned(output.sse_customer_algorithm()),
            sse_customer_key_md5: owned(output.sse_customer_key_md5()),
            ssekms_encryption_context: owned(output.ssekms_encryption_context()),
            ssekms_key_id: owned(output.ssekms_key_id()),
            version_id: owned(output.version_id()),
            ..Default::default()
        };

        if let Some(charged) = output.request_charged() {
            result.request_charged = RequestCharged::from(charged.as_str());
        }
        if let Some(sse) = output.server_side_encryption() {
            result.server_side_encryption = ServerSideEncryption::from(sse.as_str());
        }

        if let Some(copy_result) = output.copy_object_result() {
            result.e_tag = owned(copy_result.e_tag());
            result.last_modified = copy_result.last_modified().and_then(|last| {
                last.to_chrono_utc()
                    .map_err(|e| warn!("unexpected: unrepresentable last_modified: {}", e))
                    .ok()
            });
        }

        result
    }
}

impl From<CopyObjectOutput> for CopyObjectResult {
    fn from(output: CopyObjectOutput) -> Self {
        CopyObjectResult::from_output(Some(output))
    }
}

fn owned(value: Option<&str>) -> String {
    value.map(str::to_owned).unwrap_or_default()
}
