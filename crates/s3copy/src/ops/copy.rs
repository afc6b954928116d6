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

use log::info;
use log_derive::logfn;

use crate::client::CopyObjectClient;
use crate::errors::{Error, Result};
use crate::{CopyObjectRequest, CopyObjectResult};

pub(crate) const COPY_OBJECT: &str = "CopyObject";

/// Copy an object within S3, server side.
///
/// # Arguments
///
/// * `s3` - The S3 client object, see [crate::CopyObjectClient]
/// * `request` - Destination, source and options for the copy
///
/// # Errors
///
/// Any failure from the client is returned as [Error::OperationFailed] naming the
/// `CopyObject` operation. Nothing is retried here; retries belong to the client.
///
#[logfn(err = "ERROR")]
pub async fn copy_object<T>(s3: &T, request: CopyObjectRequest) -> Result<CopyObjectResult>
where
    T: CopyObjectClient,
{
    info!(
        "copy-object: bucket={}, key={}, copy_source={}",
        request.bucket, request.key, request.copy_source
    );

    let output = s3
        .copy_object(request.to_input())
        .await
        .map_err(|e| Error::operation_failed(COPY_OBJECT, e))?;

    Ok(CopyObjectResult::from(output))
}
