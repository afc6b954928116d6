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

use crate::client::CopyObjectClient;
use crate::{CopyObjectRequest, CopyObjectResult, Result};

/// Blocking form of [crate::copy_object], runs the request on its own tokio runtime.
///
/// Must not be called from within an async context.
#[tokio::main]
pub async fn copy_object<T>(s3: &T, request: CopyObjectRequest) -> Result<CopyObjectResult>
where
    T: CopyObjectClient,
{
    crate::copy_object(s3, request).await
}
