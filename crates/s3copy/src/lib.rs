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

#![cfg_attr(feature = "aggressive_lint", deny(warnings))]

//! A typed adapter over the S3 CopyObject operation.
//!
//! [CopyObjectRequest] is a flat description of the copy which is mapped onto the SDK's
//! input, and [CopyObjectResult] is the flattened response. Requests go through any
//! [CopyObjectClient], normally an [aws_sdk_s3::Client] from [new_client].

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod errors;
pub mod types;

mod client;
mod config;
mod ops;
mod request;
mod result;

pub use client::{new_client, Client, CopyObjectClient};
pub use config::Config;
pub use errors::{Error, Result};
pub use ops::copy::copy_object;
pub use request::{CopyObjectRequest, CopyObjectRequestBuilder, CopyObjectRequestBuilderError};
pub use result::CopyObjectResult;
pub use types::{S3Location, Tag};
