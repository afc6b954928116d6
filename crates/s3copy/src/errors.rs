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

pub use std::error::Error as StdError;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type produced by the transport behind [crate::CopyObjectClient].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{operation} failed: {source}")]
    OperationFailed {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("failed to parse config from environment: {0}")]
    Config(#[from] envy::Error),

    #[error("invalid s3 location: {0}")]
    InvalidS3Location(String),
}

impl Error {
    /// Annotates a transport failure with the name of the S3 operation that produced it.
    pub fn operation_failed(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Error::OperationFailed {
            operation,
            source: source.into(),
        }
    }

    /// The S3 operation name, if this error came from a failed request.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Error::OperationFailed { operation, .. } => Some(operation),
            _ => None,
        }
    }
}
