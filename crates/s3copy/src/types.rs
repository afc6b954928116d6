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

//! Closed sets of the enumerated values accepted and returned by CopyObject.
//!
//! Every enumeration carries an `Unspecified` variant, which is the default and
//! which maps to "not set" on the SDK input. The string form of each variant is
//! the S3 wire value.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum ObjectCannedAcl {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "private")]
    Private,
    #[strum(serialize = "public-read")]
    PublicRead,
    #[strum(serialize = "public-read-write")]
    PublicReadWrite,
    #[strum(serialize = "authenticated-read")]
    AuthenticatedRead,
    #[strum(serialize = "aws-exec-read")]
    AwsExecRead,
    #[strum(serialize = "bucket-owner-read")]
    BucketOwnerRead,
    #[strum(serialize = "bucket-owner-full-control")]
    BucketOwnerFullControl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum StorageClass {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "STANDARD")]
    Standard,
    #[strum(serialize = "REDUCED_REDUNDANCY")]
    ReducedRedundancy,
    #[strum(serialize = "STANDARD_IA")]
    StandardIA,
    #[strum(serialize = "ONEZONE_IA")]
    OneZoneIA,
    #[strum(serialize = "INTELLIGENT_TIERING")]
    IntelligentTiering,
    #[strum(serialize = "GLACIER")]
    GlacierFlexibleRetrieval,
    #[strum(serialize = "GLACIER_IR")]
    GlacierInstantRetrieval,
    #[strum(serialize = "DEEP_ARCHIVE")]
    GlacierDeepArchive,
    #[strum(serialize = "OUTPOSTS")]
    Outposts,
    #[strum(serialize = "SNOW")]
    Snow,
    #[strum(serialize = "EXPRESS_ONEZONE")]
    ExpressOneZone,
}

/// Also returned by S3, so values this crate does not know are kept in `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, EnumString)]
pub enum ServerSideEncryption {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "AES256")]
    Aes256,
    #[strum(serialize = "aws:kms")]
    AwsKms,
    #[strum(serialize = "aws:kms:dsse")]
    AwsKmsDsse,
    #[strum(default)]
    Unknown(String),
}

impl AsRef<str> for ServerSideEncryption {
    fn as_ref(&self) -> &str {
        match self {
            ServerSideEncryption::Unspecified => "",
            ServerSideEncryption::Aes256 => "AES256",
            ServerSideEncryption::AwsKms => "aws:kms",
            ServerSideEncryption::AwsKmsDsse => "aws:kms:dsse",
            ServerSideEncryption::Unknown(value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum RequestPayer {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "requester")]
    Requester,
}

/// Only ever returned by S3; unrecognised values are kept in `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, EnumString)]
pub enum RequestCharged {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "requester")]
    Requester,
    #[strum(default)]
    Unknown(String),
}

impl AsRef<str> for RequestCharged {
    fn as_ref(&self) -> &str {
        match self {
            RequestCharged::Unspecified => "",
            RequestCharged::Requester => "requester",
            RequestCharged::Unknown(value) => value,
        }
    }
}

macro_rules! open_enum_conversions {
    ($($name:ident),*) => {$(
        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<&str> for $name {
            fn from(wire: &str) -> Self {
                $name::from_str(wire).unwrap_or_else(|_| $name::Unknown(wire.to_owned()))
            }
        }
    )*};
}

open_enum_conversions!(ServerSideEncryption, RequestCharged);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum ObjectLockMode {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "GOVERNANCE")]
    Governance,
    #[strum(serialize = "COMPLIANCE")]
    Compliance,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum ObjectLockLegalHoldStatus {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "ON")]
    On,
    #[strum(serialize = "OFF")]
    Off,
}

/// Whether the destination takes the source's metadata or the metadata in the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum MetadataDirective {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "COPY")]
    Copy,
    #[strum(serialize = "REPLACE")]
    Replace,
}

/// Whether the destination takes the source's tags or the tags in the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum TaggingDirective {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "COPY")]
    Copy,
    #[strum(serialize = "REPLACE")]
    Replace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, StrumDisplay, EnumString)]
pub enum ChecksumAlgorithm {
    #[default]
    #[strum(serialize = "")]
    Unspecified,
    #[strum(serialize = "CRC32")]
    Crc32,
    #[strum(serialize = "CRC32C")]
    Crc32C,
    #[strum(serialize = "SHA1")]
    Sha1,
    #[strum(serialize = "SHA256")]
    Sha256,
}

/// Converts one of the enumerations above into its SDK counterpart, `None` when unspecified.
pub(crate) fn to_sdk<E, T>(value: &E) -> Option<T>
where
    E: AsRef<str>,
    T: for<'a> From<&'a str>,
{
    let wire = value.as_ref();
    if wire.is_empty() {
        None
    } else {
        Some(T::from(wire))
    }
}

/// A single object tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Tag {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

static S3_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^s3://(?P<bucket>[^/]+)/(?P<key>.+?)(\?versionId=(?P<version>[^?]+))?$").unwrap()
});

/// Characters escaped in the key part of `x-amz-copy-source`: everything except the RFC 3986
/// unreserved set and `/`.
const COPY_SOURCE_KEY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// An object location written as `s3://bucket/key`, or `s3://bucket/key?versionId=id` when it
/// names a specific version. A key which itself ends in `?versionId=...` cannot be written
/// in this form without being read back as a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Location {
    pub bucket: String,
    pub key: String,
    pub version_id: Option<String>,
}

impl S3Location {
    pub fn new<S1: AsRef<str>, S2: AsRef<str>>(bucket: S1, key: S2) -> S3Location {
        S3Location {
            bucket: bucket.as_ref().into(),
            key: key.as_ref().into(),
            version_id: None,
        }
    }

    pub fn with_version_id(mut self, version_id: impl Into<String>) -> S3Location {
        self.version_id = Some(version_id.into());
        self
    }

    /// The value S3 expects in the `x-amz-copy-source` header when this location is the
    /// source of a copy. The key is URL-encoded, so a `?` inside it never reads as the
    /// version suffix.
    pub fn copy_source(&self) -> String {
        let key = utf8_percent_encode(&self.key, COPY_SOURCE_KEY);
        match &self.version_id {
            Some(version_id) => format!("{}/{}?versionId={}", self.bucket, key, version_id),
            None => format!("{}/{}", self.bucket, key),
        }
    }
}

impl FromStr for S3Location {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let captures = S3_FORMAT
            .captures(s)
            .ok_or_else(|| Error::InvalidS3Location(s.to_string()))?;
        let bucket = captures
            .name("bucket")
            .ok_or_else(|| Error::InvalidS3Location("s3 bucket not found".into()))?
            .as_str();
        let key = captures
            .name("key")
            .ok_or_else(|| Error::InvalidS3Location("s3 key not found".into()))?
            .as_str();
        let location = S3Location::new(bucket, key);
        match captures.name("version") {
            Some(version) => Ok(location.with_version_id(version.as_str())),
            None => Ok(location),
        }
    }
}

impl Display for S3Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)?;
        if let Some(version_id) = &self.version_id {
            write!(f, "?versionId={}", version_id)?;
        }
        Ok(())
    }
}

impl Serialize for S3Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for S3Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        S3Location::from_str(&s).map_err(serde::de::Error::custom)
    }
}
