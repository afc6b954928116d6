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

use std::collections::HashMap;

use aws_sdk_s3::operation::copy_object::{builders::CopyObjectInputBuilder, CopyObjectInput};
use aws_sdk_s3::primitives::DateTime as SdkDateTime;
use aws_smithy_types_convert::date_time::DateTimeExt;
use chrono::{DateTime, Utc};
use derive_builder::Builder;

use crate::types::{
    to_sdk, ChecksumAlgorithm, MetadataDirective, ObjectCannedAcl, ObjectLockLegalHoldStatus,
    ObjectLockMode, RequestPayer, S3Location, ServerSideEncryption, StorageClass, Tag,
    TaggingDirective,
};

/// Parameters for a CopyObject call.
///
/// `bucket`, `key` and `copy_source` are the destination bucket, destination key and
/// `source-bucket/source-key` respectively; everything else is optional. Optional values
/// which are unset (or set to an empty string) are left off the request entirely, and
/// enumerations left at `Unspecified` let S3 apply its own default.
///
/// `tagging` and `tagging_tag_set` may be combined: the tag set is appended to the raw
/// tagging string, see [CopyObjectRequest::tagging_header].
#[derive(Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into))]
pub struct CopyObjectRequest {
    pub bucket: String,
    pub key: String,
    pub copy_source: String,

    pub acl: ObjectCannedAcl,
    #[builder(setter(into, strip_option))]
    pub bucket_key_enabled: Option<bool>,
    #[builder(setter(into, strip_option))]
    pub cache_control: Option<String>,
    pub checksum_algorithm: ChecksumAlgorithm,
    #[builder(setter(into, strip_option))]
    pub content_disposition: Option<String>,
    #[builder(setter(into, strip_option))]
    pub content_encoding: Option<String>,
    #[builder(setter(into, strip_option))]
    pub content_language: Option<String>,
    #[builder(setter(into, strip_option))]
    pub content_type: Option<String>,
    #[builder(setter(into, strip_option))]
    pub copy_source_if_match: Option<String>,
    #[builder(setter(into, strip_option))]
    pub copy_source_if_modified_since: Option<DateTime<Utc>>,
    #[builder(setter(into, strip_option))]
    pub copy_source_if_none_match: Option<String>,
    #[builder(setter(into, strip_option))]
    pub copy_source_if_unmodified_since: Option<DateTime<Utc>>,
    #[builder(setter(into, strip_option))]
    pub copy_source_sse_customer_algorithm: Option<String>,
    #[builder(setter(into, strip_option))]
    pub copy_source_sse_customer_key: Option<String>,
    #[builder(setter(into, strip_option))]
    pub copy_source_sse_customer_key_md5: Option<String>,
    #[builder(setter(into, strip_option))]
    pub expected_bucket_owner: Option<String>,
    #[builder(setter(into, strip_option))]
    pub expected_source_bucket_owner: Option<String>,
    #[builder(setter(into, strip_option))]
    pub expires: Option<DateTime<Utc>>,
    #[builder(setter(into, strip_option))]
    pub grant_full_control: Option<String>,
    #[builder(setter(into, strip_option))]
    pub grant_read: Option<String>,
    #[builder(setter(into, strip_option))]
    pub grant_read_acp: Option<String>,
    #[builder(setter(into, strip_option))]
    pub grant_write_acp: Option<String>,
    pub metadata: HashMap<String, String>,
    pub metadata_directive: MetadataDirective,
    pub object_lock_legal_hold_status: ObjectLockLegalHoldStatus,
    pub object_lock_mode: ObjectLockMode,
    #[builder(setter(into, strip_option))]
    pub object_lock_retain_until_date: Option<DateTime<Utc>>,
    pub request_payer: RequestPayer,
    #[builder(setter(into, strip_option))]
    pub sse_customer_algorithm: Option<String>,
    #[builder(setter(into, strip_option))]
    pub sse_customer_key: Option<String>,
    #[builder(setter(into, strip_option))]
    pub sse_customer_key_md5: Option<String>,
    #[builder(setter(into, strip_option))]
    pub ssekms_encryption_context: Option<String>,
    #[builder(setter(into, strip_option))]
    pub ssekms_key_id: Option<String>,
    pub server_side_encryption: ServerSideEncryption,
    pub storage_class: StorageClass,
    #[builder(setter(into, strip_option))]
    pub tagging: Option<String>,
    pub tagging_directive: TaggingDirective,
    #[builder(setter(into, strip_option))]
    pub website_redirect_location: Option<String>,

    /// Tags appended after `tagging`, each written as `key=value`.
    pub tagging_tag_set: Vec<Tag>,
}

impl CopyObjectRequest {
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        copy_source: impl Into<String>,
    ) -> CopyObjectRequest {
        CopyObjectRequest {
            bucket: bucket.into(),
            key: key.into(),
            copy_source: copy_source.into(),
            ..Default::default()
        }
    }

    /// A request copying `source` (at its version, if one is set) to `destination`.
    pub fn between(source: &S3Location, destination: &S3Location) -> CopyObjectRequest {
        CopyObjectRequest::new(
            destination.bucket.as_str(),
            destination.key.as_str(),
            source.copy_source(),
        )
    }

    pub fn builder() -> CopyObjectRequestBuilder {
        CopyObjectRequestBuilder::default()
    }

    /// The effective `x-amz-tagging` value: the raw `tagging` string followed by every entry
    /// of `tagging_tag_set`, joined with `&`. `None` when there is nothing to send.
    ///
    /// The raw string is not inspected, so pairs it already contains are sent as given.
    pub fn tagging_header(&self) -> Option<String> {
        let raw = self.tagging.iter().filter(|t| !t.is_empty()).cloned();
        let tags = raw
            .chain(self.tagging_tag_set.iter().map(Tag::to_string))
            .collect::<Vec<_>>()
            .join("&");
        non_empty(&tags)
    }

    /// Builds the SDK input for this request. Pure, so calling it repeatedly gives equal
    /// inputs.
    pub fn to_input(&self) -> CopyObjectInputBuilder {
        let metadata = if self.metadata.is_empty() {
            None
        } else {
            Some(self.metadata.clone())
        };

        CopyObjectInput::builder()
            .set_bucket(non_empty(&self.bucket))
            .set_key(non_empty(&self.key))
            .set_copy_source(non_empty(&self.copy_source))
            .set_acl(to_sdk(&self.acl))
            .set_bucket_key_enabled(self.bucket_key_enabled)
            .set_cache_control(optional(&self.cache_control))
            .set_checksum_algorithm(to_sdk(&self.checksum_algorithm))
            .set_content_disposition(optional(&self.content_disposition))
            .set_content_encoding(optional(&self.content_encoding))
            .set_content_language(optional(&self.content_language))
            .set_content_type(optional(&self.content_type))
            .set_copy_source_if_match(optional(&self.copy_source_if_match))
            .set_copy_source_if_modified_since(timestamp(&self.copy_source_if_modified_since))
            .set_copy_source_if_none_match(optional(&self.copy_source_if_none_match))
            .set_copy_source_if_unmodified_since(timestamp(&self.copy_source_if_unmodified_since))
            .set_copy_source_sse_customer_algorithm(optional(
                &self.copy_source_sse_customer_algorithm,
            ))
            .set_copy_source_sse_customer_key(optional(&self.copy_source_sse_customer_key))
            .set_copy_source_sse_customer_key_md5(optional(&self.copy_source_sse_customer_key_md5))
            .set_expected_bucket_owner(optional(&self.expected_bucket_owner))
            .set_expected_source_bucket_owner(optional(&self.expected_source_bucket_owner))
            .set_expires(timestamp(&self.expires))
            .set_grant_full_control(optional(&self.grant_full_control))
            .set_grant_read(optional(&self.grant_read))
            .set_grant_read_acp(optional(&self.grant_read_acp))
            .set_grant_write_acp(optional(&self.grant_write_acp))
            .set_metadata(metadata)
            .set_metadata_directive(to_sdk(&self.metadata_directive))
            .set_object_lock_legal_hold_status(to_sdk(&self.object_lock_legal_hold_status))
            .set_object_lock_mode(to_sdk(&self.object_lock_mode))
            .set_object_lock_retain_until_date(timestamp(&self.object_lock_retain_until_date))
            .set_request_payer(to_sdk(&self.request_payer))
            .set_sse_customer_algorithm(optional(&self.sse_customer_algorithm))
            .set_sse_customer_key(optional(&self.sse_customer_key))
            .set_sse_customer_key_md5(optional(&self.sse_customer_key_md5))
            .set_ssekms_encryption_context(optional(&self.ssekms_encryption_context))
            .set_ssekms_key_id(optional(&self.ssekms_key_id))
            .set_server_side_encryption(to_sdk(&self.server_side_encryption))
            .set_storage_class(to_sdk(&self.storage_class))
            .set_tagging(self.tagging_header())
            .set_tagging_directive(to_sdk(&self.tagging_directive))
            .set_website_redirect_location(optional(&self.website_redirect_location))
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(non_empty)
}

fn timestamp(value: &Option<DateTime<Utc>>) -> Option<SdkDateTime> {
    value.map(SdkDateTime::from_chrono_utc)
}
