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

//! Configuration module for the library, controls how [crate::new_client] reaches S3.

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::errors::Result;

/// Prefix of the environment variables read by [Config::global()].
pub const ENV_PREFIX: &str = "S3COPY_";

/// Holds configuration information for the library.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    endpoint_url: Option<String>,
    #[serde(default)]
    force_path_style: ForcePathStyle,
}

/// Wrapper type which allows [Config::force_path_style()] to bind a default value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
struct ForcePathStyle(bool);

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Fetches the global config object, values are either defaulted or populated
    /// from the environment:
    ///
    /// - `S3COPY_REGION` - [Config::region()]
    /// - `S3COPY_ENDPOINT_URL` - [Config::endpoint_url()]
    /// - `S3COPY_FORCE_PATH_STYLE` - [Config::force_path_style()]
    pub fn global() -> Result<&'static Config> {
        CONFIG.get_or_try_init(Config::from_env)
    }

    /// Reads the config from the environment without caching it.
    pub fn from_env() -> Result<Config> {
        Ok(envy::prefixed(ENV_PREFIX).from_env::<Config>()?)
    }

    /// Reads the config from `(name, value)` pairs using the same names as the environment,
    /// e.g. `("S3COPY_REGION", "us-west-2")`. Names without the prefix are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Config>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars.into_iter().map(|(k, v)| (k.into(), v.into()));
        Ok(envy::prefixed(ENV_PREFIX).from_iter::<_, Config>(vars)?)
    }

    /// Region used for requests. When unset the AWS default provider chain decides.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Custom endpoint for S3 compatible services such as MinIO.
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Address buckets as `endpoint/bucket/key` rather than `bucket.endpoint/key`. Defaults
    /// to false.
    pub fn force_path_style(&self) -> bool {
        self.force_path_style.0
    }
}
