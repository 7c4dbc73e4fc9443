/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2024 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::server_address::ServerAddressParseError::{
    EmptyHost, InvalidPort, InvalidString, UriUnsupported,
};

/// A [`ServerAddress`] is the `host:port` endpoint of the CLI server, e.g.
/// `127.0.0.1:18716`.
///
/// Both parts are required: the dialer always needs a port, and when a
/// logical node name is resolved only the host is substituted. It is distinct
/// from a URI because we never want a scheme, path or anything else here.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ServerAddress {
    host: String,
    port: u16,
}

impl ServerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The same endpoint with the host swapped out, keeping the configured
    /// port. Used when a logical node name resolves to an address.
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: self.port,
        }
    }
}

impl FromStr for ServerAddress {
    type Err = ServerAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains("://") {
            return Err(UriUnsupported);
        }

        match s.split(":").collect::<Vec<_>>().as_slice() {
            [h, p] => {
                let p = p.parse::<u16>().map_err(|_| InvalidPort(p.to_string()))?;

                if h.is_empty() {
                    Err(EmptyHost)
                } else {
                    Ok(ServerAddress::new(h.to_string(), p))
                }
            }
            _ => Err(InvalidString),
        }
    }
}

impl Display for ServerAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl Serialize for ServerAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl<'de> Deserialize<'de> for ServerAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ServerAddressVisitor)
    }
}

struct ServerAddressVisitor;
impl Visitor<'_> for ServerAddressVisitor {
    type Value = ServerAddress;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "A host:port string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v)
            .map_err(|e| serde::de::Error::custom(format!("Invalid server address: {e}")))
    }
}

#[derive(thiserror::Error, PartialEq, Eq, Debug)]
pub enum ServerAddressParseError {
    #[error("is a URI, only host:port strings are supported")]
    UriUnsupported,
    #[error("host part is empty")]
    EmptyHost,
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Invalid string")]
    InvalidString,
}
