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
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::{Name, TokioAsyncResolver};

use crate::node_resolver::read_resolv_conf;

const DEFAULT_PORT: u16 = 53;
const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

#[derive(thiserror::Error, Debug)]
pub enum ResolverError {
    #[error("Could not read resolv.conf at {path}: {error}")]
    CouldNotReadResolvConf { path: PathBuf, error: io::Error },
    #[error("Could not parse resolv.conf at {path}: {error}")]
    CouldNotParseResolvConf {
        path: PathBuf,
        error: resolv_conf::ParseError,
    },
    #[error("Error resolving host {string}: {error}")]
    InvalidHostString {
        string: String,
        error: hickory_resolver::proto::error::ProtoError,
    },
    #[error("Error looking up node {node}: {error}")]
    LookupFailed {
        node: String,
        error: hickory_resolver::error::ResolveError,
    },
    #[error("Node {node} does not resolve to an IPv4 address")]
    NoIpv4Address { node: String },
}

/// Maps a logical node name to the IPv4 address its CLI server listens on.
///
/// The dispatcher consults this only when a node name is configured; tests
/// substitute a recording fake so no DNS traffic is needed.
#[async_trait::async_trait]
pub trait NodeAddressResolver: Send + Sync {
    async fn ipv4_of_node(&self, node: &str) -> Result<Ipv4Addr, ResolverError>;
}

/// Resolves node names through the nameservers of the system resolv.conf.
pub struct DnsNodeResolver {
    resolver: TokioAsyncResolver,
}

impl DnsNodeResolver {
    pub fn from_system_conf() -> Result<Self, ResolverError> {
        Self::from_resolv_conf(Path::new(RESOLV_CONF_PATH))
    }

    pub fn from_resolv_conf(path: &Path) -> Result<Self, ResolverError> {
        let parsed = read_resolv_conf(path)?;
        let (config, opts) = into_resolver_config(parsed)?;
        Ok(Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        })
    }
}

#[async_trait::async_trait]
impl NodeAddressResolver for DnsNodeResolver {
    async fn ipv4_of_node(&self, node: &str) -> Result<Ipv4Addr, ResolverError> {
        let lookup =
            self.resolver
                .ipv4_lookup(node)
                .await
                .map_err(|error| ResolverError::LookupFailed {
                    node: node.to_string(),
                    error,
                })?;

        lookup
            .iter()
            .next()
            .map(|a| a.0)
            .ok_or_else(|| ResolverError::NoIpv4Address {
                node: node.to_string(),
            })
    }
}

pub fn into_resolver_config(
    parsed_config: resolv_conf::Config,
) -> Result<(ResolverConfig, ResolverOpts), ResolverError> {
    let domain = match parsed_config.get_domain() {
        Some(domain) => Some(Name::from_str(domain.as_str()).map_err(|error| {
            ResolverError::InvalidHostString {
                string: domain.to_string(),
                error,
            }
        })?),
        None => None,
    };

    let ips: Vec<IpAddr> = parsed_config
        .get_nameservers_or_local()
        .into_iter()
        .map(|scoped_ip| -> IpAddr { scoped_ip.into() })
        .collect();

    let nameservers = NameServerConfigGroup::from_ips_clear(&ips, DEFAULT_PORT, false);

    if nameservers.is_empty() {
        tracing::warn!("no nameservers found in config");
    }

    let mut search_domain = vec![];
    for search in parsed_config.get_last_search_or_domain() {
        // Ignore invalid search domains
        if search == "--" {
            continue;
        }

        search_domain.push(Name::from_str_relaxed(search).map_err(|error| {
            ResolverError::InvalidHostString {
                string: search.to_string(),
                error,
            }
        })?);
    }

    Ok((
        ResolverConfig::from_parts(domain, search_domain, nameservers),
        ResolverOpts::default(),
    ))
}
