/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tonic::Status;

use crate::errors::PosClientError;
use crate::node_resolver::{DnsNodeResolver, NodeAddressResolver};
use crate::protos::pos_cli as pb;
use crate::server_address::ServerAddress;

mod api;
mod provider;


pub use api::PosManagerApi;
pub use provider::{ConnectionProvider, DIAL_TIMEOUT, GrpcConnectionProvider};

/// Mounting or unmounting an array can legitimately take minutes, so these
/// two calls get fixed extended deadlines instead of the configured default.
pub const MOUNT_ARRAY_CMD_TIMEOUT: Duration = Duration::from_secs(600);
pub const UNMOUNT_ARRAY_CMD_TIMEOUT: Duration = Duration::from_secs(1800);

/// Request deadline used when the configuration does not override it.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
const DEFAULT_SERVER_PORT: u16 = 18716;

/// Process-wide configuration the dispatcher reads, passed in explicitly
/// instead of through ambient globals. Read-only for the duration of a call.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Address of the CLI server.
    pub server_address: ServerAddress,
    /// Logical node name. When set it is resolved to an IPv4 address before
    /// every call and replaces the host of `server_address`.
    pub node_name: Option<String>,
    /// Deadline for a single remote invocation, unless the operation carries
    /// a fixed override.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_address: ServerAddress::new(DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT),
            node_name: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Dispatches management operations to the CLI server: one dial, one unary
/// call, one connection release per operation. Calls share no state, so a
/// single client may be used from any number of tasks.
pub struct PosManagerClient<P = GrpcConnectionProvider> {
    config: ClientConfig,
    provider: P,
    resolver: Option<Arc<dyn NodeAddressResolver>>,
}

impl PosManagerClient {
    /// A client that dials the real CLI server and resolves node names
    /// through the system resolver.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            provider: GrpcConnectionProvider,
            resolver: None,
        }
    }
}

impl<P: ConnectionProvider> PosManagerClient<P> {
    /// A client over a custom transport and resolver.
    pub fn with_parts(
        config: ClientConfig,
        provider: P,
        resolver: Arc<dyn NodeAddressResolver>,
    ) -> Self {
        Self {
            config,
            provider,
            resolver: Some(resolver),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The address to dial for the next call. Resolution runs only when a
    /// node name is configured; the resolved host keeps the configured port.
    async fn server_address(&self) -> Result<ServerAddress, PosClientError> {
        let Some(node) = &self.config.node_name else {
            return Ok(self.config.server_address.clone());
        };

        let ip = match &self.resolver {
            Some(resolver) => resolver.ipv4_of_node(node).await?,
            None => {
                DnsNodeResolver::from_system_conf()?
                    .ipv4_of_node(node)
                    .await?
            }
        };

        Ok(self.config.server_address.with_host(ip.to_string()))
    }

    /// Dial once, call once. Resolution and dial failures abort before the
    /// invocation; invocation failures are logged and surfaced verbatim. The
    /// connection moves into the invocation future and is dropped on every
    /// exit path.
    async fn call<Req, Resp, F, Fut>(
        &self,
        request: Req,
        timeout: Duration,
        op: F,
    ) -> Result<Resp, PosClientError>
    where
        F: FnOnce(P::Api, tonic::Request<Req>) -> Fut,
        Fut: Future<Output = Result<tonic::Response<Resp>, Status>>,
    {
        let address = self.server_address().await?;

        let api = self
            .provider
            .provide_connection(&address)
            .await
            .map_err(PosClientError::ServerUnreachable)?;

        let mut request = tonic::Request::new(request);
        request.set_timeout(timeout);

        // The deadline travels with the request as grpc-timeout metadata, and
        // is enforced here as well in case the server ignores it.
        let result = match tokio::time::timeout(timeout, op(api, request)).await {
            Ok(result) => result,
            Err(_) => Err(Status::deadline_exceeded(format!(
                "no response from {address} within {timeout:?}"
            ))),
        };

        match result {
            Ok(response) => Ok(response.into_inner()),
            Err(status) => {
                tracing::error!(error = %status, "management request failed");
                Err(PosClientError::Rpc(status))
            }
        }
    }

    pub async fn start_telemetry(
        &self,
        request: pb::StartTelemetryRequest,
    ) -> Result<pb::StartTelemetryResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.start_telemetry(req).await }
        })
        .await
    }

    pub async fn stop_telemetry(
        &self,
        request: pb::StopTelemetryRequest,
    ) -> Result<pb::StopTelemetryResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.stop_telemetry(req).await }
        })
        .await
    }

    pub async fn set_telemetry_property(
        &self,
        request: pb::SetTelemetryPropertyRequest,
    ) -> Result<pb::SetTelemetryPropertyResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.set_telemetry_property(req).await }
        })
        .await
    }

    pub async fn get_telemetry_property(
        &self,
        request: pb::GetTelemetryPropertyRequest,
    ) -> Result<pb::GetTelemetryPropertyResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.get_telemetry_property(req).await }
        })
        .await
    }

    pub async fn create_subsystem(
        &self,
        request: pb::CreateSubsystemRequest,
    ) -> Result<pb::CreateSubsystemResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.create_subsystem(req).await }
        })
        .await
    }

    pub async fn delete_subsystem(
        &self,
        request: pb::DeleteSubsystemRequest,
    ) -> Result<pb::DeleteSubsystemResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.delete_subsystem(req).await }
        })
        .await
    }

    pub async fn list_subsystem(
        &self,
        request: pb::ListSubsystemRequest,
    ) -> Result<pb::ListSubsystemResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.list_subsystem(req).await }
        })
        .await
    }

    pub async fn subsystem_info(
        &self,
        request: pb::SubsystemInfoRequest,
    ) -> Result<pb::SubsystemInfoResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.subsystem_info(req).await }
        })
        .await
    }

    pub async fn add_listener(
        &self,
        request: pb::AddListenerRequest,
    ) -> Result<pb::AddListenerResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.add_listener(req).await }
        })
        .await
    }

    pub async fn create_transport(
        &self,
        request: pb::CreateTransportRequest,
    ) -> Result<pb::CreateTransportResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.create_transport(req).await }
        })
        .await
    }

    pub async fn mount_volume(
        &self,
        request: pb::MountVolumeRequest,
    ) -> Result<pb::MountVolumeResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.mount_volume(req).await }
        })
        .await
    }

    pub async fn mount_array(
        &self,
        request: pb::MountArrayRequest,
    ) -> Result<pb::MountArrayResponse, PosClientError> {
        self.call(request, MOUNT_ARRAY_CMD_TIMEOUT, |mut api, req| {
            async move { api.mount_array(req).await }
        })
        .await
    }

    pub async fn unmount_array(
        &self,
        request: pb::UnmountArrayRequest,
    ) -> Result<pb::UnmountArrayResponse, PosClientError> {
        self.call(request, UNMOUNT_ARRAY_CMD_TIMEOUT, |mut api, req| {
            async move { api.unmount_array(req).await }
        })
        .await
    }

    pub async fn list_wbt(
        &self,
        request: pb::ListWbtRequest,
    ) -> Result<pb::ListWbtResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.list_wbt(req).await }
        })
        .await
    }

    pub async fn wbt(&self, request: pb::WbtRequest) -> Result<pb::WbtResponse, PosClientError> {
        self.call(request, self.config.request_timeout, |mut api, req| {
            async move { api.wbt(req).await }
        })
        .await
    }
}
