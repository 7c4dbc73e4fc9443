/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::time::Duration;

use tonic::Status;
use tonic::transport::{Channel, Endpoint};

use crate::client::api::PosManagerApi;
use crate::protos::pos_cli::pos_cli_client::PosCliClient;
use crate::server_address::ServerAddress;

/// How long a dial to the CLI server may take before the call is abandoned.
pub const DIAL_TIMEOUT: Duration = Duration::from_secs(10);

/// A ConnectionProvider hands the dispatcher the connection for a single
/// management call. Every call dials fresh and the connection is dropped as
/// soon as the call finishes, so there is no staleness to track. This is the
/// seam a mock transport plugs into.
#[async_trait::async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// The connection type carrying the RPC methods this crate dispatches to.
    type Api: PosManagerApi + Send;

    /// Function which provides a connection to the given address.
    async fn provide_connection(&self, address: &ServerAddress) -> Result<Self::Api, Status>;
}

/// Dials the CLI server over plain HTTP/2 with the fixed dial timeout.
#[derive(Debug, Default)]
pub struct GrpcConnectionProvider;

#[async_trait::async_trait]
impl ConnectionProvider for GrpcConnectionProvider {
    type Api = PosCliClient<Channel>;

    async fn provide_connection(&self, address: &ServerAddress) -> Result<Self::Api, Status> {
        let endpoint = Endpoint::from_shared(format!("http://{address}"))
            .map_err(|e| Status::invalid_argument(format!("invalid CLI server address {address}: {e}")))?
            .connect_timeout(DIAL_TIMEOUT);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| Status::unavailable(e.to_string()))?;

        Ok(PosCliClient::new(channel))
    }
}
