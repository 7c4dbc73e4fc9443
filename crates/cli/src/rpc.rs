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

use std::time::Duration;

use ::rpc::client::{ClientConfig, PosManagerClient};

use crate::cfg::cli_options::GlobalOptions;

/// ApiClient wraps the management dispatcher built from the global options.
pub struct ApiClient(pub PosManagerClient);

impl ApiClient {
    pub fn new(globals: &GlobalOptions) -> Self {
        let config = ClientConfig {
            server_address: globals.address.clone(),
            node_name: globals.node.clone(),
            request_timeout: Duration::from_secs(globals.timeout_secs),
        };
        tracing::debug!(address = %config.server_address, "using CLI server");

        Self(PosManagerClient::new(config))
    }
}
