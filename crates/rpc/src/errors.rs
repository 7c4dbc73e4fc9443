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
use tonic::Status;

use crate::node_resolver::ResolverError;

/// Advisory prefix for every dial failure. The most common cause by far is a
/// daemon that is simply not running.
pub const DIAL_ERROR_MSG: &str = "Could not connect to the CLI server. Is PoseidonOS running?";

/// PosClientError enumerates the three ways a management call can fail.
/// None are recovered internally; the caller decides whether to retry.
#[derive(Debug, thiserror::Error)]
pub enum PosClientError {
    /// The configured node name could not be resolved. No connection was
    /// attempted.
    #[error("an error occurred while getting the IPv4 address of a node: {0}")]
    NodeResolution(#[from] ResolverError),
    /// The CLI server could not be dialed within the dial timeout.
    #[error("Could not connect to the CLI server. Is PoseidonOS running? (internal error message: {0})")]
    ServerUnreachable(#[source] Status),
    /// The server was reached but the invocation itself failed. Surfaced
    /// verbatim.
    #[error(transparent)]
    Rpc(Status),
}
