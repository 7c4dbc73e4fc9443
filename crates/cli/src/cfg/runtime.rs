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

use crate::cfg::cli_options::Cli;
use crate::rpc::ApiClient;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub api_client: ApiClient,
}

impl RuntimeContext {
    pub fn new(cli: &Cli) -> Self {
        Self {
            api_client: ApiClient::new(&cli.globals),
        }
    }
}

/// Render a management response for the operator. Responses come back as
/// generated protobuf types, so pretty JSON is the entire output story.
pub fn print_response<T: serde::Serialize>(response: &T) -> color_eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
