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

use ::rpc::pos_cli as pb;

use super::args::SetProperty;
use crate::cfg;
use crate::cfg::runtime::print_response;
use crate::rpc::ApiClient;

pub async fn start(api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::StartTelemetryRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
    };
    let resp = api_client.0.start_telemetry(req).await?;
    print_response(&resp)
}

pub async fn stop(api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::StopTelemetryRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
    };
    let resp = api_client.0.stop_telemetry(req).await?;
    print_response(&resp)
}

pub async fn set_property(args: SetProperty, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::SetTelemetryPropertyRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        publication_list_path: args.publication_list_path,
    };
    let resp = api_client.0.set_telemetry_property(req).await?;
    print_response(&resp)
}

pub async fn get_property(api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::GetTelemetryPropertyRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
    };
    let resp = api_client.0.get_telemetry_property(req).await?;
    print_response(&resp)
}
