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

use super::args::{AddListener, CreateSubsystem, CreateTransport};
use crate::cfg;
use crate::cfg::runtime::print_response;
use crate::rpc::ApiClient;

pub async fn create(args: CreateSubsystem, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::CreateSubsystemRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        subnqn: args.subnqn,
        serial_number: args.serial_number,
        model_number: args.model_number,
        max_namespaces: args.max_namespaces,
        allow_any_host: args.allow_any_host,
        ana_reporting: args.ana_reporting,
    };
    let resp = api_client.0.create_subsystem(req).await?;
    print_response(&resp)
}

pub async fn delete(subnqn: String, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::DeleteSubsystemRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        subnqn,
    };
    let resp = api_client.0.delete_subsystem(req).await?;
    print_response(&resp)
}

pub async fn list(api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::ListSubsystemRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
    };
    let resp = api_client.0.list_subsystem(req).await?;
    print_response(&resp)
}

pub async fn info(subnqn: String, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::SubsystemInfoRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        subnqn,
    };
    let resp = api_client.0.subsystem_info(req).await?;
    print_response(&resp)
}

pub async fn add_listener(args: AddListener, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::AddListenerRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        subnqn: args.subnqn,
        listener: Some(pb::ListenerAddress {
            transport_type: args.transport_type,
            target_address: args.target_address,
            transport_service_id: args.transport_service_id,
        }),
    };
    let resp = api_client.0.add_listener(req).await?;
    print_response(&resp)
}

pub async fn create_transport(
    args: CreateTransport,
    api_client: &ApiClient,
) -> color_eyre::Result<()> {
    let req = pb::CreateTransportRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        transport_type: args.transport_type,
        buf_cache_size: args.buf_cache_size,
        num_shared_buf: args.num_shared_buf,
    };
    let resp = api_client.0.create_transport(req).await?;
    print_response(&resp)
}
