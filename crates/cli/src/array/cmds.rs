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

use super::args::MountArray;
use crate::cfg;
use crate::cfg::runtime::print_response;
use crate::rpc::ApiClient;

pub async fn mount(args: MountArray, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::MountArrayRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        name: args.name,
        enable_write_through: args.enable_write_through,
    };
    let resp = api_client.0.mount_array(req).await?;
    print_response(&resp)
}

pub async fn unmount(name: String, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::UnmountArrayRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        name,
    };
    let resp = api_client.0.unmount_array(req).await?;
    print_response(&resp)
}
