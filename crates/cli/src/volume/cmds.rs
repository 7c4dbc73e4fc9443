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

use super::args::MountVolume;
use crate::cfg;
use crate::cfg::runtime::print_response;
use crate::rpc::ApiClient;

pub async fn mount(args: MountVolume, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::MountVolumeRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        name: args.name,
        array: args.array,
        subnqn: args.subnqn,
    };
    let resp = api_client.0.mount_volume(req).await?;
    print_response(&resp)
}
