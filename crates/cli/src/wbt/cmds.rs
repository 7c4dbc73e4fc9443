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

use super::args::RunWbt;
use crate::cfg;
use crate::cfg::runtime::print_response;
use crate::rpc::ApiClient;

pub async fn list(api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::ListWbtRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
    };
    let resp = api_client.0.list_wbt(req).await?;
    print_response(&resp)
}

pub async fn run(args: RunWbt, api_client: &ApiClient) -> color_eyre::Result<()> {
    let req = pb::WbtRequest {
        rid: cfg::new_rid(),
        requestor: cfg::REQUESTOR.to_string(),
        testname: args.testname,
        argv: args
            .argv
            .into_iter()
            .map(|pair| (pair.key, pair.value))
            .collect(),
    };
    let resp = api_client.0.wbt(req).await?;
    print_response(&resp)
}
