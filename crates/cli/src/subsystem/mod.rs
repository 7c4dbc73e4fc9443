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

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

impl Dispatch for args::Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> color_eyre::Result<()> {
        match self {
            args::Cmd::Create(args) => cmds::create(args, &ctx.api_client).await,
            args::Cmd::Delete { subnqn } => cmds::delete(subnqn, &ctx.api_client).await,
            args::Cmd::List => cmds::list(&ctx.api_client).await,
            args::Cmd::Info { subnqn } => cmds::info(subnqn, &ctx.api_client).await,
            args::Cmd::AddListener(args) => cmds::add_listener(args, &ctx.api_client).await,
            args::Cmd::CreateTransport(args) => cmds::create_transport(args, &ctx.api_client).await,
        }
    }
}
