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
            args::Cmd::Start => cmds::start(&ctx.api_client).await,
            args::Cmd::Stop => cmds::stop(&ctx.api_client).await,
            args::Cmd::SetProperty(args) => cmds::set_property(args, &ctx.api_client).await,
            args::Cmd::GetProperty => cmds::get_property(&ctx.api_client).await,
        }
    }
}
