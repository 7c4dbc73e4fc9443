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

use clap::Parser;

mod array;
mod cfg;
mod rpc;
mod subsystem;
mod telemetry;
mod volume;
mod wbt;

use crate::cfg::cli_options::{Cli, Cmd};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

fn init_tracing(debug: bool) {
    let default_directive = if debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.globals.debug);

    let ctx = RuntimeContext::new(&cli);
    match cli.cmd {
        Cmd::Telemetry(cmd) => cmd.dispatch(ctx).await,
        Cmd::Subsystem(cmd) => cmd.dispatch(ctx).await,
        Cmd::Volume(cmd) => cmd.dispatch(ctx).await,
        Cmd::Array(cmd) => cmd.dispatch(ctx).await,
        Cmd::Wbt(cmd) => cmd.dispatch(ctx).await,
    }
}
