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

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Start collecting telemetry data")]
    Start,
    #[clap(about = "Stop collecting telemetry data")]
    Stop,
    #[clap(about = "Set telemetry properties from a publication list file")]
    SetProperty(SetProperty),
    #[clap(about = "Show the current telemetry properties")]
    GetProperty,
}

#[derive(Parser, Debug)]
pub struct SetProperty {
    #[clap(help = "Path of the publication list file", long)]
    pub publication_list_path: String,
}
