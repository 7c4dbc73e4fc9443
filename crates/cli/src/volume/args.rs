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
    #[clap(about = "Mount a volume to the host", visible_alias = "m")]
    Mount(MountVolume),
}

#[derive(Parser, Debug)]
pub struct MountVolume {
    #[clap(help = "Name of the volume to mount")]
    pub name: String,
    #[clap(help = "Name of the array the volume belongs to", long)]
    pub array: String,
    #[clap(
        help = "NQN of the subsystem to attach the volume to; the server picks one when omitted",
        long,
        default_value = ""
    )]
    pub subnqn: String,
}
