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

// Array mounts and unmounts run with fixed extended deadlines on the
// dispatcher side; no timeout knob is exposed here.
#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "Mount an array", visible_alias = "m")]
    Mount(MountArray),
    #[clap(about = "Unmount an array", visible_alias = "u")]
    Unmount { name: String },
}

#[derive(Parser, Debug)]
pub struct MountArray {
    #[clap(help = "Name of the array to mount")]
    pub name: String,
    #[clap(help = "Mount the array in write-through mode", long)]
    pub enable_write_through: bool,
}
