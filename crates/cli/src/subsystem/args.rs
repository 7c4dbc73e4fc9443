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
    #[clap(about = "Create an NVMe-oF subsystem", visible_alias = "c")]
    Create(CreateSubsystem),
    #[clap(about = "Delete a subsystem", visible_alias = "d")]
    Delete { subnqn: String },
    #[clap(about = "List all subsystems", visible_alias = "l")]
    List,
    #[clap(about = "Show detailed information of a subsystem", visible_alias = "i")]
    Info { subnqn: String },
    #[clap(about = "Add a listener to a subsystem")]
    AddListener(AddListener),
    #[clap(about = "Create an NVMf transport")]
    CreateTransport(CreateTransport),
}

#[derive(Parser, Debug)]
pub struct CreateSubsystem {
    #[clap(help = "NQN of the subsystem to create")]
    pub subnqn: String,
    #[clap(help = "Serial number reported to hosts", long, default_value = "POS0000000000000")]
    pub serial_number: String,
    #[clap(help = "Model number reported to hosts", long, default_value = "POS_VOLUME_EXTENSION")]
    pub model_number: String,
    #[clap(help = "Maximum number of namespaces", long, default_value_t = 256)]
    pub max_namespaces: u32,
    #[clap(help = "Allow any host to connect", long)]
    pub allow_any_host: bool,
    #[clap(help = "Enable ANA reporting", long)]
    pub ana_reporting: bool,
}

#[derive(Parser, Debug)]
pub struct AddListener {
    #[clap(help = "NQN of the subsystem to add the listener to")]
    pub subnqn: String,
    #[clap(help = "Transport type of the listener", long, default_value = "tcp")]
    pub transport_type: String,
    #[clap(help = "Target address to listen on", long)]
    pub target_address: String,
    #[clap(help = "Transport service id (port) to listen on", long)]
    pub transport_service_id: String,
}

#[derive(Parser, Debug)]
pub struct CreateTransport {
    #[clap(help = "Transport type to create", long, default_value = "tcp")]
    pub transport_type: String,
    #[clap(help = "Write buffer cache size", long, default_value_t = 64)]
    pub buf_cache_size: i32,
    #[clap(help = "Number of shared buffers", long, default_value_t = 4096)]
    pub num_shared_buf: i32,
}
