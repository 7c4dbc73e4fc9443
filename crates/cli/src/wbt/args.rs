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

use crate::cfg::cli_options::{KvPair, parse_colon_pairs};

#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(about = "List the available whitebox test commands", visible_alias = "l")]
    List,
    #[clap(about = "Execute a whitebox test command", visible_alias = "r")]
    Run(RunWbt),
}

#[derive(Parser, Debug)]
pub struct RunWbt {
    #[clap(help = "Name of the test to execute")]
    pub testname: String,
    #[clap(
        help = "Test arguments as <name>:<value> pairs",
        long,
        value_parser = parse_colon_pairs,
        value_delimiter = ','
    )]
    pub argv: Vec<KvPair>,
}
