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

/*

/// cfg/cli_options.rs
/// Baseline top-level arguments and the top-level command enum.

*/

use ::rpc::server_address::ServerAddress;
use clap::{Args, Parser};

use crate::{array, subsystem, telemetry, volume, wbt};

// KvPair is a really simple struct for holding
// a key/value pair, and is used for parsing
// k:v,... groupings via the CLI.
#[derive(Clone, Debug)]
pub struct KvPair {
    pub key: String,
    pub value: String,
}

pub fn parse_colon_pairs(arg: &str) -> eyre::Result<KvPair> {
    let pair: Vec<&str> = arg.split(':').collect();
    if pair.len() != 2 {
        return Err(eyre::eyre!("must be <name>:<value>"));
    }

    Ok(KvPair {
        key: pair[0].to_string(),
        value: pair[1].to_string(),
    })
}

#[derive(Parser, Debug)]
#[clap(
    name = "poseidonos-cli",
    about = "Command line interface for the PoseidonOS CLI server",
    version
)]
pub struct Cli {
    #[clap(flatten)]
    pub globals: GlobalOptions,

    #[clap(subcommand)]
    pub cmd: Cmd,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[clap(
        help = "Address of the CLI server as host:port",
        long,
        global = true,
        env = "POS_CLI_SERVER_ADDRESS",
        default_value = "127.0.0.1:18716"
    )]
    pub address: ServerAddress,

    #[clap(
        help = "Logical node name; resolved to an IPv4 address in place of the configured host",
        long,
        global = true,
        env = "POS_CLI_NODE_NAME"
    )]
    pub node: Option<String>,

    #[clap(
        help = "Per-request timeout in seconds",
        long,
        global = true,
        default_value_t = 180
    )]
    pub timeout_secs: u64,

    #[clap(help = "Log internal debug output to stderr", long, global = true)]
    pub debug: bool,
}

/// Cmd is the top-level subcommands enum, which contains mappings for all
/// top-level commands (e.g. `telemetry`, `subsystem`, etc).
#[derive(Parser, Debug)]
pub enum Cmd {
    #[clap(
        subcommand,
        about = "Control telemetry collection",
        visible_alias = "t"
    )]
    Telemetry(telemetry::args::Cmd),

    #[clap(
        subcommand,
        about = "Manage NVMe-oF subsystems, listeners and transports",
        visible_alias = "s"
    )]
    Subsystem(subsystem::args::Cmd),

    #[clap(subcommand, about = "Manage volumes", visible_alias = "v")]
    Volume(volume::args::Cmd),

    #[clap(subcommand, about = "Mount and unmount arrays", visible_alias = "a")]
    Array(array::args::Cmd),

    #[clap(subcommand, about = "Run whitebox test commands")]
    Wbt(wbt::args::Cmd),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cmd_structure() {
        Cli::command().debug_assert();
    }

    // parse_defaults ensures the global options fall back to the
    // stock CLI server endpoint.
    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["poseidonos-cli", "subsystem", "list"])
            .expect("should parse with defaults");

        assert_eq!(cli.globals.address.to_string(), "127.0.0.1:18716");
        assert!(cli.globals.node.is_none());
        assert_eq!(cli.globals.timeout_secs, 180);
        assert!(!cli.globals.debug);
    }

    // parse_global_overrides ensures globals parse after the
    // subcommand as well.
    #[test]
    fn parse_global_overrides() {
        let cli = Cli::try_parse_from([
            "poseidonos-cli",
            "subsystem",
            "list",
            "--address",
            "10.0.0.7:18716",
            "--node",
            "pos-node-3",
            "--timeout-secs",
            "30",
        ])
        .expect("should parse global overrides");

        assert_eq!(cli.globals.address.to_string(), "10.0.0.7:18716");
        assert_eq!(cli.globals.node.as_deref(), Some("pos-node-3"));
        assert_eq!(cli.globals.timeout_secs, 30);
    }

    // parse_bad_address_fails ensures a scheme-carrying address is
    // rejected up front.
    #[test]
    fn parse_bad_address_fails() {
        let result = Cli::try_parse_from([
            "poseidonos-cli",
            "--address",
            "http://10.0.0.7:18716",
            "subsystem",
            "list",
        ]);
        assert!(result.is_err(), "should fail on URI addresses");
    }

    // parse_colon_pairs_accepts_pairs ensures the k:v parser splits
    // correctly and rejects malformed input.
    #[test]
    fn parse_colon_pairs_accepts_pairs() {
        let pair = parse_colon_pairs("name:vol1").unwrap();
        assert_eq!(pair.key, "name");
        assert_eq!(pair.value, "vol1");

        assert!(parse_colon_pairs("no-separator").is_err());
        assert!(parse_colon_pairs("too:many:parts").is_err());
    }
}
