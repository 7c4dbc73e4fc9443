/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use clap::{CommandFactory, Parser};

use super::args::*;

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_list ensures list parses with no arguments.
#[test]
fn parse_list() {
    let cmd = Cmd::try_parse_from(["wbt", "list"]).expect("should parse list");
    assert!(matches!(cmd, Cmd::List));
}

// parse_run ensures run parses a test name without arguments.
#[test]
fn parse_run() {
    let cmd = Cmd::try_parse_from(["wbt", "run", "read_vsamap_entry"]).expect("should parse run");

    match cmd {
        Cmd::Run(args) => {
            assert_eq!(args.testname, "read_vsamap_entry");
            assert!(args.argv.is_empty());
        }
        _ => panic!("expected Run variant"),
    }
}

// parse_run_with_argv ensures run splits comma separated
// name:value pairs.
#[test]
fn parse_run_with_argv() {
    let cmd = Cmd::try_parse_from([
        "wbt",
        "run",
        "read_vsamap_entry",
        "--argv",
        "name:vol1,rba:0",
    ])
    .expect("should parse run with argv");

    match cmd {
        Cmd::Run(args) => {
            assert_eq!(args.argv.len(), 2);
            assert_eq!(args.argv[0].key, "name");
            assert_eq!(args.argv[0].value, "vol1");
            assert_eq!(args.argv[1].key, "rba");
            assert_eq!(args.argv[1].value, "0");
        }
        _ => panic!("expected Run variant"),
    }
}

// parse_run_bad_argv_fails ensures malformed pairs are rejected.
#[test]
fn parse_run_bad_argv_fails() {
    let result = Cmd::try_parse_from(["wbt", "run", "read_vsamap_entry", "--argv", "no-separator"]);
    assert!(result.is_err(), "should fail on malformed argv pairs");
}
