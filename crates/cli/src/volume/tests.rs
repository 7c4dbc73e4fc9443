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

// parse_mount ensures mount parses a volume name and array.
#[test]
fn parse_mount() {
    let cmd = Cmd::try_parse_from(["volume", "mount", "vol1", "--array", "POSArray"])
        .expect("should parse mount");

    match cmd {
        Cmd::Mount(args) => {
            assert_eq!(args.name, "vol1");
            assert_eq!(args.array, "POSArray");
            assert_eq!(args.subnqn, "");
        }
    }
}

// parse_mount_with_subnqn ensures mount parses an explicit
// subsystem NQN.
#[test]
fn parse_mount_with_subnqn() {
    let cmd = Cmd::try_parse_from([
        "volume",
        "mount",
        "vol1",
        "--array",
        "POSArray",
        "--subnqn",
        "nqn.2019-04.pos:subsystem1",
    ])
    .expect("should parse mount with subnqn");

    match cmd {
        Cmd::Mount(args) => {
            assert_eq!(args.subnqn, "nqn.2019-04.pos:subsystem1");
        }
    }
}

// parse_mount_missing_array_fails ensures mount fails without
// an array name.
#[test]
fn parse_mount_missing_array_fails() {
    let result = Cmd::try_parse_from(["volume", "mount", "vol1"]);
    assert!(result.is_err(), "should fail without --array");
}
