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

// parse_mount ensures mount parses with an array name.
#[test]
fn parse_mount() {
    let cmd = Cmd::try_parse_from(["array", "mount", "POSArray"]).expect("should parse mount");

    match cmd {
        Cmd::Mount(args) => {
            assert_eq!(args.name, "POSArray");
            assert!(!args.enable_write_through);
        }
        _ => panic!("expected Mount variant"),
    }
}

// parse_mount_write_through ensures mount parses the
// write-through flag.
#[test]
fn parse_mount_write_through() {
    let cmd = Cmd::try_parse_from(["array", "mount", "POSArray", "--enable-write-through"])
        .expect("should parse mount with write-through");

    match cmd {
        Cmd::Mount(args) => assert!(args.enable_write_through),
        _ => panic!("expected Mount variant"),
    }
}

// parse_unmount ensures unmount parses with an array name.
#[test]
fn parse_unmount() {
    let cmd = Cmd::try_parse_from(["array", "unmount", "POSArray"]).expect("should parse unmount");

    match cmd {
        Cmd::Unmount { name } => assert_eq!(name, "POSArray"),
        _ => panic!("expected Unmount variant"),
    }
}

// parse_mount_missing_name_fails ensures mount fails without a
// name.
#[test]
fn parse_mount_missing_name_fails() {
    let result = Cmd::try_parse_from(["array", "mount"]);
    assert!(result.is_err(), "should fail without an array name");
}
