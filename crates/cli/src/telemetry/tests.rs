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

// verify_cmd_structure runs a baseline clap debug_assert()
// to do basic command configuration checking and validation.
#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_start ensures start parses with no arguments.
#[test]
fn parse_start() {
    let cmd = Cmd::try_parse_from(["telemetry", "start"]).expect("should parse start");
    assert!(matches!(cmd, Cmd::Start));
}

// parse_stop ensures stop parses with no arguments.
#[test]
fn parse_stop() {
    let cmd = Cmd::try_parse_from(["telemetry", "stop"]).expect("should parse stop");
    assert!(matches!(cmd, Cmd::Stop));
}

// parse_set_property ensures set-property parses with a
// publication list path.
#[test]
fn parse_set_property() {
    let cmd = Cmd::try_parse_from([
        "telemetry",
        "set-property",
        "--publication-list-path",
        "/etc/pos/publication_list_default.yaml",
    ])
    .expect("should parse set-property");

    match cmd {
        Cmd::SetProperty(args) => {
            assert_eq!(
                args.publication_list_path,
                "/etc/pos/publication_list_default.yaml"
            );
        }
        _ => panic!("expected SetProperty variant"),
    }
}

// parse_set_property_missing_path_fails ensures set-property
// fails without the path.
#[test]
fn parse_set_property_missing_path_fails() {
    let result = Cmd::try_parse_from(["telemetry", "set-property"]);
    assert!(result.is_err(), "should fail without publication list path");
}

// parse_get_property ensures get-property parses with no arguments.
#[test]
fn parse_get_property() {
    let cmd = Cmd::try_parse_from(["telemetry", "get-property"]).expect("should parse get-property");
    assert!(matches!(cmd, Cmd::GetProperty));
}
