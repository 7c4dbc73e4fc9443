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

const TEST_NQN: &str = "nqn.2019-04.pos:subsystem1";

#[test]
fn verify_cmd_structure() {
    Cmd::command().debug_assert();
}

// parse_create_defaults ensures create parses with only an NQN
// and applies the stock identity defaults.
#[test]
fn parse_create_defaults() {
    let cmd = Cmd::try_parse_from(["subsystem", "create", TEST_NQN]).expect("should parse create");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.subnqn, TEST_NQN);
            assert_eq!(args.serial_number, "POS0000000000000");
            assert_eq!(args.model_number, "POS_VOLUME_EXTENSION");
            assert_eq!(args.max_namespaces, 256);
            assert!(!args.allow_any_host);
            assert!(!args.ana_reporting);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_create_with_flags ensures create parses overrides.
#[test]
fn parse_create_with_flags() {
    let cmd = Cmd::try_parse_from([
        "subsystem",
        "create",
        TEST_NQN,
        "--serial-number",
        "POS00000001",
        "--max-namespaces",
        "512",
        "--allow-any-host",
    ])
    .expect("should parse create with flags");

    match cmd {
        Cmd::Create(args) => {
            assert_eq!(args.serial_number, "POS00000001");
            assert_eq!(args.max_namespaces, 512);
            assert!(args.allow_any_host);
        }
        _ => panic!("expected Create variant"),
    }
}

// parse_delete ensures delete parses with an NQN.
#[test]
fn parse_delete() {
    let cmd = Cmd::try_parse_from(["subsystem", "delete", TEST_NQN]).expect("should parse delete");

    match cmd {
        Cmd::Delete { subnqn } => assert_eq!(subnqn, TEST_NQN),
        _ => panic!("expected Delete variant"),
    }
}

// parse_list ensures list parses with no arguments.
#[test]
fn parse_list() {
    let cmd = Cmd::try_parse_from(["subsystem", "list"]).expect("should parse list");
    assert!(matches!(cmd, Cmd::List));
}

// parse_info ensures info parses with an NQN.
#[test]
fn parse_info() {
    let cmd = Cmd::try_parse_from(["subsystem", "info", TEST_NQN]).expect("should parse info");

    match cmd {
        Cmd::Info { subnqn } => assert_eq!(subnqn, TEST_NQN),
        _ => panic!("expected Info variant"),
    }
}

// parse_add_listener ensures add-listener parses the listener
// endpoint arguments.
#[test]
fn parse_add_listener() {
    let cmd = Cmd::try_parse_from([
        "subsystem",
        "add-listener",
        TEST_NQN,
        "--target-address",
        "10.100.11.1",
        "--transport-service-id",
        "1158",
    ])
    .expect("should parse add-listener");

    match cmd {
        Cmd::AddListener(args) => {
            assert_eq!(args.subnqn, TEST_NQN);
            assert_eq!(args.transport_type, "tcp");
            assert_eq!(args.target_address, "10.100.11.1");
            assert_eq!(args.transport_service_id, "1158");
        }
        _ => panic!("expected AddListener variant"),
    }
}

// parse_add_listener_missing_address_fails ensures add-listener
// fails without the endpoint.
#[test]
fn parse_add_listener_missing_address_fails() {
    let result = Cmd::try_parse_from(["subsystem", "add-listener", TEST_NQN]);
    assert!(result.is_err(), "should fail without a target address");
}

// parse_create_transport ensures create-transport parses with
// defaults.
#[test]
fn parse_create_transport() {
    let cmd =
        Cmd::try_parse_from(["subsystem", "create-transport"]).expect("should parse create-transport");

    match cmd {
        Cmd::CreateTransport(args) => {
            assert_eq!(args.transport_type, "tcp");
            assert_eq!(args.buf_cache_size, 64);
            assert_eq!(args.num_shared_buf, 4096);
        }
        _ => panic!("expected CreateTransport variant"),
    }
}
