/*
 * SPDX-FileCopyrightText: Copyright (c) 2021-2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

//! Client-side dispatch for the PoseidonOS CLI server.
//!
//! Each management operation resolves an address, dials once with a fixed
//! timeout, issues exactly one unary call with a per-request deadline, and
//! releases the connection on every exit path. There is no retry policy and
//! no state is held between calls.

pub mod client;
pub mod errors;
pub mod node_resolver;
pub mod protos;
pub mod server_address;

pub use protos::pos_cli;
