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
use tonic::transport::Channel;
use tonic::{Request, Response, Status};

use crate::protos::pos_cli as pb;
use crate::protos::pos_cli::pos_cli_client::PosCliClient;

/// The unary operations of the CLI server, one method per remote procedure.
///
/// The production implementation is the generated tonic client; tests
/// substitute a recording fake so the dispatcher's behavior can be verified
/// without a server.
#[async_trait::async_trait]
pub trait PosManagerApi: Send {
    async fn start_telemetry(
        &mut self,
        request: Request<pb::StartTelemetryRequest>,
    ) -> Result<Response<pb::StartTelemetryResponse>, Status>;

    async fn stop_telemetry(
        &mut self,
        request: Request<pb::StopTelemetryRequest>,
    ) -> Result<Response<pb::StopTelemetryResponse>, Status>;

    async fn set_telemetry_property(
        &mut self,
        request: Request<pb::SetTelemetryPropertyRequest>,
    ) -> Result<Response<pb::SetTelemetryPropertyResponse>, Status>;

    async fn get_telemetry_property(
        &mut self,
        request: Request<pb::GetTelemetryPropertyRequest>,
    ) -> Result<Response<pb::GetTelemetryPropertyResponse>, Status>;

    async fn create_subsystem(
        &mut self,
        request: Request<pb::CreateSubsystemRequest>,
    ) -> Result<Response<pb::CreateSubsystemResponse>, Status>;

    async fn delete_subsystem(
        &mut self,
        request: Request<pb::DeleteSubsystemRequest>,
    ) -> Result<Response<pb::DeleteSubsystemResponse>, Status>;

    async fn list_subsystem(
        &mut self,
        request: Request<pb::ListSubsystemRequest>,
    ) -> Result<Response<pb::ListSubsystemResponse>, Status>;

    async fn subsystem_info(
        &mut self,
        request: Request<pb::SubsystemInfoRequest>,
    ) -> Result<Response<pb::SubsystemInfoResponse>, Status>;

    async fn add_listener(
        &mut self,
        request: Request<pb::AddListenerRequest>,
    ) -> Result<Response<pb::AddListenerResponse>, Status>;

    async fn create_transport(
        &mut self,
        request: Request<pb::CreateTransportRequest>,
    ) -> Result<Response<pb::CreateTransportResponse>, Status>;

    async fn mount_volume(
        &mut self,
        request: Request<pb::MountVolumeRequest>,
    ) -> Result<Response<pb::MountVolumeResponse>, Status>;

    async fn mount_array(
        &mut self,
        request: Request<pb::MountArrayRequest>,
    ) -> Result<Response<pb::MountArrayResponse>, Status>;

    async fn unmount_array(
        &mut self,
        request: Request<pb::UnmountArrayRequest>,
    ) -> Result<Response<pb::UnmountArrayResponse>, Status>;

    async fn list_wbt(
        &mut self,
        request: Request<pb::ListWbtRequest>,
    ) -> Result<Response<pb::ListWbtResponse>, Status>;

    async fn wbt(
        &mut self,
        request: Request<pb::WbtRequest>,
    ) -> Result<Response<pb::WbtResponse>, Status>;
}

#[async_trait::async_trait]
impl PosManagerApi for PosCliClient<Channel> {
    async fn start_telemetry(
        &mut self,
        request: Request<pb::StartTelemetryRequest>,
    ) -> Result<Response<pb::StartTelemetryResponse>, Status> {
        PosCliClient::start_telemetry(self, request).await
    }

    async fn stop_telemetry(
        &mut self,
        request: Request<pb::StopTelemetryRequest>,
    ) -> Result<Response<pb::StopTelemetryResponse>, Status> {
        PosCliClient::stop_telemetry(self, request).await
    }

    async fn set_telemetry_property(
        &mut self,
        request: Request<pb::SetTelemetryPropertyRequest>,
    ) -> Result<Response<pb::SetTelemetryPropertyResponse>, Status> {
        PosCliClient::set_telemetry_property(self, request).await
    }

    async fn get_telemetry_property(
        &mut self,
        request: Request<pb::GetTelemetryPropertyRequest>,
    ) -> Result<Response<pb::GetTelemetryPropertyResponse>, Status> {
        PosCliClient::get_telemetry_property(self, request).await
    }

    async fn create_subsystem(
        &mut self,
        request: Request<pb::CreateSubsystemRequest>,
    ) -> Result<Response<pb::CreateSubsystemResponse>, Status> {
        PosCliClient::create_subsystem(self, request).await
    }

    async fn delete_subsystem(
        &mut self,
        request: Request<pb::DeleteSubsystemRequest>,
    ) -> Result<Response<pb::DeleteSubsystemResponse>, Status> {
        PosCliClient::delete_subsystem(self, request).await
    }

    async fn list_subsystem(
        &mut self,
        request: Request<pb::ListSubsystemRequest>,
    ) -> Result<Response<pb::ListSubsystemResponse>, Status> {
        PosCliClient::list_subsystem(self, request).await
    }

    async fn subsystem_info(
        &mut self,
        request: Request<pb::SubsystemInfoRequest>,
    ) -> Result<Response<pb::SubsystemInfoResponse>, Status> {
        PosCliClient::subsystem_info(self, request).await
    }

    async fn add_listener(
        &mut self,
        request: Request<pb::AddListenerRequest>,
    ) -> Result<Response<pb::AddListenerResponse>, Status> {
        PosCliClient::add_listener(self, request).await
    }

    async fn create_transport(
        &mut self,
        request: Request<pb::CreateTransportRequest>,
    ) -> Result<Response<pb::CreateTransportResponse>, Status> {
        PosCliClient::create_transport(self, request).await
    }

    async fn mount_volume(
        &mut self,
        request: Request<pb::MountVolumeRequest>,
    ) -> Result<Response<pb::MountVolumeResponse>, Status> {
        PosCliClient::mount_volume(self, request).await
    }

    async fn mount_array(
        &mut self,
        request: Request<pb::MountArrayRequest>,
    ) -> Result<Response<pb::MountArrayResponse>, Status> {
        PosCliClient::mount_array(self, request).await
    }

    async fn unmount_array(
        &mut self,
        request: Request<pb::UnmountArrayRequest>,
    ) -> Result<Response<pb::UnmountArrayResponse>, Status> {
        PosCliClient::unmount_array(self, request).await
    }

    async fn list_wbt(
        &mut self,
        request: Request<pb::ListWbtRequest>,
    ) -> Result<Response<pb::ListWbtResponse>, Status> {
        PosCliClient::list_wbt(self, request).await
    }

    async fn wbt(
        &mut self,
        request: Request<pb::WbtRequest>,
    ) -> Result<Response<pb::WbtResponse>, Status> {
        PosCliClient::wbt(self, request).await
    }
}
