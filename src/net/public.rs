// Copyright (C) 2023-2024 StorSwift Inc.
// This file is part of the Drand-RS library.

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:
// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client for the `drand.Public` service.

use super::utils::connect;
use super::utils::Address;
use crate::client::BeaconSource;
use crate::core::RoundRecord;
use crate::protobuf::drand::public_client::PublicClient as _PublicClient;
use crate::protobuf::drand::DistKeyRequest;
use crate::protobuf::drand::PublicRandRequest;

use anyhow::Result;
use std::time::Duration;
use tonic::transport::Channel;

pub struct PublicClient(_PublicClient<Channel>);

impl PublicClient {
    pub async fn connect(address: &Address, tls: bool, timeout: Duration) -> Result<Self> {
        let channel = connect(address, tls, timeout).await?;

        Ok(Self(_PublicClient::new(channel)))
    }
}

#[tonic::async_trait]
impl BeaconSource for PublicClient {
    async fn dist_key(&mut self) -> Result<Vec<u8>> {
        let resp = self
            .0
            .dist_key(DistKeyRequest {})
            .await
            .map_err(|e| anyhow::anyhow!("dist_key: {e:?}"))?
            .into_inner();

        Ok(resp.key)
    }

    async fn public_rand(&mut self, round: u64) -> Result<RoundRecord> {
        let resp = self
            .0
            .public_rand(PublicRandRequest { round })
            .await
            .map_err(|e| anyhow::anyhow!("public_rand: {e:?}"))?
            .into_inner();

        Ok(resp.into())
    }
}
