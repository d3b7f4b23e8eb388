//! gRPC backend for the app dynamic feed.
//!
//! Like the HTTP backend, the transport sits behind a trait so the app
//! adapter can be tested without a server. The production implementation
//! asks the channel collaborator for a connection on every call.

pub mod proto;

use std::sync::Arc;

use async_trait::async_trait;
use bili_core::ChannelRepository;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::Channel;

use crate::endpoints::DYN_VIDEO_PATH;
use crate::error::{ApiError, ApiResult};
use proto::{DynVideoReply, DynVideoReq};

/// Channel source for the production gRPC backend.
pub type SharedChannels = Arc<dyn ChannelRepository<Channel = Channel>>;

/// Trait for backends that can serve the app dynamic feed RPC.
///
/// This is an implementation detail - external code should use the `UserPort` trait.
#[async_trait]
pub trait DynamicRpc: Send + Sync {
    /// Issue `DynVideo`, authenticating with `access_key` when present.
    async fn dyn_video(
        &self,
        request: DynVideoReq,
        access_key: Option<&str>,
    ) -> ApiResult<DynVideoReply>;
}

// ============================================================================
// Tonic Backend
// ============================================================================

/// Production gRPC backend using tonic over a collaborator-supplied channel.
pub struct GrpcDynamicBackend {
    channels: SharedChannels,
}

impl GrpcDynamicBackend {
    pub fn new(channels: SharedChannels) -> Self {
        Self { channels }
    }
}

#[async_trait]
impl DynamicRpc for GrpcDynamicBackend {
    async fn dyn_video(
        &self,
        request: DynVideoReq,
        access_key: Option<&str>,
    ) -> ApiResult<DynVideoReply> {
        let channel = self
            .channels
            .default_channel()
            .ok_or(ApiError::ChannelUnavailable)?;

        let mut grpc = tonic::client::Grpc::new(channel);
        grpc.ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("Service was not ready: {e}")))?;

        let mut request = tonic::Request::new(request);
        if let Some(key) = access_key {
            let value: MetadataValue<Ascii> = format!("identify_v1 {key}").parse().map_err(|_| {
                ApiError::InvalidResponse {
                    message: "access key is not valid header text".to_string(),
                }
            })?;
            request.metadata_mut().insert("authorization", value);
        }

        tracing::debug!(
            page = request.get_ref().page,
            refresh_type = request.get_ref().refresh_type,
            "Sending DynVideo"
        );

        let codec = tonic::codec::ProstCodec::default();
        let path = PathAndQuery::from_static(DYN_VIDEO_PATH);
        let response: tonic::Response<DynVideoReply> = grpc.unary(request, path, codec).await?;
        Ok(response.into_inner())
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
