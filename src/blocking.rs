//! Blocking wrappers around the async client.
//!
//! Each call drives the async implementation to completion on a runtime owned by the
//! client, so the calling thread is blocked until the response (or error) is available.
//! Do not call these from inside an async runtime; use [`crate::WapiClient`] there.

use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::client::{self, Params, WapiError};
use crate::domain::{AccessToken, InstanceId, InstanceResponse, MessageRequest, MessageResponse};

#[derive(Clone)]
/// Blocking W-API client.
pub struct WapiClient {
    inner: client::WapiClient,
    runtime: Arc<Runtime>,
}

impl WapiClient {
    /// Create a client for the default base URL.
    pub fn new() -> Result<Self, WapiError> {
        Self::from_async(client::WapiClient::new())
    }

    /// Wrap an already configured async client, e.g. one made with
    /// [`crate::WapiClientBuilder`].
    pub fn from_async(inner: client::WapiClient) -> Result<Self, WapiError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(WapiError::Runtime)?;
        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    /// Blocking instance metadata calls.
    pub fn instances(&self) -> InstanceService {
        InstanceService {
            inner: self.inner.instances(),
            runtime: Arc::clone(&self.runtime),
        }
    }

    /// Blocking message sending calls.
    pub fn messages(&self) -> MessageService {
        MessageService {
            inner: self.inner.messages(),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

#[derive(Clone)]
/// Blocking counterpart of [`client::InstanceService`].
pub struct InstanceService {
    inner: client::InstanceService,
    runtime: Arc<Runtime>,
}

impl InstanceService {
    /// Blocking [`client::InstanceService::find_by_id`].
    pub fn find_by_id(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
    ) -> Result<InstanceResponse, WapiError> {
        self.runtime
            .block_on(self.inner.find_by_id(token, instance_id))
    }

    /// Blocking [`client::InstanceService::find_by_id_with`].
    pub fn find_by_id_with(
        &self,
        headers: &Params,
        query: &Params,
    ) -> Result<InstanceResponse, WapiError> {
        self.runtime
            .block_on(self.inner.find_by_id_with(headers, query))
    }
}

#[derive(Clone)]
/// Blocking counterpart of [`client::MessageService`].
pub struct MessageService {
    inner: client::MessageService,
    runtime: Arc<Runtime>,
}

impl MessageService {
    /// Blocking [`client::MessageService::send_message`].
    pub fn send_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_message(token, instance_id, request))
    }

    /// Blocking [`client::MessageService::send_message_with`].
    pub fn send_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_message_with(headers, query, request))
    }

    /// Blocking [`client::MessageService::send_text_message`].
    pub fn send_text_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_text_message(token, instance_id, request))
    }

    /// Blocking [`client::MessageService::send_text_message_with`].
    pub fn send_text_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_text_message_with(headers, query, request))
    }

    /// Blocking [`client::MessageService::send_image_message`].
    pub fn send_image_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_image_message(token, instance_id, request))
    }

    /// Blocking [`client::MessageService::send_image_message_with`].
    pub fn send_image_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_image_message_with(headers, query, request))
    }

    /// Blocking [`client::MessageService::send_audio_message`].
    pub fn send_audio_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_audio_message(token, instance_id, request))
    }

    /// Blocking [`client::MessageService::send_audio_message_with`].
    pub fn send_audio_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_audio_message_with(headers, query, request))
    }

    /// Blocking [`client::MessageService::send_video_message`].
    pub fn send_video_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_video_message(token, instance_id, request))
    }

    /// Blocking [`client::MessageService::send_video_message_with`].
    pub fn send_video_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_video_message_with(headers, query, request))
    }

    /// Blocking [`client::MessageService::send_document_message`].
    pub fn send_document_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_document_message(token, instance_id, request))
    }

    /// Blocking [`client::MessageService::send_document_message_with`].
    pub fn send_document_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.runtime
            .block_on(self.inner.send_document_message_with(headers, query, request))
    }
}
