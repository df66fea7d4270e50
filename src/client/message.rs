use super::{
    HttpMethod, Params, WapiClient, WapiError, authorization_header, instance_query, parse_error,
};
use crate::domain::{AccessToken, InstanceId, MessageKind, MessageRequest, MessageResponse};
use crate::transport::{decode_message_json_response, encode_message_json_body};

#[derive(Clone)]
/// Message sending endpoints.
///
/// Each kind has a convenience form taking a token and instance id, which become
/// `Authorization: Bearer <token>` and `?instanceId=<id>`, and a `_with` form taking
/// header and query maps that are attached verbatim. Requests are validated before
/// anything is sent.
pub struct MessageService {
    client: WapiClient,
}

impl MessageService {
    pub(crate) fn new(client: WapiClient) -> Self {
        Self { client }
    }

    /// Send a request of any kind to the endpoint matching [`MessageRequest::kind`].
    pub async fn send_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        let kind = request.kind();
        self.send_authorized(kind, token, instance_id, request)
            .await
    }

    /// Send a request of any kind with caller-supplied headers and query parameters.
    ///
    /// Both maps are attached verbatim. `Accept` and `Content-Type` default to
    /// `application/json` only when the caller did not set them.
    ///
    /// Errors:
    /// - [`WapiError::Validation`] when the request breaks a field constraint (nothing is sent),
    /// - [`WapiError::Transport`] for connection, TLS or timeout failures,
    /// - [`WapiError::Remote`] for 4xx/5xx responses, carrying the raw body,
    /// - [`WapiError::Parse`] when the body is not a message acknowledgement.
    pub async fn send_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        let kind = request.kind();
        self.send(kind, headers, query, request).await
    }

    /// Send a text message (`POST /message/send-text`) as `token` to `instance_id`.
    ///
    /// Errors:
    /// - [`WapiError::Validation`] for invalid fields or a request that is not
    ///   [`MessageKind::Text`] (nothing is sent),
    /// - [`WapiError::Transport`] for connection, TLS or timeout failures,
    /// - [`WapiError::Remote`] for 4xx/5xx responses, carrying the raw body,
    /// - [`WapiError::Parse`] when the body is not a message acknowledgement.
    pub async fn send_text_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send_authorized(MessageKind::Text, token, instance_id, request)
            .await
    }

    /// Text variant of [`MessageService::send_message_with`]; fails the same ways as
    /// [`MessageService::send_text_message`].
    pub async fn send_text_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send(MessageKind::Text, headers, query, request).await
    }

    /// Send an image message (`POST /message/send-image`); errors as for
    /// [`MessageService::send_text_message`].
    pub async fn send_image_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send_authorized(MessageKind::Image, token, instance_id, request)
            .await
    }

    /// Image variant of [`MessageService::send_message_with`].
    pub async fn send_image_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send(MessageKind::Image, headers, query, request).await
    }

    /// Send an audio message (`POST /message/send-audio`); errors as for
    /// [`MessageService::send_text_message`].
    pub async fn send_audio_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send_authorized(MessageKind::Audio, token, instance_id, request)
            .await
    }

    /// Audio variant of [`MessageService::send_message_with`].
    pub async fn send_audio_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send(MessageKind::Audio, headers, query, request).await
    }

    /// Send a video message (`POST /message/send-video`); errors as for
    /// [`MessageService::send_text_message`].
    pub async fn send_video_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send_authorized(MessageKind::Video, token, instance_id, request)
            .await
    }

    /// Video variant of [`MessageService::send_message_with`].
    pub async fn send_video_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send(MessageKind::Video, headers, query, request).await
    }

    /// Send a document message (`POST /message/send-document`); errors as for
    /// [`MessageService::send_text_message`].
    pub async fn send_document_message(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send_authorized(MessageKind::Document, token, instance_id, request)
            .await
    }

    /// Document variant of [`MessageService::send_message_with`].
    pub async fn send_document_message_with(
        &self,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send(MessageKind::Document, headers, query, request)
            .await
    }

    async fn send_authorized(
        &self,
        kind: MessageKind,
        token: &AccessToken,
        instance_id: &InstanceId,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        self.send(
            kind,
            &authorization_header(token),
            &instance_query(instance_id),
            request,
        )
        .await
    }

    async fn send(
        &self,
        kind: MessageKind,
        headers: &Params,
        query: &Params,
        request: MessageRequest,
    ) -> Result<MessageResponse, WapiError> {
        request.validate_as(kind)?;
        let body = encode_message_json_body(&request).map_err(WapiError::Encode)?;

        let response = self
            .client
            .execute(HttpMethod::Post, kind.path(), headers, query, Some(body))
            .await?;

        decode_message_json_response(&response).map_err(|err| parse_error(kind.path(), err))
    }
}
