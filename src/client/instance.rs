use super::{
    HttpMethod, Params, WapiClient, WapiError, authorization_header, instance_query, parse_error,
};
use crate::domain::{AccessToken, InstanceId, InstanceResponse};
use crate::transport::decode_instance_json_response;

const FETCH_INSTANCE_PATH: &str = "/instance/fetch-instance";

#[derive(Clone)]
/// Instance metadata endpoints.
pub struct InstanceService {
    client: WapiClient,
}

impl InstanceService {
    pub(crate) fn new(client: WapiClient) -> Self {
        Self { client }
    }

    /// Fetch the current snapshot of an instance.
    ///
    /// Issues `GET /instance/fetch-instance?instanceId=<id>` with a bearer token. Nothing is
    /// cached between calls.
    pub async fn find_by_id(
        &self,
        token: &AccessToken,
        instance_id: &InstanceId,
    ) -> Result<InstanceResponse, WapiError> {
        let body = self
            .client
            .execute(
                HttpMethod::Get,
                FETCH_INSTANCE_PATH,
                &authorization_header(token),
                &instance_query(instance_id),
                None,
            )
            .await?;

        decode_instance_json_response(&body).map_err(|err| parse_error(FETCH_INSTANCE_PATH, err))
    }

    /// Same as [`InstanceService::find_by_id`] with caller-supplied headers and query
    /// parameters, attached verbatim.
    pub async fn find_by_id_with(
        &self,
        headers: &Params,
        query: &Params,
    ) -> Result<InstanceResponse, WapiError> {
        let body = self
            .client
            .execute(HttpMethod::Get, FETCH_INSTANCE_PATH, headers, query, None)
            .await?;

        decode_instance_json_response(&body).map_err(|err| parse_error(FETCH_INSTANCE_PATH, err))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use super::*;
    use crate::client::testing::{FakeTransport, header};
    use crate::transport::FULL_INSTANCE_JSON;

    fn make_service(transport: FakeTransport) -> InstanceService {
        WapiClient::with_transport("https://example.invalid/v1", Arc::new(transport)).instances()
    }

    #[tokio::test]
    async fn find_by_id_sends_bearer_and_instance_query() {
        let transport = FakeTransport::new(200, FULL_INSTANCE_JSON);
        let service = make_service(transport.clone());

        let instance = service
            .find_by_id(
                &AccessToken::new("tok").unwrap(),
                &InstanceId::new("LITE-ABC123").unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(instance.instance_id.as_deref(), Some("LITE-ABC123"));
        assert_eq!(instance.messages_sent, Some(90210));
        assert_eq!(instance.expires, Some(1_748_707_717_000));
        assert!(instance.is_connected());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url.as_str(),
            "https://example.invalid/v1/instance/fetch-instance?instanceId=LITE-ABC123"
        );
        assert_eq!(header(&request, "Authorization"), Some("Bearer tok"));
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn find_by_id_with_passes_maps_through() {
        let transport = FakeTransport::new(200, r#"{"instanceId":"A"}"#);
        let service = make_service(transport.clone());

        let headers = BTreeMap::from([("X-Tenant".to_owned(), "t1".to_owned())]);
        let query = BTreeMap::from([("instanceId".to_owned(), "A".to_owned())]);
        service.find_by_id_with(&headers, &query).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(header(&request, "X-Tenant"), Some("t1"));
        assert_eq!(header(&request, "Authorization"), None);
        assert_eq!(request.url.query(), Some("instanceId=A"));
    }

    #[tokio::test]
    async fn find_by_id_maps_bad_body_to_parse_error() {
        let service = make_service(FakeTransport::new(200, r#"{"connected":"yes"}"#));
        let err = service
            .find_by_id(&AccessToken::new("t").unwrap(), &InstanceId::new("i").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, WapiError::Parse(_)));
    }

    #[tokio::test]
    async fn find_by_id_surfaces_remote_error() {
        let service = make_service(FakeTransport::new(401, "invalid token"));
        let err = service
            .find_by_id(&AccessToken::new("t").unwrap(), &InstanceId::new("i").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WapiError::Remote { status: 401, ref body } if body == "invalid token"
        ));
    }
}
