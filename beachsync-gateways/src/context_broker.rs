use crate::ngsi_ld;
use beachsync_core::{
    entities::{Entity, Fragment},
    gateways::store::{self, EntityStore},
};
use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    header::CONTENT_TYPE,
    StatusCode, Url,
};
use serde_json::Value;

const NGSI_LD_API_PATH: &str = "ngsi-ld/v1";

/// An [`EntityStore`] backed by an NGSI-LD context broker.
#[derive(Debug, Clone)]
pub struct ContextBrokerClient {
    /// e.g. `http://context-broker/ngsi-ld/v1`
    base_url: String,
    client: Client,
}

impl ContextBrokerClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Uses the NGSI-LD API of the broker at `broker_url`, e.g. `http://context-broker`.
    pub fn for_broker(broker_url: &str, client: Client) -> Self {
        let base_url = format!("{}/{NGSI_LD_API_PATH}", broker_url.trim_end_matches('/'));
        Self::new(base_url, client)
    }

    fn entities_url(&self) -> String {
        format!("{}/entities", self.base_url)
    }

    /// The id is a single percent-encoded path segment.
    fn entity_url(&self, id: &str) -> store::Result<Url> {
        let mut url = Url::parse(&self.entities_url()).map_err(anyhow::Error::from)?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("{} cannot be a base URL", self.base_url))?
            .push(id);
        Ok(url)
    }
}

fn send(request: RequestBuilder, body: &Value) -> store::Result<Response> {
    let body = serde_json::to_vec(body).map_err(anyhow::Error::from)?;
    let response = request
        .header(CONTENT_TYPE, ngsi_ld::CONTENT_TYPE)
        .body(body)
        .send()
        .map_err(anyhow::Error::from)?;
    Ok(response)
}

fn error_from_response(response: Response) -> store::Error {
    let status = response.status();
    let message = response.text().unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => store::Error::NotFound,
        StatusCode::CONFLICT => store::Error::AlreadyExists,
        StatusCode::BAD_REQUEST => store::Error::BadRequest(message),
        _ => store::Error::Unexpected {
            status: status.as_u16(),
            message,
        },
    }
}

impl EntityStore for ContextBrokerClient {
    fn merge_entity(&self, id: &str, fragment: &Fragment) -> store::Result<()> {
        let request = self.client.patch(self.entity_url(id)?);
        let response = send(request, &ngsi_ld::fragment_to_json(fragment))?;
        if !response.status().is_success() {
            return Err(error_from_response(response));
        }
        Ok(())
    }

    fn create_entity(&self, entity: &Entity) -> store::Result<()> {
        let request = self.client.post(self.entities_url());
        let response = send(request, &ngsi_ld::entity_to_json(entity))?;
        if !response.status().is_success() {
            return Err(error_from_response(response));
        }
        if let Some(location) = response.headers().get(reqwest::header::LOCATION) {
            log::debug!("Entity {} created at {location:?}", entity.id);
        }
        Ok(())
    }
}
