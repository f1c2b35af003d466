//! Remote directory client.
//!
//! Translates the four user intents (search, list, create, delete) into
//! HTTP calls against the backend collection and reconciles each result
//! into the shared [`SelectionStore`]. This is the only code that writes
//! the store; screens read and subscribe.
//!
//! Each operation is a plain `Idle -> InFlight -> {Success, Failure}` flow:
//! no streaming, no partial results, no automatic retries. Failures are
//! returned once and the caller decides whether to re-trigger.

mod error;
mod wire;

pub use error::DirectoryError;

use reqwest::{Client, Response};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::hunter::{Field, FieldError, Hunter, HunterDraft};
use crate::store::SelectionStore;
use wire::{CreateResponse, ErrorBody, ListResponse, NewHunter, SearchResponse};

const COLLECTION_PATH: &str = "/balanceador/cazadores";

/// HTTP client for the hunters collection endpoint.
///
/// Cheap to clone; clones share the connection pool and the store handle.
#[derive(Clone)]
pub struct DirectoryClient {
    http: Client,
    config: Config,
    store: SelectionStore,
}

impl DirectoryClient {
    /// Build a client from configuration and the shared store.
    pub fn new(config: Config, store: SelectionStore) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("failed to build http client");
        Self {
            http,
            config,
            store,
        }
    }

    /// The store this client reconciles results into.
    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    fn collection_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            COLLECTION_PATH
        )
    }

    /// Look up a hunter by name and select the first match.
    ///
    /// Blank or whitespace-only input is rejected locally; no request is
    /// sent. A response with `found == false` or an empty match list maps
    /// to [`DirectoryError::NotFound`].
    pub async fn search(&self, name: &str) -> Result<Hunter, DirectoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FieldError::new(Field::Name, "enter a name to search").into());
        }

        let url = format!("{}/buscar", self.collection_url());
        debug!(name = %name, "searching for hunter");
        let resp = self
            .http
            .get(&url)
            .query(&[("nombre", name)])
            .send()
            .await?;
        let resp = check_status(resp).await?;
        let body: SearchResponse = resp.json().await?;

        let mut matches = body.hunters;
        if !body.found || matches.is_empty() {
            return Err(DirectoryError::NotFound {
                message: body
                    .message
                    .unwrap_or_else(|| format!("no hunter named '{}'", name)),
            });
        }

        // The server may return several matches; the first one wins.
        let hunter = Hunter::from(matches.remove(0));
        info!(name = %hunter.name, "hunter selected from search");
        self.store.set_selected(Some(hunter.clone()));
        Ok(hunter)
    }

    /// Fetch the full collection and replace the store's copy wholesale.
    ///
    /// Overlapping calls are not coordinated: whichever response completes
    /// last determines the final collection.
    pub async fn list_all(&self) -> Result<Vec<Hunter>, DirectoryError> {
        debug!("fetching hunter collection");
        let resp = self.http.get(self.collection_url()).send().await?;
        let resp = check_status(resp).await?;
        let body: ListResponse = resp.json().await?;

        let hunters: Vec<Hunter> = body.hunters.into_iter().map(Hunter::from).collect();
        info!(count = hunters.len(), "hunter collection replaced");
        self.store.set_collection(hunters.clone());
        Ok(hunters)
    }

    /// Validate a draft, submit it, and select the server-assigned record.
    ///
    /// The selection afterwards is the server's echo, which carries the
    /// assigned identity, not the local draft.
    pub async fn create(&self, draft: &HunterDraft) -> Result<Hunter, DirectoryError> {
        let valid = draft.validate()?;

        debug!(name = %valid.name, "creating hunter");
        let resp = self
            .http
            .post(self.collection_url())
            .json(&NewHunter::from(&valid))
            .send()
            .await?;
        let resp = check_status(resp).await?;
        let body: CreateResponse = resp.json().await?;

        let hunter = Hunter::from(body.hunter);
        info!(name = %hunter.name, id = ?hunter.id, "hunter created");
        self.store.set_selected(Some(hunter.clone()));
        Ok(hunter)
    }

    /// Delete a hunter by identity.
    ///
    /// Requires the target to carry an identity. On success the selection
    /// is cleared only when it references the same identity; the collection
    /// is left untouched and callers re-list to see the deletion.
    pub async fn delete(&self, target: &Hunter) -> Result<(), DirectoryError> {
        let id = target
            .id
            .as_ref()
            .ok_or_else(|| FieldError::new(Field::Identity, "hunter has no identity"))?;

        debug!(id = %id, "deleting hunter");
        let url = format!("{}/{}", self.collection_url(), id);
        let resp = self.http.delete(&url).send().await?;
        check_status(resp).await?;

        info!(id = %id, "hunter deleted");
        let selected_id = self.store.selected().and_then(|hunter| hunter.id);
        if selected_id.as_ref() == Some(id) {
            self.store.set_selected(None);
        }
        Ok(())
    }
}

/// Map a non-2xx response to [`DirectoryError::Remote`], pulling the message
/// out of the error body when the backend provides one.
async fn check_status(resp: Response) -> Result<Response, DirectoryError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    warn!(status = %status, message = %message, "backend rejected request");
    Err(DirectoryError::Remote {
        status: status.as_u16(),
        message,
    })
}
