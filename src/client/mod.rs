//! In-memory mirror of the server's entry collection, plus the theme flag.
//!
//! Views get a single injectable `EntryClient`; mutations go to the store
//! over HTTP and the mirror is touched only after the server confirms. There
//! is no retry and no optimistic update, so a failed request leaves the
//! mirror exactly as it was.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Entry, EntryPayload};

pub mod theme;

pub use theme::{Theme, ThemeStore};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {msg}")]
    Api { status: u16, msg: String },
}

#[derive(Debug, Deserialize)]
struct ApiError {
    msg: String,
}

pub struct EntryClient {
    http: reqwest::Client,
    base_url: String,
    entries: Vec<Entry>,
    theme: Theme,
    theme_store: ThemeStore,
}

impl EntryClient {
    pub fn new(base_url: impl Into<String>, theme_store: ThemeStore) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            entries: Vec::new(),
            theme: Theme::Light,
            theme_store,
        }
    }

    /// Fetch the full list into the mirror and load the persisted theme
    /// flag. Also the recovery path for mirror divergence after updates.
    pub async fn init(&mut self) -> Result<(), ClientError> {
        self.theme = self.theme_store.load();

        let response = self.http.get(format!("{}/get/", self.base_url)).send().await?;
        let response = check(response).await?;
        self.entries = response.json().await?;

        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Create on the server, then append the returned entry (with its
    /// assigned id) to the mirror.
    pub async fn save_entry(&mut self, payload: &EntryPayload) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}/create/", self.base_url))
            .json(payload)
            .send()
            .await?;
        let response = check(response).await?;

        let created: Entry = response.json().await?;
        log::debug!("saved entry {}", created.id);
        self.entries.push(created);

        Ok(())
    }

    /// Update on the server, then replace the mirror element with the
    /// locally supplied entry. The server re-derives the temporal fields, so
    /// the mirror can disagree with stored state until the next `init`.
    pub async fn update_entry(&mut self, id: &str, entry: Entry) -> Result<(), ClientError> {
        let response = self
            .http
            .put(format!("{}/update/{id}", self.base_url))
            .json(&entry)
            .send()
            .await?;
        check(response).await?;

        log::debug!("updated entry {id}");
        if let Some(slot) = self.entries.iter_mut().find(|e| e.id == id) {
            *slot = entry;
        }

        Ok(())
    }

    pub async fn delete_entry(&mut self, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/delete/{id}", self.base_url))
            .send()
            .await?;
        check(response).await?;

        log::debug!("deleted entry {id}");
        self.entries.retain(|e| e.id != id);

        Ok(())
    }

    /// Flip light/dark and persist the flag. Applying the theme to the view
    /// root is the consumer's job.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.theme_store.save(self.theme) {
            log::warn!("failed to persist theme flag: {e}");
        }
        self.theme
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let msg = serde_json::from_str::<ApiError>(&text)
        .map(|e| e.msg)
        .unwrap_or(text);

    Err(ClientError::Api {
        status: status.as_u16(),
        msg,
    })
}
