use std::time::Duration;

use log::{debug, trace};
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, Response};
use serde::Serialize;
use url::Url;

use crate::{Error, Listener, Path, Result};

/// Entry point to a Realtime Database instance, e.g.
/// `https://smartfan-default-rtdb.firebaseio.com`.
#[derive(Clone)]
pub struct Database {
    base_url: Url,
    auth: Option<String>,
    http: HttpClient,
}

impl Database {
    pub fn new(url: &str, auth: Option<String>) -> Result<Database> {
        let base_url = Url::parse(url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(url.to_string()));
        }

        let http = HttpClient::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Database {
            base_url,
            auth,
            http,
        })
    }

    pub fn reference<P: Into<Path>>(&self, path: P) -> Reference {
        Reference {
            database: self.clone(),
            path: path.into(),
        }
    }

    fn url(&self, path: &Path, silent: bool) -> Result<Url> {
        let mut url = self.base_url.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?;

            segments.pop_if_empty();

            match path.segments().split_last() {
                Some((last, parents)) => {
                    segments.extend(parents);
                    segments.push(&format!("{last}.json"));
                }
                None => {
                    segments.push(".json");
                }
            }
        }

        if let Some(auth) = &self.auth {
            url.query_pairs_mut().append_pair("auth", auth);
        }

        if silent {
            url.query_pairs_mut().append_pair("print", "silent");
        }

        Ok(url)
    }
}

/// A node of the database addressed by path.
#[derive(Clone)]
pub struct Reference {
    database: Database,
    path: Path,
}

impl Reference {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, segment: &str) -> Reference {
        Reference {
            database: self.database.clone(),
            path: self.path.child(segment),
        }
    }

    /// Replaces the value at this path.
    pub async fn set<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let url = self.database.url(&self.path, true)?;
        debug!("put {}", self.path);

        let response = self.database.http.put(url).json(value).send().await?;
        check_status(response)?;

        trace!("stored {}", self.path);

        Ok(())
    }

    /// Streams the value of this node every time it changes. The first
    /// event carries the current value.
    pub fn listen(&self) -> Listener {
        Listener::spawn(self.clone())
    }

    pub(crate) async fn open_stream(&self) -> Result<Response> {
        let url = self.database.url(&self.path, false)?;

        let response = self
            .database
            .http
            .get(url)
            .header(ACCEPT, "text/event-stream")
            .send()
            .await?;

        check_status(response)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status(status))
    }
}
