//! Fetch archives from the data service.

use std::fmt;

use reqwest::blocking::Client;

use crate::errors::CdaacErr;

/// User name and password for the data service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Package up a user name and password.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Get the user name.
    pub fn user(&self) -> &str {
        &self.user
    }
}

// Keep the password out of logs and error messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"********")
            .finish()
    }
}

/// Result of asking the service for one archive.
#[derive(Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The body of a successful response.
    Archive(Vec<u8>),
    /// The server answered, but not with a success code.
    NotOk {
        /// The requested URL.
        url: String,
        /// The status code returned.
        status: u16,
    },
}

/// Something that can retrieve an archive given its URL.
pub trait Fetch {
    /// Perform a single authenticated request for `url`.
    ///
    /// Only transport level failures are errors. Any response from the server, successful or not,
    /// is a `FetchOutcome`.
    fn fetch(&self, url: &str, credentials: &Credentials) -> Result<FetchOutcome, CdaacErr>;
}

/// Fetch over HTTP with basic authentication.
#[derive(Debug, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client, timeouts are the client's defaults.
    pub fn new() -> Self {
        HttpFetcher {
            client: Client::new(),
        }
    }

    /// Create a fetcher around a pre-configured client.
    pub fn with_client(client: Client) -> Self {
        HttpFetcher { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, credentials: &Credentials) -> Result<FetchOutcome, CdaacErr> {
        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.user, Some(&credentials.password))
            .send()?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes()?;
            Ok(FetchOutcome::Archive(body.to_vec()))
        } else {
            Ok(FetchOutcome::NotOk {
                url: url.to_owned(),
                status: status.as_u16(),
            })
        }
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
