//! Opening bookmarks with the system URL handler

use std::io;
use thiserror::Error;

use crate::store::{is_valid_url, Bookmark};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("refusing to open invalid URL {0:?}")]
    InvalidUrl(String),

    #[error("failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can hand a URL to a browser
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Opens URLs with the OS default handler, or with a named application
#[derive(Debug, Clone, Default)]
pub struct SystemOpener {
    browser: Option<String>,
}

impl SystemOpener {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        let result = match &self.browser {
            Some(app) => open::with(url, app),
            None => open::that(url),
        };
        result.map_err(|source| LaunchError::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Validate the bookmark's URL, then open it
pub fn launch(opener: &dyn UrlOpener, bookmark: &Bookmark) -> Result<(), LaunchError> {
    if !is_valid_url(&bookmark.url) {
        log::error!("{:?} has an invalid URL: {}", bookmark.name, bookmark.url);
        return Err(LaunchError::InvalidUrl(bookmark.url.clone()));
    }

    match opener.open(&bookmark.url) {
        Ok(()) => {
            log::info!("opened {}", bookmark.url);
            Ok(())
        }
        Err(e) => {
            log::error!("{}", e);
            Err(e)
        }
    }
}
