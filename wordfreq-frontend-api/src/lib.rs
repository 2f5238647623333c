use gloo_net::http::Response;
use thiserror::Error;

mod text;

pub use self::text::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Unexpected HTTP status {status} {status_text}")]
    Status { status: u16, status_text: String },
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_text(response: Response) -> Result<String> {
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.text().await?)
    } else {
        Err(Error::Status {
            status: response.status(),
            status_text: response.status_text(),
        })
    }
}
