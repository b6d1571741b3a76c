use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("slack api request failed: {0}")]
    Http(#[from] reqwest::Error),
}
