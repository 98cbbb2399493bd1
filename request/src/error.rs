#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Whether the request was rejected before anything was sent.
    pub fn is_construction(&self) -> bool {
        matches!(self, Error::InvalidUrl(_) | Error::InvalidHeader(_))
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_errors() {
        assert!(Error::InvalidUrl("".to_string()).is_construction());
        assert!(Error::InvalidHeader("bad name".to_string()).is_construction());
        assert!(!Error::InvalidUrl("".to_string()).is_timeout());
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidUrl("relative URL without a base for ".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid url: relative URL without a base for "
        );
    }
}
