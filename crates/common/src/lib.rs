use thiserror::Error;

pub mod types;
pub mod upstream;
pub mod utils;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn core_error_messages() {
        assert_eq!(CoreError::Network("refused".into()).to_string(), "network error: refused");
        assert_eq!(CoreError::Parse("eof".into()).to_string(), "parse error: eof");
    }
}
