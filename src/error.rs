use crate::Domain;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("illegal input: expected bytes of length {expected} for {domain}, got {got}")]
    Length {
        domain: Domain,
        expected: usize,
        got: usize,
    },

    #[error("value {value} out of range for {domain}")]
    OutOfRange { domain: Domain, value: i128 },

    #[error("{domain} does not hold {requested} values")]
    Kind {
        domain: Domain,
        requested: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
