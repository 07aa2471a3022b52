use serde::Deserialize;

/// Body of the greeting endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Greeting {
    pub message: String,
}
