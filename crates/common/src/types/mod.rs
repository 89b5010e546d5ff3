use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Query string of `GET /greeting`.
#[derive(Deserialize, Debug, Default)]
pub struct GreetingQuery {
    pub name: Option<String>,
}

impl GreetingQuery {
    pub const DEFAULT_NAME: &'static str = "Dora";

    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(Self::DEFAULT_NAME)
    }
}
