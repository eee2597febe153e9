use serde::{Deserialize, Serialize};

/// Liveness payload returned by `GET /`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub message: &'static str,
}
