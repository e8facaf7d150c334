use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BlacklistId(Uuid);

impl BlacklistId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
