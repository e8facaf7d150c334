use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct StudentId(i64);

impl StudentId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
