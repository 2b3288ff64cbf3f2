use core::fmt;

use serde::Serialize;

/// Vertices are plain indices in `0..vertex_count`.
pub type Vertex = usize;

/// Position of an edge inside the network's edge store.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
