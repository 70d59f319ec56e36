//! Joint collaborator.
//!
//! Joints are described elsewhere in the scene document. Motors only need the
//! joint name, so this type carries nothing else.

/// A mechanical connection between two body parts, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Joint {
    name: String,
}

impl Joint {
    /// Create a joint handle with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The joint name as it appears in the scene document.
    pub fn name(&self) -> &str {
        &self.name
    }
}
