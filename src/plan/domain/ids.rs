//! Identifier newtypes for the planning domain.
//!
//! Every entity kind carries its own UUID-backed identifier type so that a
//! sprint id can never be passed where a column id is expected. Provisional
//! identity for not-yet-committed sprints is a separate type
//! ([`DraftSprintId`]) rather than a string-prefix convention, so the
//! provisional and permanent id spaces cannot collide by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(Uuid);

/// Unique identifier for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

/// Unique identifier for a committed sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SprintId(Uuid);

/// Unique identifier for a workflow column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(Uuid);

/// Unique identifier for a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

/// Provisional identifier for a sprint staged in a draft session but not yet
/// present in the canonical store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftSprintId(Uuid);

macro_rules! impl_uuid_id {
    ($name:ident) => {
        impl $name {
            /// Creates a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_uuid_id!(WorkspaceId);
impl_uuid_id!(ProjectId);
impl_uuid_id!(SprintId);
impl_uuid_id!(ColumnId);
impl_uuid_id!(TaskId);
impl_uuid_id!(DraftSprintId);

/// Identity of a sprint as seen by the draft and commit layers.
///
/// A draft entry keyed by [`SprintKey::Committed`] is a pending modification
/// to a sprint that already exists in the canonical store; one keyed by
/// [`SprintKey::Provisional`] describes a sprint that will only exist once
/// the session commits. The commit engine uses this distinction to decide
/// between update and insert without any auxiliary bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SprintKey {
    /// Identifies a sprint present in the canonical store.
    Committed(SprintId),
    /// Identifies a sprint that exists only inside a draft session.
    Provisional(DraftSprintId),
}

impl SprintKey {
    /// Returns `true` when the key names a sprint not yet committed.
    #[must_use]
    pub const fn is_provisional(self) -> bool {
        matches!(self, Self::Provisional(_))
    }

    /// Returns the committed sprint id, if any.
    #[must_use]
    pub const fn committed(self) -> Option<SprintId> {
        match self {
            Self::Committed(id) => Some(id),
            Self::Provisional(_) => None,
        }
    }

    /// Returns the provisional sprint id, if any.
    #[must_use]
    pub const fn provisional(self) -> Option<DraftSprintId> {
        match self {
            Self::Committed(_) => None,
            Self::Provisional(id) => Some(id),
        }
    }
}
