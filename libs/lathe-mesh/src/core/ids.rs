//! Typed arena ids.
//!
//! Every cross-reference in the mesh is a small integer into one of the
//! arenas. Each arena has its own id type so a face id can never be used to
//! index halfedges. `NONE` replaces null references (an open halfedge has
//! `partner == HalfedgeId::NONE`).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Sentinel for "no reference".
            pub const NONE: Self = Self(u32::MAX);

            /// Id of the arena slot at `index`.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                Self(index as u32)
            }

            /// Arena slot of this id.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Returns true for the `NONE` sentinel.
            #[inline]
            pub fn is_none(self) -> bool {
                self == Self::NONE
            }

            /// Returns true for any id other than `NONE`.
            #[inline]
            pub fn is_some(self) -> bool {
                !self.is_none()
            }

            /// The id `by` slots further along the arena.
            #[inline]
            pub fn offset(self, by: usize) -> Self {
                Self(self.0 + by as u32)
            }

            /// Like [`Self::offset`] but keeps `NONE` unchanged.
            #[inline]
            pub fn shifted(self, by: usize) -> Self {
                if self.is_none() {
                    self
                } else {
                    self.offset(by)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_none() {
                    write!(f, concat!($tag, "#none"))
                } else {
                    write!(f, concat!($tag, "#{}"), self.0)
                }
            }
        }
    };
}

arena_id!(
    /// Identifier of a directed halfedge.
    HalfedgeId,
    "h"
);
arena_id!(
    /// Identifier of a corner-vertex (one use of a position by one face corner).
    VertexId,
    "v"
);
arena_id!(
    /// Identifier of a face.
    FaceId,
    "f"
);
arena_id!(
    /// Identifier of a named surface.
    SurfaceId,
    "s"
);
arena_id!(
    /// Identifier of a named submesh.
    SubmeshId,
    "m"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_distinct_from_valid_ids() {
        assert!(HalfedgeId::NONE.is_none());
        assert!(HalfedgeId(0).is_some());
        assert_eq!(FaceId::from_index(7).index(), 7);
    }

    #[test]
    fn offset_walks_the_arena() {
        assert_eq!(HalfedgeId(4).offset(3), HalfedgeId(7));
        assert_eq!(HalfedgeId(4).shifted(3), HalfedgeId(7));
        assert_eq!(HalfedgeId::NONE.shifted(3), HalfedgeId::NONE);
    }

    #[test]
    fn display_names_the_arena() {
        assert_eq!(VertexId(12).to_string(), "v#12");
        assert_eq!(SurfaceId::NONE.to_string(), "s#none");
    }
}
