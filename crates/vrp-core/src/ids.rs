//! Arena handles.
//!
//! Every cross-reference in the solver — node to depot arc, arc to its
//! inverse, node to its current route — is a plain index into an owning
//! `Vec`.  Wrapping each index family in its own type keeps the families
//! from being mixed up at compile time while costing nothing at runtime.
//! The inner integer stays `pub` for pattern matching and literal
//! construction in tests; real indexing goes through [`index`](NodeId::index).
//!
//! A fresh handle that points at nothing yet holds the `INVALID` sentinel
//! (the all-ones bit pattern), which trips the arena's bounds check the
//! moment it is dereferenced by mistake.

/// Define one index family: the wrapper type, its sentinel, conversions,
/// and a `Type(n)` display form.
macro_rules! define_id {
    ($name:ident($inner:ty): $doc:literal) => {
        #[doc = $doc]
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Reserved "points at nothing" value.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The arena slot this handle addresses.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            /// Fails when the slot number overflows the handle's integer
            /// width (an instance too large for this solver anyway).
            fn try_from(slot: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(slot).map($name)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

define_id!(NodeId(u32): "A node of the instance.  Node 0 is always the depot.");

define_id!(EdgeId(u32): "A directed arc of the instance.");

define_id!(RouteId(u32): "A route slot in a construction's route arena.  Only meaningful \
                          within one construction — the arena is rebuilt and all handles \
                          reissued every time a solution is constructed.");

impl NodeId {
    /// The depot.  Every route begins and ends here.
    pub const DEPOT: NodeId = NodeId(0);
}
