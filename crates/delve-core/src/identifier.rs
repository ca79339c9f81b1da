//! Room identifiers backed by a global string interner.
//!
//! Room graphs refer to the same identifiers many times (as keys, parent
//! references and child lists). [`RoomId`] interns the string once and is
//! `Copy` afterwards, so placed rooms can carry their child lists without
//! cloning strings.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for room identifiers.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Runs `f` with exclusive access to the interner.
fn with_interner<T>(f: impl FnOnce(&mut DefaultStringInterner) -> T) -> T {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Identifier of a room in a dungeon graph.
///
/// # Examples
///
/// ```
/// use delve_core::identifier::RoomId;
///
/// let start = RoomId::new("start");
/// assert_eq!(start, "start");
/// assert_eq!(start, RoomId::new("start"));
/// assert_ne!(start, RoomId::new("end"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(DefaultSymbol);

impl RoomId {
    /// Creates a `RoomId` from a string slice, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Identifier of the root room every dungeon graph starts from.
    pub fn root() -> Self {
        Self::new(crate::graph::ROOT_ROOM_ID)
    }

    /// Returns `true` if this is the root room identifier.
    pub fn is_root(self) -> bool {
        self == crate::graph::ROOT_ROOM_ID
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_owned()
        });
        f.write_str(&name)
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoomId({:?})", self.to_string())
    }
}

impl From<&str> for RoomId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for RoomId {
    /// Allows direct comparison with string slices: `id == "start"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.get(other)).is_some_and(|symbol| symbol == self.0)
    }
}

impl PartialEq<&str> for RoomId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for RoomId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
