//! Carrier arrangement state type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an automobile. `0` is reserved as the empty-slot sentinel.
pub type AutomobileId = u32;

/// Identifier of a carrier slot. Slot ids are 1-indexed by convention and
/// are supplied as an ordered list; a slot's position in that list is its
/// physical index on the carrier.
pub type SlotId = u32;

/// Sentinel occupant marking an empty slot.
pub const EMPTY: AutomobileId = 0;

/// A full assignment of automobiles to carrier slots at a point in time.
///
/// One entry per slot position, each either [`EMPTY`] or the id of the
/// automobile occupying that slot. A non-empty id appears in at most one
/// slot. Arrangements compare and hash by value, so two arrangements with
/// identical slot contents are interchangeable as map keys regardless of
/// provenance.
///
/// # Examples
///
/// ```
/// use u_loading::models::{Arrangement, EMPTY};
///
/// let mut a = Arrangement::empty(5);
/// assert_eq!(a.slot_count(), 5);
/// assert!(a.is_all_empty());
///
/// a.place(2, 7);
/// assert_eq!(a.occupant(2), 7);
/// assert_eq!(a.position_of(7), Some(2));
///
/// a.clear(2);
/// assert_eq!(a.occupant(2), EMPTY);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Arrangement(Vec<AutomobileId>);

impl Arrangement {
    /// Creates an arrangement with every slot empty.
    pub fn empty(slot_count: usize) -> Self {
        Self(vec![EMPTY; slot_count])
    }

    /// Creates an arrangement from raw slot contents.
    pub fn from_slots(slots: Vec<AutomobileId>) -> Self {
        Self(slots)
    }

    /// Number of slots on the carrier.
    pub fn slot_count(&self) -> usize {
        self.0.len()
    }

    /// Raw slot contents, lowest position first.
    pub fn slots(&self) -> &[AutomobileId] {
        &self.0
    }

    /// Occupant of the slot at `position`, or [`EMPTY`].
    pub fn occupant(&self, position: usize) -> AutomobileId {
        self.0[position]
    }

    /// Returns `true` if the slot at `position` is empty.
    pub fn is_empty_at(&self, position: usize) -> bool {
        self.0[position] == EMPTY
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_all_empty(&self) -> bool {
        self.0.iter().all(|&id| id == EMPTY)
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|&&id| id != EMPTY).count()
    }

    /// Places `automobile` into the slot at `position`.
    pub fn place(&mut self, position: usize, automobile: AutomobileId) {
        self.0[position] = automobile;
    }

    /// Empties the slot at `position`.
    pub fn clear(&mut self, position: usize) {
        self.0[position] = EMPTY;
    }

    /// Position of the slot holding `automobile`, if it is on board.
    pub fn position_of(&self, automobile: AutomobileId) -> Option<usize> {
        self.0.iter().position(|&id| id == automobile)
    }

    /// Occupant ids read from the highest slot position down to the lowest,
    /// with empty slots skipped.
    ///
    /// The highest position is loaded first, so this reading is the
    /// physical loading order: the last entry sits at the low, accessible
    /// end of the carrier (last loaded, first accessible).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_loading::models::Arrangement;
    ///
    /// let a = Arrangement::from_slots(vec![3, 0, 1, 0, 2]);
    /// assert_eq!(a.loading_order(), vec![2, 1, 3]);
    /// ```
    pub fn loading_order(&self) -> Vec<AutomobileId> {
        self.0
            .iter()
            .rev()
            .copied()
            .filter(|&id| id != EMPTY)
            .collect()
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}
