//! Prototype: create new objects by copying configured ones.
//!
//! Rust's `Clone` *is* the pattern, so this module spends its time on the
//! part that actually bites: what a copy shares with its original.
//! [`Blueprint`] derives a fully deep `Clone` — every `String`, `Vec`, and
//! map entry is duplicated. [`SharedRevisionBlueprint`] clones its
//! `Arc`-held revision cell instead, so copies deliberately alias the same
//! revision history, the classic shallow-copy surprise made explicit in the
//! type.
//!
//! [`Prototype`] extends copying to trait objects held as `Box<dyn ...>`,
//! with a blanket impl for anything `Clone`.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A revision stamp: who-knows-what changed, and how many times.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Revision {
    /// Free-form note attached to the latest change.
    pub note: String,
    /// Number of changes recorded so far.
    pub counter: u32,
}

/// A fully-owned blueprint; `clone` duplicates every field.
///
/// # Example
/// ```
/// use gof_creational::prototype::Blueprint;
///
/// let original = Blueprint::new("engine")
///     .with_item("crankshaft")
///     .with_attribute("material", "steel");
/// let mut copy = original.clone();
/// copy.items.push("piston".into());
///
/// assert_eq!(original.items.len(), 1);
/// assert_eq!(copy.items.len(), 2);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Blueprint {
    /// Display name.
    pub name: String,
    /// Ordered component list.
    pub items: Vec<String>,
    /// Key-value annotations.
    pub attributes: HashMap<String, String>,
    /// Change history stamp.
    pub revision: Revision,
}

impl Blueprint {
    /// An empty blueprint with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            ..Self::default()
        }
    }

    /// Append a component.
    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(String::from(item));
        self
    }

    /// Attach an annotation.
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes
            .insert(String::from(key), String::from(value));
        self
    }
}

/// A blueprint whose revision cell is shared between copies.
///
/// `clone` duplicates the name but only bumps the reference count on the
/// revision cell: every copy sees every other copy's
/// [`bump_revision`](Self::bump_revision). Use [`Blueprint`] when copies
/// must be independent.
#[derive(Debug, Clone)]
pub struct SharedRevisionBlueprint {
    name: String,
    revision: Arc<Mutex<Revision>>,
}

impl SharedRevisionBlueprint {
    /// A blueprint with a fresh, zeroed revision cell.
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            revision: Arc::new(Mutex::new(Revision::default())),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a change, visible to every copy sharing the cell.
    pub fn bump_revision(&self, note: &str) {
        let mut revision = self
            .revision
            .lock()
            .expect("SharedRevisionBlueprint mutex poisoned");
        revision.counter += 1;
        revision.note = String::from(note);
    }

    /// Snapshot the current revision.
    pub fn revision(&self) -> Revision {
        self.revision
            .lock()
            .expect("SharedRevisionBlueprint mutex poisoned")
            .clone()
    }

    /// `true` when both blueprints share one revision cell.
    pub fn shares_revision_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.revision, &other.revision)
    }
}

/// Copying for values held behind `Box<dyn ...>`.
///
/// Auto-implemented for every `Clone + 'static` type;
/// [`as_any`](Self::as_any) recovers the concrete type from a copy when
/// the caller needs it back.
pub trait Prototype {
    /// Clone this value into a fresh heap allocation.
    fn clone_boxed(&self) -> Box<dyn Prototype>;

    /// Borrow this value for downcasting.
    ///
    /// `Box<dyn Prototype>` is itself `Clone + 'static`, so the blanket
    /// impl covers the box too and a direct method call on one resolves
    /// to the box rather than its contents. Go through the trait object
    /// to reach the value inside: `boxed.as_ref().as_any()`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Clone + 'static> Prototype for T {
    fn clone_boxed(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.as_ref().clone_boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deep_clone_is_independent() {
        let original = Blueprint::new("chassis")
            .with_item("frame")
            .with_attribute("finish", "matte");
        let copy = original.clone();
        assert_eq!(copy, original);

        let mut original = original;
        original.items.push(String::from("axle"));
        original
            .attributes
            .insert(String::from("finish"), String::from("gloss"));
        original.revision.counter += 1;

        assert_eq!(copy.items, ["frame"]);
        assert_eq!(copy.attributes["finish"], "matte");
        assert_eq!(copy.revision.counter, 0);
    }

    #[test]
    fn shared_revision_copies_alias_one_cell() {
        let original = SharedRevisionBlueprint::new("chassis");
        let copy = original.clone();
        assert!(original.shares_revision_with(&copy));

        copy.bump_revision("resized mounting holes");

        // Both see the change; the counter advanced once, not twice.
        assert_eq!(original.revision().counter, 1);
        assert_eq!(original.revision().note, "resized mounting holes");
        assert_eq!(original.revision(), copy.revision());
    }

    #[test]
    fn independent_blueprints_do_not_share() {
        let a = SharedRevisionBlueprint::new("a");
        let b = SharedRevisionBlueprint::new("b");
        assert!(!a.shares_revision_with(&b));

        a.bump_revision("only a");
        assert_eq!(b.revision().counter, 0);
    }

    #[test]
    fn boxed_prototypes_clone_and_downcast() {
        let shelf: Vec<Box<dyn Prototype>> = vec![
            Box::new(Blueprint::new("engine").with_item("crankshaft")),
            Box::new(SharedRevisionBlueprint::new("gearbox")),
        ];
        let copies = shelf.clone();

        let engine = copies[0]
            .as_ref()
            .as_any()
            .downcast_ref::<Blueprint>()
            .expect("first prototype is a Blueprint");
        assert_eq!(engine.name, "engine");
        assert_eq!(engine.items, ["crankshaft"]);

        let gearbox = copies[1]
            .as_ref()
            .as_any()
            .downcast_ref::<SharedRevisionBlueprint>()
            .expect("second prototype is a SharedRevisionBlueprint");
        assert_eq!(gearbox.name(), "gearbox");
    }

    #[test]
    fn downcast_reaches_through_the_box() {
        let boxed: Box<dyn Prototype> = Box::new(Blueprint::new("engine"));
        let copy = boxed.clone();

        // A direct call resolves to the box, which carries the blanket
        // impl itself.
        assert!(copy.as_any().downcast_ref::<Blueprint>().is_none());
        assert!(copy.as_any().downcast_ref::<Box<dyn Prototype>>().is_some());

        // Through the trait object, the contents answer.
        let engine = copy
            .as_ref()
            .as_any()
            .downcast_ref::<Blueprint>()
            .expect("contents are a Blueprint");
        assert_eq!(engine.name, "engine");
    }

    proptest! {
        #[test]
        fn deep_clones_never_alias(
            items in proptest::collection::vec("[a-z]{1,8}", 0..8),
            extra in "[a-z]{1,8}",
        ) {
            let mut original = Blueprint::new("generated");
            original.items = items.clone();

            let copy = original.clone();
            original.items.push(extra);

            prop_assert_eq!(&copy.items, &items);
        }
    }
}
