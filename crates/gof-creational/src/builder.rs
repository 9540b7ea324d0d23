//! Builder: assemble a multi-part product step by step.
//!
//! The product here is a [`Workstation`], a plain list of installed parts.
//! [`WorkstationBuilder`] names the steps; [`StandardBuilder`] records them;
//! [`Director`] captures the two recipes worth writing down. A successful
//! `build` hands over the finished product *and resets the builder*, so one
//! builder can assemble any number of workstations.

use gof_core::ensure;
use gof_core::errors::{Error, Result};
use std::mem;

const PROCESSOR: &str = "8-core processor";
const MEMORY: &str = "32 GiB memory";
const GRAPHICS: &str = "discrete graphics";

/// The assembled product: an ordered list of installed parts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Workstation {
    parts: Vec<String>,
}

impl Workstation {
    /// The installed parts, in installation order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// One-line inventory of the installed parts.
    pub fn list_parts(&self) -> String {
        format!("workstation parts: {}", self.parts.join(", "))
    }
}

/// The assembly steps a workstation builder supports.
///
/// Every step returns the builder again, so recipes read as chains even
/// through a `dyn` reference:
///
/// ```
/// use gof_creational::builder::{StandardBuilder, WorkstationBuilder};
///
/// let mut builder = StandardBuilder::new();
/// builder.add_processor().add_memory();
/// let workstation = builder.build()?;
/// assert_eq!(workstation.parts().len(), 2);
/// # Ok::<(), gof_core::Error>(())
/// ```
pub trait WorkstationBuilder {
    /// Install a processor.
    fn add_processor(&mut self) -> &mut dyn WorkstationBuilder;

    /// Install memory.
    fn add_memory(&mut self) -> &mut dyn WorkstationBuilder;

    /// Install a graphics card.
    fn add_graphics(&mut self) -> &mut dyn WorkstationBuilder;

    /// Hand over the assembled product and reset this builder for the
    /// next one.
    ///
    /// Implementations may refuse an incomplete assembly; a refused build
    /// leaves the installed parts in place so the caller can finish the
    /// job and try again.
    fn build(&mut self) -> Result<Workstation>;
}

/// The stock builder: records each step as a named part.
///
/// Its [`build`](WorkstationBuilder::build) enforces two rules: something
/// must have been installed, and every workstation needs a processor.
#[derive(Debug, Default)]
pub struct StandardBuilder {
    parts: Vec<String>,
}

impl StandardBuilder {
    /// Start with an empty parts list.
    pub fn new() -> Self {
        Self::default()
    }

    fn install(&mut self, part: &str) {
        self.parts.push(String::from(part));
    }
}

impl WorkstationBuilder for StandardBuilder {
    fn add_processor(&mut self) -> &mut dyn WorkstationBuilder {
        self.install(PROCESSOR);
        self
    }

    fn add_memory(&mut self) -> &mut dyn WorkstationBuilder {
        self.install(MEMORY);
        self
    }

    fn add_graphics(&mut self) -> &mut dyn WorkstationBuilder {
        self.install(GRAPHICS);
        self
    }

    fn build(&mut self) -> Result<Workstation> {
        ensure!(
            !self.parts.is_empty(),
            "a workstation needs at least one part"
        );
        if !self.parts.iter().any(|part| part == PROCESSOR) {
            return Err(Error::MissingComponent("processor".into()));
        }
        Ok(Workstation {
            parts: mem::take(&mut self.parts),
        })
    }
}

/// The recipes worth naming: assembly orders used often enough to share.
///
/// A director is optional — clients holding a builder can always run the
/// steps themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    /// The cheapest workstation that still boots.
    pub fn build_minimal(builder: &mut dyn WorkstationBuilder) -> Result<Workstation> {
        builder.add_processor();
        builder.build()
    }

    /// Everything installed.
    pub fn build_full(builder: &mut dyn WorkstationBuilder) -> Result<Workstation> {
        builder.add_processor().add_memory().add_graphics();
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn steps_record_parts_in_order() {
        let mut builder = StandardBuilder::new();
        builder.add_graphics().add_processor();
        let workstation = builder.build().unwrap();
        assert_eq!(
            workstation.parts(),
            ["discrete graphics", "8-core processor"]
        );
        assert_eq!(
            workstation.list_parts(),
            "workstation parts: discrete graphics, 8-core processor"
        );
    }

    #[test]
    fn director_recipes_differ() {
        let mut builder = StandardBuilder::new();
        let minimal = Director::build_minimal(&mut builder).unwrap();
        assert_eq!(minimal.parts(), ["8-core processor"]);

        let full = Director::build_full(&mut builder).unwrap();
        assert_eq!(
            full.parts(),
            ["8-core processor", "32 GiB memory", "discrete graphics"]
        );
    }

    #[test]
    fn successful_build_resets_the_builder() {
        let mut builder = StandardBuilder::new();
        builder.add_processor();
        let first = builder.build().unwrap();
        assert_eq!(first.parts().len(), 1);

        // The handover emptied the builder, so an immediate rebuild has
        // nothing to assemble.
        let err = builder.build().unwrap_err();
        assert_eq!(
            err,
            Error::Precondition("a workstation needs at least one part".into())
        );
    }

    #[test]
    fn refused_build_keeps_the_parts() {
        let mut builder = StandardBuilder::new();
        builder.add_memory();
        assert_eq!(
            builder.build().unwrap_err(),
            Error::MissingComponent("processor".into())
        );

        // The memory is still installed; adding the processor completes
        // the assembly.
        builder.add_processor();
        let workstation = builder.build().unwrap();
        assert_eq!(
            workstation.parts(),
            ["32 GiB memory", "8-core processor"]
        );
    }

    #[test]
    fn empty_builder_refuses_to_build() {
        let mut builder = StandardBuilder::new();
        assert!(builder.build().is_err());
    }

    proptest! {
        #[test]
        fn parts_follow_installation_order(steps in proptest::collection::vec(0..3usize, 1..12)) {
            let mut builder = StandardBuilder::new();
            let mut expected = Vec::new();
            for &step in &steps {
                match step {
                    0 => {
                        builder.add_processor();
                        expected.push("8-core processor");
                    }
                    1 => {
                        builder.add_memory();
                        expected.push("32 GiB memory");
                    }
                    _ => {
                        builder.add_graphics();
                        expected.push("discrete graphics");
                    }
                }
            }

            if steps.contains(&0) {
                let workstation = builder.build().unwrap();
                prop_assert_eq!(workstation.parts(), expected);
            } else {
                prop_assert_eq!(
                    builder.build().unwrap_err(),
                    Error::MissingComponent("processor".into())
                );
            }
        }
    }
}
