//! Factory method: let the creator subtype decide which product to build.
//!
//! [`DocumentCreator::create_document`] is the factory method. The default
//! [`edit_document`](DocumentCreator::edit_document) workflow is written once
//! against the abstract [`Document`] and works for every creator — the
//! deciding `match` lives nowhere; dispatch does the deciding.
//!
//! [`DocumentKind`] adds the flat entry point: parse a format name, get the
//! matching creator. [`DocumentRegistry`] goes one step further and lets
//! callers register new products at runtime, under names this module has
//! never heard of. Unknown names report
//! [`Error::UnknownVariant`](gof_core::Error::UnknownVariant) instead of
//! panicking, in both cases.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use gof_core::errors::{Error, Result};

/// A document produced by some [`DocumentCreator`].
pub trait Document: fmt::Debug {
    /// Short format name (`"pdf"`, `"text"`, `"spreadsheet"`).
    fn format(&self) -> &'static str;

    /// Open the document, reporting what happened.
    fn open(&self) -> String;

    /// Save the document to `path`, reporting what happened.
    fn save(&self, path: &str) -> String;
}

/// A fixed-layout document.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfDocument;

impl Document for PdfDocument {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn open(&self) -> String {
        String::from("opening PDF document")
    }

    fn save(&self, path: &str) -> String {
        format!("saving PDF document to {path}")
    }
}

/// A plain-text document.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextDocument;

impl Document for TextDocument {
    fn format(&self) -> &'static str {
        "text"
    }

    fn open(&self) -> String {
        String::from("opening text document")
    }

    fn save(&self, path: &str) -> String {
        format!("saving text document to {path}")
    }
}

/// A tabular document.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpreadsheetDocument;

impl Document for SpreadsheetDocument {
    fn format(&self) -> &'static str {
        "spreadsheet"
    }

    fn open(&self) -> String {
        String::from("opening spreadsheet document")
    }

    fn save(&self, path: &str) -> String {
        format!("saving spreadsheet document to {path}")
    }
}

/// The creator side of the pattern.
///
/// Implementors override only [`create_document`](Self::create_document);
/// the editing workflow comes for free.
pub trait DocumentCreator {
    /// The factory method: construct the product this creator is for.
    fn create_document(&self) -> Box<dyn Document>;

    /// Open, edit, and save a document, using whatever
    /// [`create_document`](Self::create_document) returns.
    ///
    /// Returns one line per step so callers (and tests) can inspect the
    /// workflow.
    fn edit_document(&self, path: &str) -> Vec<String> {
        let document = self.create_document();
        vec![
            document.open(),
            format!("editing {} content", document.format()),
            document.save(path),
        ]
    }
}

/// Creates [`PdfDocument`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfCreator;

impl DocumentCreator for PdfCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(PdfDocument)
    }
}

/// Creates [`TextDocument`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextCreator;

impl DocumentCreator for TextCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(TextDocument)
    }
}

/// Creates [`SpreadsheetDocument`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpreadsheetCreator;

impl DocumentCreator for SpreadsheetCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(SpreadsheetDocument)
    }
}

/// The document formats the catalog knows how to create.
///
/// # Example
/// ```
/// use gof_creational::factory_method::DocumentKind;
///
/// let kind: DocumentKind = "pdf".parse()?;
/// let steps = kind.creator().edit_document("report.pdf");
/// assert_eq!(steps.len(), 3);
/// # Ok::<(), gof_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Fixed-layout documents.
    Pdf,
    /// Plain-text documents.
    Text,
    /// Tabular documents.
    Spreadsheet,
}

impl DocumentKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [DocumentKind; 3] =
        [DocumentKind::Pdf, DocumentKind::Text, DocumentKind::Spreadsheet];

    /// The parseable name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Text => "text",
            DocumentKind::Spreadsheet => "spreadsheet",
        }
    }

    /// Hand out the creator for this kind.
    pub fn creator(self) -> Box<dyn DocumentCreator> {
        match self {
            DocumentKind::Pdf => Box::new(PdfCreator),
            DocumentKind::Text => Box::new(TextCreator),
            DocumentKind::Spreadsheet => Box::new(SpreadsheetCreator),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownVariant {
                name: s.to_owned(),
                expected: DocumentKind::ALL.map(DocumentKind::name).join(", "),
            })
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A factory configured at runtime: creators registered under a name,
/// looked up on demand.
///
/// Where [`DocumentKind`] fixes the product set at compile time, the
/// registry is open: callers add products without touching this module.
///
/// # Example
/// ```
/// use gof_creational::factory_method::DocumentRegistry;
///
/// let registry = DocumentRegistry::with_defaults();
/// let document = registry.create("pdf")?;
/// assert_eq!(document.format(), "pdf");
/// # Ok::<(), gof_core::Error>(())
/// ```
#[derive(Default)]
pub struct DocumentRegistry {
    creators: HashMap<String, Box<dyn Fn() -> Box<dyn Document>>>,
}

impl DocumentRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every [`DocumentKind`] pre-registered under its name.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in DocumentKind::ALL {
            registry.register(kind.name(), move || kind.creator().create_document());
        }
        registry
    }

    /// Register the creator for `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: &str, creator: F)
    where
        F: Fn() -> Box<dyn Document> + 'static,
    {
        self.creators.insert(String::from(name), Box::new(creator));
    }

    /// The registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.creators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Create a document by registered name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Document>> {
        match self.creators.get(name) {
            Some(creator) => Ok(creator()),
            None => Err(Error::UnknownVariant {
                name: String::from(name),
                expected: self.names().join(", "),
            }),
        }
    }
}

impl fmt::Debug for DocumentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentRegistry")
            .field("names", &self.names())
            .finish()
    }
}
