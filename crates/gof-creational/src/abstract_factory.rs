//! Abstract factory: construct whole families of widgets that belong
//! together.
//!
//! A screen composed from one [`WidgetFactory`] can never mix a light
//! button into a dark theme — the factory is the only place concrete
//! widget types appear, and each factory hands out a single family.
//! [`StatusBar::render_with`] shows the second half of the contract:
//! products of one family can collaborate knowing their counterpart comes
//! from the same family.

use std::fmt;
use std::str::FromStr;

use gof_core::errors::Error;

/// A clickable widget.
pub trait Button {
    /// Draw this button.
    fn render(&self) -> String;

    /// The family this widget was created for.
    fn theme_name(&self) -> &'static str;
}

/// A passive widget that reports application state.
pub trait StatusBar {
    /// Draw this status bar on its own.
    fn render(&self) -> String;

    /// Draw this status bar while reporting on `button`.
    ///
    /// The collaboration only reads the abstract [`Button`] interface, but
    /// a factory-composed screen guarantees both widgets share a family.
    fn render_with(&self, button: &dyn Button) -> String;

    /// The family this widget was created for.
    fn theme_name(&self) -> &'static str;
}

/// The abstract factory: one method per product in the family.
pub trait WidgetFactory {
    /// Construct this family's button.
    fn create_button(&self) -> Box<dyn Button>;

    /// Construct this family's status bar.
    fn create_status_bar(&self) -> Box<dyn StatusBar>;
}

// ── The light family ─────────────────────────────────────────────────────────

/// Factory for the light widget family.
#[derive(Debug, Default, Clone, Copy)]
pub struct LightTheme;

#[derive(Debug)]
struct LightButton;

#[derive(Debug)]
struct LightStatusBar;

impl Button for LightButton {
    fn render(&self) -> String {
        String::from("[light] button")
    }

    fn theme_name(&self) -> &'static str {
        "light"
    }
}

impl StatusBar for LightStatusBar {
    fn render(&self) -> String {
        String::from("[light] status bar")
    }

    fn render_with(&self, button: &dyn Button) -> String {
        format!("[light] status bar reporting on {}", button.render())
    }

    fn theme_name(&self) -> &'static str {
        "light"
    }
}

impl WidgetFactory for LightTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_status_bar(&self) -> Box<dyn StatusBar> {
        Box::new(LightStatusBar)
    }
}

// ── The dark family ──────────────────────────────────────────────────────────

/// Factory for the dark widget family.
#[derive(Debug, Default, Clone, Copy)]
pub struct DarkTheme;

#[derive(Debug)]
struct DarkButton;

#[derive(Debug)]
struct DarkStatusBar;

impl Button for DarkButton {
    fn render(&self) -> String {
        String::from("[dark] button")
    }

    fn theme_name(&self) -> &'static str {
        "dark"
    }
}

impl StatusBar for DarkStatusBar {
    fn render(&self) -> String {
        String::from("[dark] status bar")
    }

    fn render_with(&self, button: &dyn Button) -> String {
        format!("[dark] status bar reporting on {}", button.render())
    }

    fn theme_name(&self) -> &'static str {
        "dark"
    }
}

impl WidgetFactory for DarkTheme {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_status_bar(&self) -> Box<dyn StatusBar> {
        Box::new(DarkStatusBar)
    }
}

// ── Theme selection ──────────────────────────────────────────────────────────

/// The widget families the catalog ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// Every supported theme, in declaration order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The parseable name of this theme.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Hand out the factory for this theme's widget family.
    pub fn factory(self) -> Box<dyn WidgetFactory> {
        match self {
            Theme::Light => Box::new(LightTheme),
            Theme::Dark => Box::new(DarkTheme),
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| Error::UnknownVariant {
                name: s.to_owned(),
                expected: Theme::ALL.map(Theme::name).join(", "),
            })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compose a two-widget screen from whatever family `factory` produces.
///
/// The client code here never names a concrete widget type — that is the
/// point of the pattern.
///
/// # Example
/// ```
/// use gof_creational::abstract_factory::{compose_screen, Theme};
///
/// let screen = compose_screen(Theme::Dark.factory().as_ref());
/// assert!(screen.contains("[dark] button"));
/// ```
pub fn compose_screen(factory: &dyn WidgetFactory) -> String {
    let button = factory.create_button();
    let status_bar = factory.create_status_bar();
    format!(
        "{}\n{}",
        button.render(),
        status_bar.render_with(button.as_ref())
    )
}
