//! End-to-end checks that the façade re-exports compose into working
//! pattern demos.

use gof::core::singleton::{DoubleCheckedSingleton, Singleton};
use gof::creational::abstract_factory::{compose_screen, Theme};
use gof::creational::builder::{Director, StandardBuilder};
use gof::creational::factory_method::DocumentKind;
use gof::structural::adapter::{dashboard_line, FahrenheitProbe, ProbeAdapter};
use std::sync::Arc;

static SETTINGS: DoubleCheckedSingleton<Vec<String>> =
    DoubleCheckedSingleton::new(|| vec![String::from("theme=dark")]);

#[test]
fn test_singleton_through_the_facade() {
    let first = SETTINGS.instance();
    assert!(Arc::ptr_eq(&first, &SETTINGS.instance()));
    assert_eq!(first[0], "theme=dark");
}

#[test]
fn test_creational_patterns_through_the_facade() {
    let kind: DocumentKind = "spreadsheet".parse().unwrap();
    let steps = kind.creator().edit_document("budget.ods");
    assert_eq!(steps.len(), 3);

    let screen = compose_screen(Theme::Light.factory().as_ref());
    assert!(screen.contains("[light] button"));

    let mut builder = StandardBuilder::new();
    let workstation = Director::build_full(&mut builder).unwrap();
    assert_eq!(workstation.parts().len(), 3);
}

#[test]
fn test_structural_patterns_through_the_facade() {
    let adapted = ProbeAdapter::new(FahrenheitProbe::new(32.0));
    assert_eq!(dashboard_line(&adapted), "current temperature: 0.0 °C");
}
