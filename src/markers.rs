// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Presentation Markers
//!
//! Document-level classes and attributes that external styling keys off.
//! The theme store is the only writer.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::theme::{ThemeCategory, ThemeName};

/// Attribute on the document root naming the current theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Class toggled on the root for utility-first CSS dark variants.
pub const DARK_CLASS: &str = "dark";

/// Where a marker lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Root,
    Body,
}

/// A sink for presentation markers.
pub trait PresentationTarget {
    fn add_class(&mut self, element: Element, class: &str);
    fn remove_class(&mut self, element: Element, class: &str);
    fn set_attribute(&mut self, element: Element, name: &str, value: &str);
}

/// In-memory model of the document root and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMarkers {
    root_classes: BTreeSet<String>,
    body_classes: BTreeSet<String>,
    root_attributes: BTreeMap<String, String>,
    body_attributes: BTreeMap<String, String>,
}

impl DocumentMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self, element: Element) -> &BTreeSet<String> {
        match element {
            Element::Root => &self.root_classes,
            Element::Body => &self.body_classes,
        }
    }

    pub fn has_class(&self, element: Element, class: &str) -> bool {
        self.classes(element).contains(class)
    }

    pub fn attribute(&self, element: Element, name: &str) -> Option<&str> {
        let attrs = match element {
            Element::Root => &self.root_attributes,
            Element::Body => &self.body_attributes,
        };
        attrs.get(name).map(String::as_str)
    }

    /// Themes whose per-theme class is present on either element.
    pub fn active_themes(&self) -> Vec<ThemeName> {
        ThemeName::ALL
            .into_iter()
            .filter(|theme| {
                let class = theme.css_class();
                self.root_classes.contains(&class) || self.body_classes.contains(&class)
            })
            .collect()
    }
}

impl PresentationTarget for DocumentMarkers {
    fn add_class(&mut self, element: Element, class: &str) {
        let classes = match element {
            Element::Root => &mut self.root_classes,
            Element::Body => &mut self.body_classes,
        };
        classes.insert(class.to_string());
    }

    fn remove_class(&mut self, element: Element, class: &str) {
        let classes = match element {
            Element::Root => &mut self.root_classes,
            Element::Body => &mut self.body_classes,
        };
        classes.remove(class);
    }

    fn set_attribute(&mut self, element: Element, name: &str, value: &str) {
        let attrs = match element {
            Element::Root => &mut self.root_attributes,
            Element::Body => &mut self.body_attributes,
        };
        attrs.insert(name.to_string(), value.to_string());
    }
}

impl fmt::Display for DocumentMarkers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line(
            f: &mut fmt::Formatter<'_>,
            tag: &str,
            classes: &BTreeSet<String>,
            attrs: &BTreeMap<String, String>,
        ) -> fmt::Result {
            write!(f, "<{}", tag)?;
            if !classes.is_empty() {
                let joined: Vec<&str> = classes.iter().map(String::as_str).collect();
                write!(f, " class=\"{}\"", joined.join(" "))?;
            }
            for (name, value) in attrs {
                write!(f, " {}=\"{}\"", name, value)?;
            }
            write!(f, ">")
        }
        line(f, "html", &self.root_classes, &self.root_attributes)?;
        writeln!(f)?;
        line(f, "body", &self.body_classes, &self.body_attributes)
    }
}

/// Replaces every theme marker with those of `theme`.
///
/// Stale per-theme classes are removed from both elements before the new
/// ones are added, so at most one theme is marked at a time.
pub fn apply_theme<T: PresentationTarget + ?Sized>(target: &mut T, theme: ThemeName) {
    for stale in ThemeName::ALL {
        let class = stale.css_class();
        target.remove_class(Element::Root, &class);
        target.remove_class(Element::Body, &class);
    }

    let class = theme.css_class();
    target.add_class(Element::Root, &class);
    target.add_class(Element::Body, &class);
    target.set_attribute(Element::Root, THEME_ATTRIBUTE, theme.as_str());

    match theme.category() {
        ThemeCategory::Dark => target.add_class(Element::Root, DARK_CLASS),
        ThemeCategory::Light => target.remove_class(Element::Root, DARK_CLASS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_dark() {
        let mut doc = DocumentMarkers::new();
        apply_theme(&mut doc, ThemeName::Dark);
        insta::assert_snapshot!(doc.to_string(), @r#"
        <html class="dark dark-theme" data-theme="dark">
        <body class="dark-theme">
        "#);
    }

    #[test]
    fn test_switch_removes_previous_markers() {
        let mut doc = DocumentMarkers::new();
        apply_theme(&mut doc, ThemeName::Dracula);
        apply_theme(&mut doc, ThemeName::Minimal);

        assert_eq!(doc.active_themes(), vec![ThemeName::Minimal]);
        assert!(!doc.has_class(Element::Root, DARK_CLASS));
        assert!(!doc.has_class(Element::Body, "dracula-theme"));
        assert_eq!(doc.attribute(Element::Root, THEME_ATTRIBUTE), Some("minimal"));
    }

    #[test]
    fn test_unrelated_classes_survive() {
        let mut doc = DocumentMarkers::new();
        doc.add_class(Element::Body, "app");
        apply_theme(&mut doc, ThemeName::Light);
        apply_theme(&mut doc, ThemeName::Dark);
        assert!(doc.has_class(Element::Body, "app"));
        assert_eq!(doc.active_themes(), vec![ThemeName::Dark]);
    }
}
