// Page Object Extraction
//
// Turns a parsed source unit into a `PageObject`: every element field
// (WebElement-typed, locator-annotated, or a `By` locator constant) becomes one
// named selector. Selectors are normalized to `By.<strategy>("<value>")` where
// the annotation form allows it, and kept verbatim otherwise.

use crate::extractors::base::PageObject;
use crate::extractors::syntax::{Annotated, Annotation, AnnotationArguments, FieldDecl, SourceUnit};
use crate::utils::text::strip_quotes;
use std::collections::BTreeMap;
use tracing::debug;

/// Page objects keyed by class name; BTreeMap gives a stable lexicographic order
pub type PageRegistry = BTreeMap<String, PageObject>;

/// Named locator attributes, checked in this order
const LOCATOR_PRIORITY: &[&str] = &[
    "xpath",
    "id",
    "name",
    "className",
    "css",
    "tagName",
    "linkText",
    "partialLinkText",
];

pub struct PageObjectExtractor {
    markers: Vec<String>,
}

impl PageObjectExtractor {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    /// Content-based page-object detection (directory-based detection happens at scan time)
    pub fn looks_like_page_object(&self, unit: &SourceUnit) -> bool {
        unit.mentions_page_factory || unit.fields.iter().any(|f| self.is_element_field(f))
    }

    /// Build the page object for a unit; `None` when the unit declares no element fields
    pub fn extract(&self, unit: &SourceUnit) -> Option<PageObject> {
        let class_name = unit.class_name()?;
        let mut page_object: Option<PageObject> = None;

        for field in unit.fields.iter().filter(|f| self.is_element_field(f)) {
            let target = page_object.get_or_insert_with(|| PageObject::new(class_name));

            for (name, initializer) in &field.variables {
                let selector = match self.locator_annotation(field) {
                    Some(annotation) => Some(selector_from_annotation(annotation)),
                    None => by_initializer(field, initializer.as_deref()),
                };

                match selector {
                    Some(selector) => {
                        target.elements.insert(name.clone(), selector);
                    }
                    None => debug!("{}.{} has no locator, skipping", class_name, name),
                }
            }
        }

        page_object
    }

    fn is_element_field(&self, field: &FieldDecl) -> bool {
        field.type_name.contains("WebElement")
            || field.has_any_marker(&self.markers)
            || is_by_field(field)
    }

    fn locator_annotation<'a>(&self, field: &'a FieldDecl) -> Option<&'a Annotation> {
        field
            .annotations
            .iter()
            .find(|a| self.markers.iter().any(|m| *m == a.name))
    }
}

/// Merge a page object into the registry; same-named classes combine their elements
pub fn register_page_object(registry: &mut PageRegistry, page_object: PageObject) {
    match registry.get_mut(&page_object.class_name) {
        Some(existing) => {
            for (name, selector) in page_object.elements.iter() {
                existing.elements.insert(name, selector);
            }
        }
        None => {
            registry.insert(page_object.class_name.clone(), page_object);
        }
    }
}

/// Normalize a locator annotation into a selector expression
pub fn selector_from_annotation(annotation: &Annotation) -> String {
    match &annotation.arguments {
        AnnotationArguments::Single(value) => quote(value),
        AnnotationArguments::Pairs(_) => {
            for locator in LOCATOR_PRIORITY {
                if let Some(value) = annotation.pair(locator) {
                    return format!("By.{}({})", locator, quote(value));
                }
            }

            if let (Some(how), Some(using)) = (annotation.pair("how"), annotation.pair("using")) {
                if let Some(strategy) = how_strategy(how) {
                    return format!("By.{}({})", strategy, quote(using));
                }
            }

            annotation.text.clone()
        }
        AnnotationArguments::None => annotation.text.clone(),
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", strip_quotes(value.trim()))
}

/// `How.CLASS_NAME` -> `className`
fn how_strategy(how: &str) -> Option<&'static str> {
    let constant = how.rsplit('.').next()?.trim();
    match constant {
        "ID" => Some("id"),
        "XPATH" => Some("xpath"),
        "NAME" => Some("name"),
        "CLASS_NAME" => Some("className"),
        "CSS" => Some("css"),
        "TAG_NAME" => Some("tagName"),
        "LINK_TEXT" => Some("linkText"),
        "PARTIAL_LINK_TEXT" => Some("partialLinkText"),
        _ => None,
    }
}

fn is_by_field(field: &FieldDecl) -> bool {
    field.type_name == "By"
        && field
            .variables
            .iter()
            .any(|(_, init)| by_initializer(field, init.as_deref()).is_some())
}

/// `By loginButton = By.id("login");` keeps the initializer verbatim
fn by_initializer(field: &FieldDecl, initializer: Option<&str>) -> Option<String> {
    if field.type_name != "By" {
        return None;
    }
    let init = initializer?.trim();
    init.starts_with("By.").then(|| init.to_string())
}
