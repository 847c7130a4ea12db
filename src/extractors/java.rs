// Java Extractor Implementation
//
// Lowers a tree-sitter-java syntax tree into the owned `SourceUnit` model.
//
// Handles the Java constructs the test-step pipeline cares about:
// - Class, interface, enum and record declarations (for the unit's class name)
// - Field declarations with marker annotations, declared type and variables
// - Method declarations with annotations, visibility, Javadoc and line comments
// - Method bodies as top-level statements with their nested calls in pre-order
// - Switch constructs (statement and arrow forms) with their case labels

use crate::error::{ExtractError, Result};
use crate::extractors::base::BaseExtractor;
use crate::extractors::syntax::{
    Annotation, AnnotationArguments, CallSite, ClassDecl, Dispatch, FieldDecl, MethodDecl,
    SourceUnit, Statement, Visibility,
};
use std::path::Path;
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

const TYPE_DECLARATIONS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
];

const SWITCH_KINDS: &[&str] = &["switch_expression", "switch_statement"];

/// Create a parser loaded with the Java grammar
pub fn java_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_java::LANGUAGE.into())
        .map_err(|e| ExtractError::unit_parse("<java grammar>", e))?;
    Ok(parser)
}

/// Parse one Java source text into a `SourceUnit`
pub fn parse_java_source(file_path: &str, content: &str) -> Result<SourceUnit> {
    let mut parser = java_parser()?;
    let tree = parser
        .parse(content, None)
        .ok_or_else(|| ExtractError::unit_parse(file_path, "tree-sitter returned no tree"))?;

    let extractor = JavaExtractor::new(file_path.to_string(), content.to_string());
    if extractor.base.has_error(&tree.root_node()) {
        debug!("{} has syntax errors, continuing with the recovered tree", file_path);
    }
    Ok(extractor.extract_unit(&tree))
}

pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
        }
    }

    pub fn extract_unit(&self, tree: &Tree) -> SourceUnit {
        let root = tree.root_node();
        let file_stem = Path::new(&self.base.file_path)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut unit = SourceUnit {
            file_path: self.base.file_path.clone(),
            file_stem,
            mentions_page_factory: self.base.content.contains("PageFactory"),
            ..Default::default()
        };

        self.walk_tree(root, &mut unit);
        unit
    }

    fn walk_tree(&self, node: Node, unit: &mut SourceUnit) {
        match node.kind() {
            kind if TYPE_DECLARATIONS.contains(&kind) => {
                if let Some(class) = self.extract_class(node) {
                    unit.classes.push(class);
                }
            }
            "field_declaration" => {
                if let Some(field) = self.extract_field(node) {
                    unit.fields.push(field);
                }
            }
            "method_declaration" => {
                if let Some(method) = self.extract_method(node) {
                    unit.methods.push(method);
                }
            }
            _ => {}
        }

        for child in node.children(&mut node.walk()) {
            self.walk_tree(child, unit);
        }
    }

    fn extract_class(&self, node: Node) -> Option<ClassDecl> {
        let name = self.base.get_field_text(&node, "name")?;
        let is_top_level = node
            .parent()
            .map(|p| p.kind() == "program")
            .unwrap_or(false);

        Some(ClassDecl {
            name,
            is_interface: node.kind() == "interface_declaration",
            is_top_level,
        })
    }

    fn extract_field(&self, node: Node) -> Option<FieldDecl> {
        let type_name = self.base.get_field_text(&node, "type")?;

        let mut cursor = node.walk();
        let variables: Vec<(String, Option<String>)> = node
            .children_by_field_name("declarator", &mut cursor)
            .filter_map(|declarator| {
                let name = self.base.get_field_text(&declarator, "name")?;
                let value = self.base.get_field_text(&declarator, "value");
                Some((name, value))
            })
            .collect();

        if variables.is_empty() {
            return None;
        }

        Some(FieldDecl {
            annotations: self.extract_annotations(node),
            type_name,
            variables,
        })
    }

    fn extract_method(&self, node: Node) -> Option<MethodDecl> {
        let name = self.base.get_field_text(&node, "name")?;
        let body = node.child_by_field_name("body");

        let statements = body
            .map(|block| {
                block
                    .named_children(&mut block.walk())
                    .filter(|stmt| !is_comment(stmt))
                    .map(|stmt| self.extract_statement(stmt))
                    .collect()
            })
            .unwrap_or_default();

        let dispatches = body
            .map(|block| self.extract_dispatches(block))
            .unwrap_or_default();

        let mut line_comments = self.preceding_line_comments(node);
        if let Some(block) = body {
            line_comments.extend(
                self.base
                    .find_nodes_by_type(&block, "line_comment")
                    .iter()
                    .map(|c| line_comment_text(&self.base.get_node_text(c))),
            );
        }

        Some(MethodDecl {
            name,
            annotations: self.extract_annotations(node),
            visibility: self.determine_visibility(node),
            doc_comment: self.find_javadoc(node),
            line_comments,
            statements,
            dispatches,
        })
    }

    fn extract_statement(&self, node: Node) -> Statement {
        let mut calls = Vec::new();
        self.collect_calls(node, &mut calls);
        Statement { calls }
    }

    /// Pre-order walk: a call is recorded before the calls nested in it
    fn collect_calls(&self, node: Node, calls: &mut Vec<CallSite>) {
        if node.kind() == "method_invocation" {
            if let Some(call) = self.extract_call(node) {
                calls.push(call);
            }
        }

        for child in node.named_children(&mut node.walk()) {
            self.collect_calls(child, calls);
        }
    }

    fn extract_call(&self, node: Node) -> Option<CallSite> {
        let name = self.base.get_field_text(&node, "name")?;
        let receiver = self.base.get_field_text(&node, "object");

        let arguments = node
            .child_by_field_name("arguments")
            .map(|args| {
                args.named_children(&mut args.walk())
                    .filter(|arg| !is_comment(arg))
                    .map(|arg| self.base.get_node_text(&arg))
                    .collect()
            })
            .unwrap_or_default();

        Some(CallSite {
            receiver,
            name,
            arguments,
            text: self.base.get_node_text(&node),
        })
    }

    fn extract_dispatches(&self, body: Node) -> Vec<Dispatch> {
        SWITCH_KINDS
            .iter()
            .flat_map(|kind| self.base.find_nodes_by_type(&body, kind))
            .map(|switch| (switch.start_byte(), self.extract_dispatch(switch)))
            .collect::<std::collections::BTreeMap<_, _>>()
            .into_values()
            .collect()
    }

    fn extract_dispatch(&self, node: Node) -> Dispatch {
        let mut labels = Vec::new();
        let Some(block) = node.child_by_field_name("body") else {
            return Dispatch { labels };
        };

        // Groups (`case "A": ...`) and rules (`case "A" -> ...`) both wrap switch_label nodes
        for entry in block.named_children(&mut block.walk()) {
            for label in entry.named_children(&mut entry.walk()) {
                if label.kind() == "switch_label" {
                    labels.extend(self.extract_case_labels(label));
                }
            }
        }

        Dispatch { labels }
    }

    fn extract_case_labels(&self, label: Node) -> Vec<String> {
        let text = self.base.get_node_text(&label);
        if text.trim_start().starts_with("default") {
            return vec!["default".to_string()];
        }

        let values: Vec<String> = label
            .named_children(&mut label.walk())
            .filter(|v| !is_comment(v))
            .map(|v| self.base.get_node_text(&v).replace('"', ""))
            .collect();

        if values.is_empty() {
            let value = text.trim().trim_start_matches("case").trim().replace('"', "");
            vec![value]
        } else {
            values
        }
    }

    fn extract_annotations(&self, node: Node) -> Vec<Annotation> {
        let Some(modifiers) = self.base.find_child_by_type(&node, "modifiers") else {
            return Vec::new();
        };

        modifiers
            .named_children(&mut modifiers.walk())
            .filter(|c| matches!(c.kind(), "marker_annotation" | "annotation"))
            .filter_map(|c| self.extract_annotation(c))
            .collect()
    }

    fn extract_annotation(&self, node: Node) -> Option<Annotation> {
        let qualified = self.base.get_field_text(&node, "name")?;
        let name = qualified
            .rsplit('.')
            .next()
            .unwrap_or(qualified.as_str())
            .to_string();

        let arguments = match node.child_by_field_name("arguments") {
            None => AnnotationArguments::None,
            Some(args) => self.extract_annotation_arguments(args),
        };

        Some(Annotation {
            name,
            arguments,
            text: self.base.get_node_text(&node),
        })
    }

    fn extract_annotation_arguments(&self, args: Node) -> AnnotationArguments {
        let values: Vec<Node> = args
            .named_children(&mut args.walk())
            .filter(|c| !is_comment(c))
            .collect();

        let pairs: Vec<(String, String)> = values
            .iter()
            .filter(|c| c.kind() == "element_value_pair")
            .filter_map(|pair| {
                let key = self.base.get_field_text(pair, "key")?;
                let value = self.base.get_field_text(pair, "value")?;
                Some((key, value))
            })
            .collect();

        if !pairs.is_empty() {
            AnnotationArguments::Pairs(pairs)
        } else if let Some(single) = values.first() {
            AnnotationArguments::Single(self.base.get_node_text(single))
        } else {
            AnnotationArguments::None
        }
    }

    fn determine_visibility(&self, node: Node) -> Visibility {
        let Some(modifiers) = self.base.find_child_by_type(&node, "modifiers") else {
            return Visibility::Package;
        };

        let mut cursor = modifiers.walk();
        for child in modifiers.children(&mut cursor) {
            match child.kind() {
                "public" => return Visibility::Public,
                "private" => return Visibility::Private,
                "protected" => return Visibility::Protected,
                _ => {}
            }
        }
        Visibility::Package
    }

    /// Javadoc attached directly above the declaration
    fn find_javadoc(&self, node: Node) -> Option<String> {
        let prev = node.prev_named_sibling()?;
        if prev.kind() != "block_comment" {
            return None;
        }

        let text = self.base.get_node_text(&prev);
        if !text.starts_with("/**") {
            return None;
        }
        javadoc_description(&text)
    }

    /// Consecutive `//` comments directly above the declaration, in source order
    fn preceding_line_comments(&self, node: Node) -> Vec<String> {
        let mut comments = Vec::new();
        let mut current = node.prev_named_sibling();
        while let Some(prev) = current {
            if prev.kind() != "line_comment" {
                break;
            }
            comments.push(line_comment_text(&self.base.get_node_text(&prev)));
            current = prev.prev_named_sibling();
        }
        comments.reverse();
        comments
    }
}

fn is_comment(node: &Node) -> bool {
    node.kind().ends_with("comment")
}

fn line_comment_text(raw: &str) -> String {
    raw.trim().trim_start_matches("//").trim().to_string()
}

/// Description part of a Javadoc block: everything before the first block tag
fn javadoc_description(raw: &str) -> Option<String> {
    let inner = raw.trim_start_matches("/**").trim_end_matches("*/");

    let mut lines = Vec::new();
    for line in inner.lines() {
        let line = line.trim().trim_start_matches('*').trim();
        if line.starts_with('@') {
            break;
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}
