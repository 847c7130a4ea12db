// Owned syntax model for one Java source unit
//
// The semantic core never touches tree-sitter nodes directly. The Java
// collaborator lowers each file into these plain values once, and everything
// downstream (page-object recognition, step extraction, element resolution)
// works on them.

/// A marker annotation attached to a field, method or class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Simple name, qualifier stripped (`org.junit.Test` -> `Test`)
    pub name: String,
    pub arguments: AnnotationArguments,
    /// Full source text, e.g. `@FindBy(id = "login")`
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationArguments {
    None,
    /// `@FindBy("value")`
    Single(String),
    /// `@FindBy(id = "x", name = "y")`, raw value texts in source order
    Pairs(Vec<(String, String)>),
}

impl Annotation {
    /// Raw text of a named argument
    pub fn pair(&self, key: &str) -> Option<&str> {
        match &self.arguments {
            AnnotationArguments::Pairs(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

/// Capability query for marker detection
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];

    fn has_marker(&self, name: &str) -> bool {
        self.annotations().iter().any(|a| a.name == name)
    }

    fn has_any_marker(&self, names: &[String]) -> bool {
        names.iter().any(|name| self.has_marker(name))
    }

    fn marker(&self, name: &str) -> Option<&Annotation> {
        self.annotations().iter().find(|a| a.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
    Protected,
    Package,
}

/// One call expression as the resolver sees it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallSite {
    /// Receiver expression text (`loginPage` in `loginPage.submit()`)
    pub receiver: Option<String>,
    pub name: String,
    /// Raw argument texts, in order
    pub arguments: Vec<String>,
    /// Full source text of the call, receiver and arguments included
    pub text: String,
}

impl CallSite {
    pub fn new(
        receiver: Option<&str>,
        name: impl Into<String>,
        arguments: &[&str],
        text: impl Into<String>,
    ) -> Self {
        Self {
            receiver: receiver.map(str::to_string),
            name: name.into(),
            arguments: arguments.iter().map(|a| a.to_string()).collect(),
            text: text.into(),
        }
    }

    pub fn first_argument(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}

/// A top-level statement of a method body with every call nested inside it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Statement {
    /// Pre-order: outer calls before the calls in their receivers and arguments
    pub calls: Vec<CallSite>,
}

/// A switch construct found anywhere in a method body
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// Case label texts with quotes removed; `default` for the default branch
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub annotations: Vec<Annotation>,
    pub type_name: String,
    /// Declared variables with their initializer text, if any
    pub variables: Vec<(String, Option<String>)>,
}

impl Annotated for FieldDecl {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub visibility: Visibility,
    /// Javadoc description (block tags excluded)
    pub doc_comment: Option<String>,
    /// Line comments directly above the method, then those inside its body
    pub line_comments: Vec<String>,
    pub statements: Vec<Statement>,
    pub dispatches: Vec<Dispatch>,
}

impl Annotated for MethodDecl {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl MethodDecl {
    pub fn is_data_driven(&self) -> bool {
        !self.dispatches.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub is_interface: bool,
    pub is_top_level: bool,
}

/// Everything the core needs from one parsed `.java` file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceUnit {
    pub file_path: String,
    /// File name without extension, used to find the primary type
    pub file_stem: String,
    pub classes: Vec<ClassDecl>,
    /// All field declarations in document order, nested classes included
    pub fields: Vec<FieldDecl>,
    /// All method declarations in document order, nested classes included
    pub methods: Vec<MethodDecl>,
    pub mentions_page_factory: bool,
}

impl SourceUnit {
    /// The primary type (named after the file), else the first non-interface class
    pub fn class_name(&self) -> Option<&str> {
        self.classes
            .iter()
            .find(|c| c.is_top_level && c.name == self.file_stem)
            .or_else(|| self.classes.iter().find(|c| !c.is_interface))
            .map(|c| c.name.as_str())
    }

    /// First method with the given name that is private or public
    pub fn find_sibling_method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|m| {
            m.name == name && matches!(m.visibility, Visibility::Private | Visibility::Public)
        })
    }
}
