// Synonym Tables
//
// Immutable concept -> token tables consulted by the fuzzy matchers. They are
// plain statics; components hold a `&'static SynonymTables` and never mutate it.

/// One concept: a root token plus the tokens that count as the same idea
#[derive(Debug)]
pub struct Concept {
    pub root: &'static str,
    pub synonyms: &'static [&'static str],
}

impl Concept {
    /// True when one side names the concept root and the other side carries one of its synonyms
    ///
    /// Both arguments must already be lower-cased.
    pub fn links(&self, a: &str, b: &str) -> bool {
        (a.contains(self.root) && self.mentioned_in(b)) || (b.contains(self.root) && self.mentioned_in(a))
    }

    /// Whether `text` (lower-cased) contains any synonym of this concept
    pub fn mentioned_in(&self, text: &str) -> bool {
        self.synonyms.iter().any(|s| text.contains(s))
    }
}

#[derive(Debug)]
pub struct SynonymTables {
    /// Used when matching method names against element keys
    pub elements: &'static [Concept],
    /// Used when matching test names against config URL keys
    pub urls: &'static [Concept],
}

static ELEMENT_CONCEPTS: &[Concept] = &[
    Concept { root: "search", synonyms: &["search", "find", "query", "box"] },
    Concept { root: "login", synonyms: &["login", "signin", "username", "email"] },
    Concept { root: "password", synonyms: &["password", "pass", "pwd"] },
    Concept { root: "submit", synonyms: &["submit", "send", "save", "confirm", "button"] },
    Concept { root: "product", synonyms: &["product", "item", "goods", "clicked", "selected"] },
    Concept { root: "cart", synonyms: &["cart", "basket", "bag"] },
    Concept { root: "checkout", synonyms: &["checkout", "pay", "purchase", "order"] },
    Concept { root: "message", synonyms: &["message", "notification", "alert", "error", "success"] },
    Concept { root: "visible", synonyms: &["visible", "displayed", "shown", "present"] },
    Concept { root: "enabled", synonyms: &["enabled", "active", "clickable", "available"] },
    Concept { root: "text", synonyms: &["text", "label", "title", "heading", "caption"] },
    Concept { root: "button", synonyms: &["button", "btn", "link", "icon"] },
    Concept { root: "field", synonyms: &["field", "input", "textbox", "box"] },
];

static URL_CONCEPTS: &[Concept] = &[
    Concept { root: "login", synonyms: &["login", "signin", "auth", "account"] },
    Concept { root: "register", synonyms: &["register", "signup", "create", "account"] },
    Concept { root: "search", synonyms: &["search", "find", "filter", "query"] },
    Concept { root: "product", synonyms: &["product", "item", "detail", "view"] },
    Concept { root: "cart", synonyms: &["cart", "basket", "bag", "checkout"] },
    Concept { root: "grocery", synonyms: &["grocery", "food", "supermart"] },
    Concept { root: "home", synonyms: &["home", "main", "index", "landing"] },
];

static BUILTIN: SynonymTables = SynonymTables {
    elements: ELEMENT_CONCEPTS,
    urls: URL_CONCEPTS,
};

impl SynonymTables {
    pub fn builtin() -> &'static SynonymTables {
        &BUILTIN
    }
}
