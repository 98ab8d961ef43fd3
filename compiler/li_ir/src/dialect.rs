//! Keyword and catalog-name tables for Li's surface languages.
//!
//! Every dialect shares the same canonical core: the parser produces the same
//! forms and the JSON view always uses canonical keywords. A dialect only
//! changes what the user types.

/// Binding key that marks a literal wrapper in the JSON view.
pub const LIT_KEY: &str = "lit";

/// Binding key that holds a function literal's parameter names.
pub const PARAMS_KEY: &str = "params";

/// Canonical function body key in the JSON view.
pub const BODY_KEY: &str = "def";

/// Canonical conditional head in the JSON view.
pub const IF_HEAD: &str = "if";

/// Canonical loop head in the JSON view.
pub const LOOP_HEAD: &str = "while";

/// Structural keywords recognized by the parser.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Keywords {
    pub conditional: &'static str,
    pub alternative: &'static str,
    pub fallback: &'static str,
    pub function: &'static str,
    pub repeat: &'static str,
}

/// A surface language for Li source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dialect {
    name: &'static str,
    keywords: Keywords,
    /// `(canonical, surface)` catalog renames. Unlisted names keep their
    /// canonical spelling.
    aliases: &'static [(&'static str, &'static str)],
}

const ENGLISH: Dialect = Dialect {
    name: "english",
    keywords: Keywords {
        conditional: "if",
        alternative: "elif",
        fallback: "else",
        function: "def",
        repeat: "while",
    },
    aliases: &[],
};

const FRENCH: Dialect = Dialect {
    name: "french",
    keywords: Keywords {
        conditional: "if",
        alternative: "elif",
        fallback: "else",
        function: "fonc",
        repeat: "tantque",
    },
    aliases: &[
        ("print", "affiche"),
        ("println", "affiche_xa"),
        ("input", "demande"),
        ("len", "taille"),
        ("del", "supr"),
        ("wait", "attends"),
    ],
};

impl Dialect {
    pub const fn english() -> Self {
        ENGLISH
    }

    pub const fn french() -> Self {
        FRENCH
    }

    /// Look a dialect up by its name or two-letter code.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Some(ENGLISH),
            "french" | "fr" => Some(FRENCH),
            _ => None,
        }
    }

    /// Names accepted by [`Dialect::by_name`], for usage messages.
    pub const fn available() -> &'static [&'static str] {
        &["english", "french"]
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn keywords(&self) -> &Keywords {
        &self.keywords
    }

    /// Surface spelling of a canonical catalog name.
    pub fn surface_name<'a>(&self, canonical: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(from, _)| *from == canonical)
            .map_or(canonical, |&(_, to)| to)
    }

    /// Whether `word` is a structural keyword that user code may not bind.
    ///
    /// `elif` and `else` are only meaningful after a conditional block and
    /// stay bindable.
    pub fn is_structural(&self, word: &str) -> bool {
        word == self.keywords.conditional
            || word == self.keywords.function
            || word == self.keywords.repeat
            || word == PARAMS_KEY
            || word == LIT_KEY
    }
}

impl Default for Dialect {
    fn default() -> Self {
        ENGLISH
    }
}

#[cfg(test)]
mod tests;
