//! MineLang keyword table
//!
//! Maps the upper-case MineLang keywords onto their Python spellings.
//! The table is static and read-only; the lexer consults it to reject
//! misspelled keywords and the translator to substitute them.

/// How the translator treats a keyword once it is substituted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Opens a block: followed by a space, gets a `:` when its `{` arrives
    Header,
    /// Else-like: a header only when it directly follows a closed block
    Continuation,
    /// Must be followed by a space (`return x`, not `returnx`)
    Spaced,
    /// Straight substitution (operators, `print`)
    Plain,
}

/// One keyword table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword {
    /// MineLang spelling
    pub source: &'static str,
    /// Python spelling
    pub target: &'static str,
    pub role: Role,
}

impl Keyword {
    const fn new(source: &'static str, target: &'static str, role: Role) -> Self {
        Self { source, target, role }
    }

    /// Whether a space must follow the substituted spelling
    pub fn needs_space(&self) -> bool {
        matches!(self.role, Role::Header | Role::Spaced)
    }
}

const STANDARD: &[Keyword] = &[
    // Block headers
    Keyword::new("OPERACAO", "def", Role::Header),
    Keyword::new("SE_RISCO", "if", Role::Header),
    Keyword::new("ENQUANTO_ESCANEANDO", "while", Role::Header),
    Keyword::new("SENAO_OPERADOR", "else", Role::Continuation),
    // Statements
    Keyword::new("RETORNAR_STATUS", "return", Role::Spaced),
    Keyword::new("ALERTAR_EQUIPE", "print", Role::Plain),
    // Operators
    Keyword::new("MARCAR_AREA", "=", Role::Plain),
    Keyword::new("INTENSIFICAR", "+", Role::Plain),
    Keyword::new("DESATIVAR", "-", Role::Plain),
    Keyword::new("AMPLIFICAR", "*", Role::Plain),
    Keyword::new("DISTRIBUIR_RECURSOS", "/", Role::Plain),
];

/// A read-only keyword table
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    entries: &'static [Keyword],
}

impl KeywordTable {
    /// Version of the standard table; bump when entries change
    pub const VERSION: u32 = 1;

    /// The standard MineLang table
    pub const fn standard() -> Self {
        Self { entries: STANDARD }
    }

    /// Build a table over a custom set of entries
    pub const fn from_entries(entries: &'static [Keyword]) -> Self {
        Self { entries }
    }

    /// Look up a MineLang spelling
    pub fn lookup(&self, spelling: &str) -> Option<&'static Keyword> {
        self.entries.iter().find(|kw| kw.source == spelling)
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.lookup(spelling).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Keyword> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// An identifier is "entirely upper-case" when it has at least one cased
/// character and none of them is lower-case.
pub fn is_all_upper(ident: &str) -> bool {
    let mut cased = false;
    for c in ident.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
