//! CSS output model: Declaration, ClassName, StyleSheet.
//!
//! A [`StyleSheet`] holds the declarations for one scoping class, grouped by
//! breakpoint. Rendering emits the base block first and then one
//! `@media (min-width: …)` block per larger breakpoint:
//!
//! ```text
//! .hero-1 { display: block; }
//! @media (min-width: 1024px) { .hero-1 { display: flex; } }
//! ```

use std::fmt;

use crate::breakpoint::Breakpoint;

/// A single `property: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    /// The CSS property name (e.g. `"flex-direction"`).
    pub property: String,
    /// The property value text. Empty means "omit".
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if the value is blank and the declaration should be dropped.
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Returns `true` if the value could end its declaration or rule block.
    ///
    /// That is a `;`, `{`, `}` or comment marker outside a quoted string, an
    /// unterminated string, or a trailing escape. Quoted text such as a
    /// `url("data:image/png;base64,…")` is allowed.
    pub fn breaks_scope(&self) -> bool {
        let mut quote: Option<char> = None;
        let mut chars = self.value.chars().peekable();
        while let Some(c) = chars.next() {
            match (quote, c) {
                (_, '\\') => {
                    if chars.next().is_none() {
                        return true;
                    }
                }
                (Some(_), '\n' | '\r' | '\x0c') => return true,
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(c),
                (None, ';' | '{' | '}') => return true,
                (None, '/') if chars.peek() == Some(&'*') => return true,
                (None, '*') if chars.peek() == Some(&'/') => return true,
                (None, _) => {}
            }
        }
        quote.is_some()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// A sanitized class name used as the only selector in generated CSS.
///
/// Characters outside `[A-Za-z0-9_-]` become `-`. A name that is empty or
/// starts with a digit is prefixed with `c-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(raw: &str) -> Self {
        let mut name: String = raw
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert_str(0, "c-");
        }
        ClassName(name)
    }

    /// The scoping class for one component instance: `{type}-{id}`.
    pub fn for_component(component_type: &str, instance_id: &str) -> Self {
        Self::new(&format!("{component_type}-{instance_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The class selector, `.{name}`.
    pub fn selector(&self) -> String {
        format!(".{}", self.0)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declarations for one class, grouped by breakpoint in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    class_name: ClassName,
    rules: [Vec<Declaration>; 3],
}

impl StyleSheet {
    pub fn new(class_name: ClassName) -> Self {
        Self {
            class_name,
            rules: Default::default(),
        }
    }

    pub fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// Add a declaration to the block for `breakpoint`.
    ///
    /// Empty values are dropped, and so is an exact repeat of a declaration
    /// already in the same block. A value that would close the block (see
    /// [`Declaration::breaks_scope`]) is dropped with a warning. Returns
    /// whether it was added.
    pub fn push(&mut self, breakpoint: Breakpoint, declaration: Declaration) -> bool {
        if declaration.is_empty() {
            return false;
        }
        if declaration.breaks_scope() {
            tracing::warn!(
                class = %self.class_name,
                property = %declaration.property,
                value = %declaration.value,
                "dropping declaration that would escape its rule block"
            );
            return false;
        }
        let block = &mut self.rules[breakpoint.index()];
        if block.contains(&declaration) {
            return false;
        }
        block.push(declaration);
        true
    }

    /// Add several declarations to one block.
    pub fn extend(
        &mut self,
        breakpoint: Breakpoint,
        declarations: impl IntoIterator<Item = Declaration>,
    ) {
        for declaration in declarations {
            self.push(breakpoint, declaration);
        }
    }

    /// The declarations collected for `breakpoint`.
    pub fn rules_for(&self, breakpoint: Breakpoint) -> &[Declaration] {
        &self.rules[breakpoint.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.rules.iter().all(Vec::is_empty)
    }

    /// Total number of declarations across all blocks.
    pub fn len(&self) -> usize {
        self.rules.iter().map(Vec::len).sum()
    }

    /// Render to CSS text, one block per line.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selector = self.class_name.selector();
        let mut first = true;
        for &breakpoint in Breakpoint::ALL {
            let block = self.rules_for(breakpoint);
            if block.is_empty() {
                continue;
            }
            if !first {
                f.write_str("\n")?;
            }
            first = false;

            if let Some(query) = breakpoint.media_query() {
                write!(f, "@media {query} {{ ")?;
            }
            write!(f, "{selector} {{")?;
            for declaration in block {
                write!(f, " {declaration}")?;
            }
            f.write_str(" }")?;
            if breakpoint.media_query().is_some() {
                f.write_str(" }")?;
            }
        }
        Ok(())
    }
}
