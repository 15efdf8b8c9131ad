//! Display tree elements
//!
//! Pages describe their content as a flat list of `Element`s (with `Section`
//! as the only nesting node). The TUI turns these into ratatui lines; tests
//! compare them directly.

/// A single node in a page's display tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Large page header
    Heading(String),
    /// Plain paragraph text (may span several lines)
    Text(String),
    /// `label: value` row
    Field { label: String, value: String },
    /// Visible failure / unavailable state
    Error(String),
    /// De-emphasized informational text
    Dim(String),
    /// Row of a selectable list
    Item { text: String, selected: bool },
    /// Framed group of child elements
    Section {
        title: String,
        children: Vec<Element>,
    },
    /// Vertical spacing
    Blank,
}

impl Element {
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn field(label: impl Into<String>, value: impl ToString) -> Self {
        Self::Field {
            label: label.into(),
            value: value.to_string(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::Dim(text.into())
    }

    pub fn item(text: impl Into<String>, selected: bool) -> Self {
        Self::Item {
            text: text.into(),
            selected,
        }
    }

    pub fn section(title: impl Into<String>, children: Vec<Element>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }

    /// Plain-text rendering, used for clipboard copies and headless output
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out, 0);
        out
    }

    fn write_plain(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        match self {
            Element::Heading(text) => {
                out.push_str(&format!("{}# {}\n", pad, text));
            }
            Element::Text(text) | Element::Dim(text) => {
                for line in text.lines() {
                    out.push_str(&format!("{}{}\n", pad, line));
                }
            }
            Element::Field { label, value } => {
                out.push_str(&format!("{}{}: {}\n", pad, label, value));
            }
            Element::Error(text) => {
                out.push_str(&format!("{}! {}\n", pad, text));
            }
            Element::Item { text, selected } => {
                let marker = if *selected { ">" } else { " " };
                out.push_str(&format!("{}{} {}\n", pad, marker, text));
            }
            Element::Section { title, children } => {
                out.push_str(&format!("{}[{}]\n", pad, title));
                for child in children {
                    child.write_plain(out, indent + 1);
                }
            }
            Element::Blank => out.push('\n'),
        }
    }
}

/// Join a whole content tree into plain text
pub fn to_plain_text(elements: &[Element]) -> String {
    elements.iter().map(Element::to_plain).collect()
}
