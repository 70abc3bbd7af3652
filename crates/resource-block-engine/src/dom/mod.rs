//! Typed element tree standing in for the host editor's DOM.
//!
//! The block tool's render/save contract is expressed against this tree: the
//! tool returns a subtree from `render()`, the host (or a test) mutates the
//! editable state in place, and `save()` reads it back by class marker. Each
//! element kind has its own builder instead of a generic tag-plus-property-bag
//! constructor, so only the state an element actually carries is expressible.

use std::sync::OnceLock;

use regex::Regex;

/// What a node is, with the state each kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Plain grouping element with no state of its own.
    Container,
    /// Content-editable region holding raw markup, with an empty-state
    /// placeholder for the UI to display.
    Editable {
        inner_html: String,
        content_editable: bool,
        placeholder: String,
    },
    /// Drop-down selector. `selected` is an index into `options`; `None`
    /// means no option is selected and the selector reports an empty value.
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

/// One element in a rendered subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    kind: NodeKind,
    children: Vec<Element>,
}

impl Element {
    fn new<I, S>(tag: &str, classes: I, kind: NodeKind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag: tag.to_string(),
            classes: classes.into_iter().map(Into::into).collect(),
            kind,
            children: Vec::new(),
        }
    }

    /// Build a block root / grouping element (`div`).
    pub fn container<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("div", classes, NodeKind::Container)
    }

    /// Build a content-editable region (`div`) seeded with raw markup.
    pub fn editable<I, S>(
        classes: I,
        inner_html: impl Into<String>,
        content_editable: bool,
        placeholder: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            "div",
            classes,
            NodeKind::Editable {
                inner_html: inner_html.into(),
                content_editable,
                placeholder: placeholder.into(),
            },
        )
    }

    /// Build a selector (`select`) with one option per label. The option
    /// equal to `selected` is marked selected; when no label matches, the
    /// selector starts out with nothing selected and [`Self::value`] reports
    /// `""`.
    pub fn select<C, S, O, L>(classes: C, options: O, selected: &str) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        O: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let selected = options.iter().position(|o| o == selected);
        Self::new("select", classes, NodeKind::Select { options, selected })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// First descendant carrying `class`, in depth-first document order.
    /// The root itself is not considered, matching host `querySelector`
    /// semantics for a lookup rooted at the block element.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.children.iter().find_map(|child| {
            if child.has_class(class) {
                Some(child)
            } else {
                child.find_class(class)
            }
        })
    }

    pub fn find_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| {
            if child.has_class(class) {
                Some(child)
            } else {
                child.find_class_mut(class)
            }
        })
    }

    /// First selector descendant, in depth-first document order.
    pub fn find_select(&self) -> Option<&Element> {
        self.children.iter().find_map(|child| {
            if matches!(child.kind, NodeKind::Select { .. }) {
                Some(child)
            } else {
                child.find_select()
            }
        })
    }

    pub fn find_select_mut(&mut self) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|child| {
            if matches!(child.kind, NodeKind::Select { .. }) {
                Some(child)
            } else {
                child.find_select_mut()
            }
        })
    }

    /// Raw markup of an editable region; `None` for other kinds.
    pub fn inner_html(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Editable { inner_html, .. } => Some(inner_html),
            _ => None,
        }
    }

    /// Overwrite an editable region's markup. No-op for other kinds.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        if let NodeKind::Editable { inner_html, .. } = &mut self.kind {
            *inner_html = html.into();
        }
    }

    /// Plain-text view of an editable region: tags stripped, entities
    /// decoded. `None` for other kinds.
    pub fn inner_text(&self) -> Option<String> {
        self.inner_html().map(strip_markup)
    }

    pub fn is_content_editable(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Editable {
                content_editable: true,
                ..
            }
        )
    }

    /// Empty-state placeholder of an editable region; `None` for other kinds.
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Editable { placeholder, .. } => Some(placeholder),
            _ => None,
        }
    }

    /// Current value of a selector: the selected option's label, or `""`
    /// when nothing is selected. `None` for other kinds.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Select { options, selected } => Some(
                selected
                    .and_then(|i| options.get(i))
                    .map(String::as_str)
                    .unwrap_or(""),
            ),
            _ => None,
        }
    }

    /// Select the option equal to `label`. Returns whether a matching option
    /// exists; the selection is unchanged when it does not.
    pub fn set_value(&mut self, label: &str) -> bool {
        if let NodeKind::Select { options, selected } = &mut self.kind
            && let Some(index) = options.iter().position(|o| o == label)
        {
            *selected = Some(index);
            return true;
        }
        false
    }

    /// Option labels of a selector, in render order; `None` for other kinds.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            NodeKind::Select { options, .. } => Some(options),
            _ => None,
        }
    }
}

/// Strip tags and decode entities, leaving display text.
fn strip_markup(html: &str) -> String {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let tag_regex =
        TAG_REGEX.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("Invalid tag regex"));
    let without_tags = tag_regex.replace_all(html, "");
    html_escape::decode_html_entities(&without_tags).into_owned()
}
