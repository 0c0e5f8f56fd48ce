//! Widget trait and the typed registry of widget kinds.

use std::fmt;
use std::str::FromStr;

use folio_core::{RenderError, RenderResult};

use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::{Alert, Badge, Breadcrumbs, Button, Card, Form, Input, LinkList, Modal, Table};

/// A fragment builder.
///
/// Instances are created per render call, configured, rendered and dropped.
/// `render` is a pure function of the configured fields.
pub trait Widget: fmt::Debug {
    /// Which kind this widget is.
    fn kind(&self) -> WidgetKind;

    /// Set one named field.
    ///
    /// Fields outside the kind's vocabulary fail with `UnknownField`;
    /// values of the wrong shape fail with `InvalidValue`.
    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()>;

    /// Render the configured widget.
    fn render(&self) -> Fragment;
}

/// Every widget kind the registry can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Alert,
    Badge,
    Breadcrumbs,
    Button,
    Card,
    Form,
    Input,
    LinkList,
    Modal,
    Table,
}

impl WidgetKind {
    /// All kinds, in name order.
    pub const ALL: [WidgetKind; 10] = [
        WidgetKind::Alert,
        WidgetKind::Badge,
        WidgetKind::Breadcrumbs,
        WidgetKind::Button,
        WidgetKind::Card,
        WidgetKind::Form,
        WidgetKind::Input,
        WidgetKind::LinkList,
        WidgetKind::Modal,
        WidgetKind::Table,
    ];

    /// Lowercase name (e.g., "button").
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Alert => "alert",
            WidgetKind::Badge => "badge",
            WidgetKind::Breadcrumbs => "breadcrumbs",
            WidgetKind::Button => "button",
            WidgetKind::Card => "card",
            WidgetKind::Form => "form",
            WidgetKind::Input => "input",
            WidgetKind::LinkList => "link_list",
            WidgetKind::Modal => "modal",
            WidgetKind::Table => "table",
        }
    }

    /// Field vocabulary of this kind, common fields included.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            WidgetKind::Alert => &["id", "class", "attr", "context", "html", "dismissible"],
            WidgetKind::Badge => &["id", "class", "attr", "context", "html"],
            WidgetKind::Breadcrumbs => &["id", "class", "attr", "item"],
            WidgetKind::Button => &["id", "class", "attr", "context", "type", "html"],
            WidgetKind::Card => &["id", "class", "attr", "header", "body", "footer"],
            WidgetKind::Form => &["id", "class", "attr", "action", "method", "html"],
            WidgetKind::Input => &[
                "id",
                "class",
                "attr",
                "type",
                "name",
                "label",
                "value",
                "placeholder",
                "required",
            ],
            WidgetKind::LinkList => &["id", "class", "attr", "link", "placeholder"],
            WidgetKind::Modal => &["id", "class", "attr", "header", "body", "button", "size"],
            WidgetKind::Table => &["id", "class", "attr", "head", "bodyRow"],
        }
    }

    /// Check whether a field belongs to this kind's vocabulary.
    pub fn accepts(&self, field: &str) -> bool {
        self.fields().contains(&field)
    }

    /// Create a fresh, unconfigured widget of this kind.
    pub fn create(&self) -> Box<dyn Widget> {
        match self {
            WidgetKind::Alert => Box::new(Alert::new()),
            WidgetKind::Badge => Box::new(Badge::new()),
            WidgetKind::Breadcrumbs => Box::new(Breadcrumbs::new()),
            WidgetKind::Button => Box::new(Button::new()),
            WidgetKind::Card => Box::new(Card::new()),
            WidgetKind::Form => Box::new(Form::new()),
            WidgetKind::Input => Box::new(Input::new()),
            WidgetKind::LinkList => Box::new(LinkList::new()),
            WidgetKind::Modal => Box::new(Modal::new()),
            WidgetKind::Table => Box::new(Table::new()),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidgetKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RenderError::Config(format!("Unknown widget kind: {}", s)))
    }
}

/// Build the error for a field outside a widget's vocabulary.
pub fn unknown_field(kind: WidgetKind, field: &str) -> RenderError {
    RenderError::UnknownField {
        widget: kind.name(),
        field: field.to_string(),
    }
}
