//! Table widget.

use folio_core::RenderResult;

use crate::attributes::Attributes;
use crate::fragment::Fragment;
use crate::value::WidgetValue;
use crate::widget::{unknown_field, Widget, WidgetKind};

const KIND: WidgetKind = WidgetKind::Table;

/// A data table. Each `bodyRow` call appends one row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    attrs: Attributes,
    head: Vec<Fragment>,
    rows: Vec<Vec<Fragment>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set header cells from plain text.
    pub fn head(mut self, cells: &[&str]) -> Self {
        self.head = cells.iter().map(|c| Fragment::text(c)).collect();
        self
    }

    /// Append a row of rendered cells.
    pub fn body_row(mut self, cells: Vec<Fragment>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.attrs.add_class(classes);
        self
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Widget for Table {
    fn kind(&self) -> WidgetKind {
        KIND
    }

    fn configure(&mut self, field: &str, value: WidgetValue) -> RenderResult<()> {
        match field {
            "head" => self.head = value.into_cells(KIND.name(), field)?,
            "bodyRow" => self.rows.push(value.into_cells(KIND.name(), field)?),
            "id" | "class" | "attr" => self.attrs.configure(KIND.name(), field, value)?,
            _ => return Err(unknown_field(KIND, field)),
        }
        Ok(())
    }

    fn render(&self) -> Fragment {
        let mut html = format!("<table{}>", self.attrs.render(&["table"]));

        if !self.head.is_empty() {
            let cells: String = self.head.iter().map(|c| format!("<th>{}</th>", c)).collect();
            html.push_str(&format!("<thead><tr>{}</tr></thead>", cells));
        }

        html.push_str("<tbody>");
        for row in &self.rows {
            let cells: String = row.iter().map(|c| format!("<td>{}</td>", c)).collect();
            html.push_str(&format!("<tr>{}</tr>", cells));
        }
        html.push_str("</tbody></table>");

        Fragment::new(html)
    }
}
