//! Fragment-producing widgets for server-rendered views.
//!
//! A widget is configured through a small field vocabulary and renders one
//! HTML [`Fragment`]. Composition happens by rendering children first and
//! passing their fragments into the parent's configuration:
//!
//! ```ignore
//! use folio_widgets::*;
//!
//! let save = Button::new().context("primary").button_type(ButtonType::Submit).text("Save").render();
//! let form = Form::new().action("/items/save").html(save).render();
//! let card = Card::new().header(Fragment::text("Edit item")).body(form).render();
//! ```

mod attributes;
mod fragment;
mod value;
mod widget;

mod alert;
mod badge;
mod breadcrumbs;
mod button;
mod card;
mod form;
mod input;
mod link_list;
mod modal;
mod table;

pub use attributes::*;
pub use fragment::*;
pub use value::*;
pub use widget::*;

pub use alert::*;
pub use badge::*;
pub use breadcrumbs::*;
pub use button::*;
pub use card::*;
pub use form::*;
pub use input::*;
pub use link_list::*;
pub use modal::*;
pub use table::*;
