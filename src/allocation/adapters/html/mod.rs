//! HTML rendering of the task detail page.

mod page;

pub use page::{PAGE_TEMPLATE_NAME, PageRenderer, RenderError};
