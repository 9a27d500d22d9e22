//! `minijinja` renderer turning a [`ViewState`] into an HTML fragment.
//!
//! Elements carry `data-test-*` attributes so rendered pages can be asserted
//! on without depending on layout.

use crate::allocation::{domain::TaskRoute, services::ViewState};
use minijinja::{Environment, context};
use thiserror::Error;

/// Registered template name; the `.html` suffix enables auto-escaping.
pub const PAGE_TEMPLATE_NAME: &str = "task_detail.html";

const PAGE_TEMPLATE: &str = r##"{% if status == "error" -%}
<section data-test-error>
  <h1 data-test-error-title>{{ title }}</h1>
  <p data-test-error-message>{{ message }}</p>
</section>
{%- elif status == "loading" -%}
<section data-test-loading>Loading {{ path }}</section>
{%- elif status == "ready" -%}
<nav data-test-breadcrumbs>
{%- for crumb in view.breadcrumbs %}
  {% if crumb.href is none -%}
  <span data-test-breadcrumb="{{ crumb.kind }}">{{ crumb.label }}</span>
  {%- else -%}
  <a data-test-breadcrumb="{{ crumb.kind }}" href="{{ crumb.href }}">{{ crumb.label }}</a>
  {%- endif %}
{%- endfor %}
</nav>
<h1 data-test-title>{{ view.task.name }}</h1>
<p data-test-state>{{ view.task.state }}</p>
{%- if view.task.started_at_display %}
<p data-test-started-at>{{ view.task.started_at_display }}</p>
{%- endif %}
{%- if view.addresses.kind == "listed" %}
<table data-test-task-addresses>
  <thead><tr><th>Dynamic?</th><th>Name</th><th>Address</th></tr></thead>
  <tbody>
  {%- for address in view.addresses.entries %}
    <tr data-test-task-address>
      <td data-test-task-address-is-dynamic>{{ "Yes" if address.is_dynamic else "No" }}</td>
      <td data-test-task-address-name>{{ address.label }}</td>
      <td data-test-task-address-address>{{ address.address }}</td>
    </tr>
  {%- endfor %}
  </tbody>
</table>
{%- endif %}
<table data-test-task-events>
  <thead><tr><th>Time</th><th>Type</th><th>Description</th></tr></thead>
  <tbody>
  {%- for event in view.events %}
    <tr data-test-task-event>
      <td data-test-task-event-time>{{ event.display_time }}</td>
      <td data-test-task-event-type>{{ event.event_type }}</td>
      <td data-test-task-event-message>{{ event.message }}</td>
    </tr>
  {%- endfor %}
  </tbody>
</table>
{%- endif %}
"##;

/// Errors returned while rendering a page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The template failed to compile or render.
    #[error("failed to render {template}: {reason}")]
    Template {
        /// Template name.
        template: String,
        /// Renderer message.
        reason: String,
    },
}

impl RenderError {
    fn template(err: &minijinja::Error) -> Self {
        Self::Template {
            template: PAGE_TEMPLATE_NAME.to_owned(),
            reason: err.to_string(),
        }
    }
}

/// Renders task detail page states.
#[derive(Debug)]
pub struct PageRenderer {
    environment: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer with the page template registered.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the template does not compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment
            .add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|err| RenderError::template(&err))?;
        Ok(Self { environment })
    }

    /// Renders a page state.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn render(&self, state: &ViewState) -> Result<String, RenderError> {
        let template = self
            .environment
            .get_template(PAGE_TEMPLATE_NAME)
            .map_err(|err| RenderError::template(&err))?;
        let path = state.route().map(TaskRoute::path).unwrap_or_default();

        let rendered = match state {
            ViewState::Idle => Ok(String::new()),
            ViewState::Loading { .. } => {
                template.render(context! { status => "loading", path => path })
            }
            ViewState::Error { error, .. } => template.render(context! {
                status => "error",
                path => path,
                title => error.title(),
                message => error.to_string(),
            }),
            ViewState::Ready { view, .. } => template.render(context! {
                status => "ready",
                path => path,
                view => view.as_ref(),
            }),
        };
        rendered.map_err(|err| RenderError::template(&err))
    }
}
