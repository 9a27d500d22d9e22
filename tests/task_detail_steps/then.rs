//! Then steps for task detail BDD scenarios.

use super::world::TaskDetailWorld;
use rstest_bdd_macros::then;
use task_detail::allocation::{
    domain::{BreadcrumbKind, TaskAddress, TaskDetailView, TaskEventRow},
    services::ViewState,
};

fn ready_view(world: &TaskDetailWorld) -> Result<&TaskDetailView, eyre::Report> {
    let state = world
        .last_state
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing view state in scenario world"))?;
    state.view().ok_or_else(|| match state.error() {
        Some(err) => eyre::eyre!("expected a rendered task, found error: {err}"),
        None => eyre::eyre!("expected a rendered task, found {state:?}"),
    })
}

fn address<'a>(view: &'a TaskDetailView, label: &str) -> Result<&'a TaskAddress, eyre::Report> {
    view.addresses()
        .entries()
        .iter()
        .find(|entry| entry.label() == label)
        .ok_or_else(|| eyre::eyre!("no address labelled {label}"))
}

#[then(r#"the page shows task "{task}" in state "{state}""#)]
fn page_shows_task(
    world: &TaskDetailWorld,
    task: String,
    state: String,
) -> Result<(), eyre::Report> {
    let view = ready_view(world)?;
    if view.task().name().as_str() != task {
        return Err(eyre::eyre!(
            "expected task {task}, found {}",
            view.task().name()
        ));
    }
    if !view.task().state().as_str().eq_ignore_ascii_case(&state) {
        return Err(eyre::eyre!(
            "expected state {state}, found {}",
            view.task().state().as_str()
        ));
    }
    Ok(())
}

#[then("the allocation breadcrumb shows the short allocation id")]
fn allocation_breadcrumb_shows_short_id(world: &TaskDetailWorld) -> Result<(), eyre::Report> {
    let view = ready_view(world)?;
    let crumb = view
        .breadcrumb(BreadcrumbKind::Allocation)
        .ok_or_else(|| eyre::eyre!("missing allocation breadcrumb"))?;
    let expected = view.allocation_id().short_id();
    if crumb.label() != expected {
        return Err(eyre::eyre!(
            "expected breadcrumb label {expected}, found {}",
            crumb.label()
        ));
    }
    Ok(())
}

#[then("the page lists {count:usize} addresses sorted by label")]
fn addresses_sorted_by_label(world: &TaskDetailWorld, count: usize) -> Result<(), eyre::Report> {
    let entries = ready_view(world)?.addresses().entries();
    if entries.len() != count {
        return Err(eyre::eyre!(
            "expected {count} addresses, found {}",
            entries.len()
        ));
    }
    if !entries.is_sorted_by(|left, right| left.label() <= right.label()) {
        return Err(eyre::eyre!("addresses are not sorted by label"));
    }
    Ok(())
}

#[then(r#"the address labelled "{label}" is dynamic"#)]
fn address_is_dynamic(world: &TaskDetailWorld, label: String) -> Result<(), eyre::Report> {
    if !address(ready_view(world)?, &label)?.is_dynamic() {
        return Err(eyre::eyre!("expected {label} to be a dynamic port"));
    }
    Ok(())
}

#[then(r#"the address labelled "{label}" is reserved"#)]
fn address_is_reserved(world: &TaskDetailWorld, label: String) -> Result<(), eyre::Report> {
    if address(ready_view(world)?, &label)?.is_dynamic() {
        return Err(eyre::eyre!("expected {label} to be a reserved port"));
    }
    Ok(())
}

#[then("every address uses the node host")]
fn addresses_use_node_host(world: &TaskDetailWorld) -> Result<(), eyre::Report> {
    let node_addr = world
        .node_addr
        .as_deref()
        .ok_or_else(|| eyre::eyre!("missing node address in scenario world"))?;
    let host = node_addr.rsplit_once(':').map_or(node_addr, |(host, _)| host);
    for entry in ready_view(world)?.addresses().entries() {
        let expected = format!("{host}:{}", entry.port());
        if entry.address() != expected {
            return Err(eyre::eyre!(
                "expected address {expected}, found {}",
                entry.address()
            ));
        }
    }
    Ok(())
}

#[then("the page lists {count:usize} events with the latest last")]
fn events_listed_latest_last(world: &TaskDetailWorld, count: usize) -> Result<(), eyre::Report> {
    let events = ready_view(world)?.events();
    if events.len() != count {
        return Err(eyre::eyre!("expected {count} events, found {}", events.len()));
    }
    let last_message = format!("Lifecycle message {}", count.saturating_sub(1));
    if events.latest().map(TaskEventRow::message) != Some(last_message.as_str()) {
        return Err(eyre::eyre!("expected latest event to be {last_message}"));
    }
    Ok(())
}

#[then(r#"the page shows a "{title}" error"#)]
fn page_shows_error(world: &TaskDetailWorld, title: String) -> Result<(), eyre::Report> {
    let state = world
        .last_state
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing view state in scenario world"))?;
    let ViewState::Error { error, .. } = state else {
        return Err(eyre::eyre!("expected error state, found {state:?}"));
    };
    if error.title() != title {
        return Err(eyre::eyre!(
            "expected error title {title}, found {}",
            error.title()
        ));
    }
    Ok(())
}

#[then("exactly one backend request was answered with status {status:u16}")]
fn one_backend_request(world: &TaskDetailWorld, status: u16) -> Result<(), eyre::Report> {
    let requests = world.source.handled_requests()?;
    let [request] = requests.as_slice() else {
        return Err(eyre::eyre!(
            "expected one backend request, found {}",
            requests.len()
        ));
    };
    if request.status != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            request.status
        ));
    }
    Ok(())
}

#[then("the current URL is still the requested URL")]
fn current_url_unchanged(world: &TaskDetailWorld) -> Result<(), eyre::Report> {
    let requested = world
        .requested_route
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing requested route in scenario world"))?;
    if world.current_url.as_deref() != Some(requested.path().as_str()) {
        return Err(eyre::eyre!(
            "expected current URL {}, found {:?}",
            requested.path(),
            world.current_url
        ));
    }
    Ok(())
}

#[then("no address section is shown")]
fn no_address_section(world: &TaskDetailWorld) -> Result<(), eyre::Report> {
    if ready_view(world)?.addresses().is_listed() {
        return Err(eyre::eyre!("expected the address section to be omitted"));
    }
    Ok(())
}
