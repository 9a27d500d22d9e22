//! When steps for task detail BDD scenarios.

use super::world::{TaskDetailWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use task_detail::allocation::domain::{AllocationId, TaskName, TaskRoute};

fn visit(world: &mut TaskDetailWorld, route: TaskRoute) -> Result<(), eyre::Report> {
    world
        .publish_allocation()
        .wrap_err("store scenario allocation")?;
    let mut session = world.session();
    world.requested_route = Some(route.clone());
    let state = run_async(session.visit(route)).clone();
    world.current_url = session.current_url();
    world.last_state = Some(state);
    Ok(())
}

#[when(r#"the task detail page for "{task}" is visited"#)]
fn visit_task_page(world: &mut TaskDetailWorld, task: String) -> Result<(), eyre::Report> {
    let raw_id = world
        .allocation_id
        .clone()
        .ok_or_else(|| eyre::eyre!("missing allocation id in scenario world"))?;
    let route = TaskRoute::new(AllocationId::new(raw_id)?, TaskName::new(task)?);
    visit(world, route)
}

#[when(r#"the task detail page for allocation "{allocation_id}" and task "{task}" is visited"#)]
fn visit_page_for_allocation(
    world: &mut TaskDetailWorld,
    allocation_id: String,
    task: String,
) -> Result<(), eyre::Report> {
    let route = TaskRoute::new(AllocationId::new(allocation_id)?, TaskName::new(task)?);
    visit(world, route)
}
