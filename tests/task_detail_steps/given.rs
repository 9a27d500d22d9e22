//! Given steps for task detail BDD scenarios.

use super::world::{TaskDetailWorld, lifecycle_state, sample_events};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use task_detail::allocation::domain::{Port, TaskName, TaskState};

#[given(r#"an allocation "{allocation_id}" on a node at "{address}""#)]
fn allocation_on_node(world: &mut TaskDetailWorld, allocation_id: String, address: String) {
    world.allocation_id = Some(allocation_id);
    world.node_addr = Some(address);
}

#[given(r#"the allocation runs task "{task}" in state "{state}" with {count:usize} events"#)]
fn allocation_runs_task(
    world: &mut TaskDetailWorld,
    task: String,
    state: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let name = TaskName::new(task).wrap_err("construct scenario task name")?;
    let state = lifecycle_state(&state)?;
    world
        .tasks
        .push(TaskState::new(name, state).with_events(sample_events(count)));
    Ok(())
}

#[given(r#"task "{task}" reserves port "{label}" {value:u16}"#)]
fn task_reserves_port(world: &mut TaskDetailWorld, task: String, label: String, value: u16) {
    let plan = world.port_plan(&task);
    plan.declares_network = true;
    plan.reserved.push(Port::new(label, value));
}

#[given(r#"task "{task}" is assigned dynamic port "{label}" {value:u16}"#)]
fn task_assigned_dynamic_port(
    world: &mut TaskDetailWorld,
    task: String,
    label: String,
    value: u16,
) {
    let plan = world.port_plan(&task);
    plan.declares_network = true;
    plan.dynamic.push(Port::new(label, value));
}

#[given(r#"task "{task}" declares no networks"#)]
fn task_declares_no_networks(world: &mut TaskDetailWorld, task: String) {
    world.port_plan(&task).declares_network = false;
}
