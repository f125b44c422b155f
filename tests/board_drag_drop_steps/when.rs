//! When steps for board drag-and-drop scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use join_board::task::{domain::TaskStatus, services::DropRequest};
use rstest_bdd_macros::when;

#[when(r#""{title}" is dropped into "{target}" at position {index:usize}"#)]
fn task_dropped(
    world: &mut BoardWorld,
    title: String,
    target: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let request = DropRequest {
        task_id: world.id_of(&title)?,
        target: TaskStatus::try_from(target.as_str())?,
        target_index: index,
    };
    run_async(world.service.drop_task(&request)).wrap_err("drop task")?;
    Ok(())
}

#[when(r#""{title}" is moved to the top of "{target}""#)]
fn task_moved_to_top(
    world: &mut BoardWorld,
    title: String,
    target: String,
) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let status = TaskStatus::try_from(target.as_str())?;
    run_async(world.service.move_to_top(&id, status)).wrap_err("move task to top")?;
    Ok(())
}
