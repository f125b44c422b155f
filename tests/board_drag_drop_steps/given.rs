//! Given steps for board drag-and-drop scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use join_board::task::domain::{Category, TaskContent, TaskStatus};
use rstest_bdd_macros::given;

#[given(r#"a task "{title}" in "{status}""#)]
fn task_in_column(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    world.ensure_synced()?;
    let column = TaskStatus::try_from(status.as_str())?;
    let before = world.service.cache().tasks().len();
    let id = run_async(world.service.create(
        column,
        TaskContent::new(title.as_str(), Category::TechnicalTask),
    ))
    .wrap_err("create task for drag-and-drop scenario")?;
    world.settle(|tasks| tasks.len() == before + 1)?;
    world.ids.insert(title, id);
    Ok(())
}

#[given(r#"the board is searched for "{term}""#)]
fn board_searched(world: &mut BoardWorld, term: String) {
    world.service.search(&term);
}
