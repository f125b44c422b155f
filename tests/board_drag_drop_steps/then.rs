//! Then steps for board drag-and-drop scenarios.

use super::world::BoardWorld;
use join_board::task::domain::{Board, Task, TaskStatus};
use rstest_bdd_macros::then;

fn column_titles(tasks: &[Task], column: TaskStatus) -> Vec<String> {
    Board::from_tasks(tasks.iter().cloned())
        .column(column)
        .iter()
        .map(|task| task.title().to_owned())
        .collect()
}

#[then(r#"column "{status}" lists "{titles}""#)]
fn column_lists(world: &BoardWorld, status: String, titles: String) -> Result<(), eyre::Report> {
    let column = TaskStatus::try_from(status.as_str())?;
    let expected: Vec<String> = titles
        .split(',')
        .map(|title| title.trim().to_owned())
        .collect();

    world
        .settle(|tasks| column_titles(tasks, column) == expected)
        .map_err(|_| {
            let actual = column_titles(&world.service.cache().tasks(), column);
            eyre::eyre!("column {column} holds {actual:?}, expected {expected:?}")
        })
}

#[then("every column is densely ranked")]
fn densely_ranked(world: &BoardWorld) -> Result<(), eyre::Report> {
    world
        .settle(|tasks| Board::from_tasks(tasks.iter().cloned()).is_densely_ordered())
        .map_err(|_| eyre::eyre!("column ranks have gaps or duplicates"))
}

#[then(r#"column "{status}" is empty"#)]
fn column_is_empty(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let column = TaskStatus::try_from(status.as_str())?;
    world
        .settle(|tasks| column_titles(tasks, column).is_empty())
        .map_err(|_| eyre::eyre!("column {column} still holds tasks"))
}
