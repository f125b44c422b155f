//! Behaviour tests for drag-and-drop on the board.

#[path = "board_drag_drop_steps/mod.rs"]
mod board_drag_drop_steps_defs;

use board_drag_drop_steps_defs::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_drag_drop.feature",
    name = "Drop a task into another column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_into_another_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_drag_drop.feature",
    name = "Reorder a task within its column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_within_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_drag_drop.feature",
    name = "Drop onto a filtered board"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_onto_filtered_board(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_drag_drop.feature",
    name = "Move a task to the top of a column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_to_top_of_column(world: BoardWorld) {
    let _ = world;
}
