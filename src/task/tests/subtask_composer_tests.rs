//! Tests for the subtask composer.

use crate::task::domain::{Subtask, TitleError, TitleRules};
use crate::task::services::{SubtaskComposer, SubtaskInputError};
use rstest::{fixture, rstest};

fn titles(composer: &SubtaskComposer) -> Vec<&str> {
    composer
        .subtasks()
        .iter()
        .map(|subtask| subtask.title.as_str())
        .collect()
}

#[fixture]
fn composer() -> SubtaskComposer {
    SubtaskComposer::new(
        vec![
            Subtask::new("Draft"),
            Subtask::new("Review"),
            Subtask::new("Publish"),
        ],
        TitleRules::default(),
    )
}

#[rstest]
fn commit_appends_trimmed_titles_and_clears_input(mut composer: SubtaskComposer) {
    composer.set_input("  Announce  ");
    assert!(composer.has_input());

    composer.commit().expect("valid subtask");

    assert_eq!(titles(&composer), vec!["Draft", "Review", "Publish", "Announce"]);
    assert_eq!(composer.input(), "");
    assert!(!composer.subtasks().iter().any(|subtask| subtask.done));
}

#[rstest]
fn duplicates_are_ignored_case_insensitively(mut composer: SubtaskComposer) {
    composer.set_input(" review ");

    assert_eq!(
        composer.commit(),
        Err(SubtaskInputError::Duplicate("review".to_owned()))
    );
    assert_eq!(composer.subtasks().len(), 3);
    assert_eq!(composer.input(), " review ", "input is kept on error");
}

#[rstest]
#[case("   ", SubtaskInputError::Empty)]
#[case("ok", SubtaskInputError::Invalid(TitleError::Length { min: 3, max: 100, actual: 2 }))]
#[case("100%", SubtaskInputError::Invalid(TitleError::InvalidCharacter('%')))]
fn invalid_input_is_rejected(
    mut composer: SubtaskComposer,
    #[case] input: &str,
    #[case] expected: SubtaskInputError,
) {
    composer.set_input(input);
    assert_eq!(composer.commit(), Err(expected));
    assert_eq!(composer.subtasks().len(), 3);
}

#[rstest]
fn input_error_is_silent_for_blank_input(mut composer: SubtaskComposer) {
    composer.set_input("  ");
    assert_eq!(composer.input_error(), None);
    composer.set_input("a#%");
    assert_eq!(composer.input_error(), Some(TitleError::InvalidCharacter('%')));
}

#[rstest]
fn editing_replaces_the_title_in_place(mut composer: SubtaskComposer) {
    assert!(composer.start_edit(1));
    assert_eq!(composer.input(), "Review");
    assert_eq!(composer.editing_index(), Some(1));

    composer.set_input("Peer review");
    composer.commit().expect("valid edit");

    assert_eq!(titles(&composer), vec!["Draft", "Peer review", "Publish"]);
    assert_eq!(composer.editing_index(), None);
}

#[rstest]
fn editing_may_keep_the_same_title(mut composer: SubtaskComposer) {
    assert!(composer.start_edit(0));
    composer.commit().expect("unchanged title is accepted");
    assert_eq!(titles(&composer), vec!["Draft", "Review", "Publish"]);
}

#[rstest]
fn start_edit_ignores_unknown_indices(mut composer: SubtaskComposer) {
    assert!(!composer.start_edit(9));
    assert_eq!(composer.editing_index(), None);
}

#[rstest]
fn removing_the_edited_subtask_cancels_editing(mut composer: SubtaskComposer) {
    composer.start_edit(1);

    let removed = composer.remove(1);

    assert_eq!(removed, Some(Subtask::new("Review")));
    assert_eq!(composer.editing_index(), None);
    assert_eq!(composer.input(), "");
}

#[rstest]
fn removing_an_earlier_subtask_shifts_the_edit_index(mut composer: SubtaskComposer) {
    composer.start_edit(2);

    composer.remove(0);

    assert_eq!(composer.editing_index(), Some(1));
    assert_eq!(composer.input(), "Publish");
    composer.set_input("Ship it");
    composer.commit().expect("valid edit");
    assert_eq!(titles(&composer), vec!["Review", "Ship it"]);
}

#[rstest]
fn removing_a_later_subtask_keeps_the_edit_index(mut composer: SubtaskComposer) {
    composer.start_edit(0);
    composer.remove(2);
    assert_eq!(composer.editing_index(), Some(0));
    assert_eq!(composer.remove(5), None);
}
