use super::*;

#[test]
fn new_token_is_live() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
    assert_eq!(token.check(), Ok(()));
}

#[test]
fn cancel_is_visible_through_clones() {
    let token = CancelToken::new();
    let held_by_task = token.clone();
    token.cancel();
    assert!(held_by_task.is_cancelled());
    assert_eq!(held_by_task.check(), Err(ApiError::Cancelled));
}

#[test]
fn for_view_cancels_when_owner_is_cleaned_up() {
    use leptos::prelude::Owner;

    let owner = Owner::new();
    let token = owner.with(CancelToken::for_view);
    assert!(!token.is_cancelled());
    owner.cleanup();
    assert!(token.is_cancelled());
}
