use pawpals::db;
use pawpals::domain::{DomainError, MemberInput};
use pawpals::infrastructure::AppState;

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

// Helper to create a test member
async fn create_member(state: &AppState, name: &str) -> i32 {
    state
        .members
        .add_member(MemberInput {
            member_name: name.to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to create member")
        .member_id
}

#[tokio::test]
async fn test_self_follow_is_invalid() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;

    let err = state.connections.follow(a, a).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert!(state.connections.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_follow_unfollow_lifecycle() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;

    let edge = state.connections.follow(a, b).await.unwrap();
    assert_eq!(edge.follower_id, a);
    assert_eq!(edge.following_id, b);
    assert_eq!(edge.follower_name, "Ann");
    assert_eq!(edge.following_name, "Ben");

    // Duplicate edge
    let err = state.connections.follow(a, b).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    state.connections.unfollow(a, b).await.unwrap();
    assert!(state.connections.list_following(a).await.unwrap().is_empty());

    // Second unfollow
    let err = state.connections.unfollow(a, b).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_reverse_edge_is_a_separate_follow() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;

    state.connections.follow(a, b).await.unwrap();
    state.connections.follow(b, a).await.unwrap();

    assert_eq!(state.connections.list_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_followers_contain_follower_exactly_once() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let c = create_member(&state, "Cat").await;

    state.connections.follow(a, b).await.unwrap();
    state.connections.follow(c, b).await.unwrap();
    let _ = state.connections.follow(a, b).await;

    let followers = state.connections.list_followers(b).await.unwrap();
    let ids: Vec<i32> = followers.iter().map(|m| m.member_id).collect();
    assert_eq!(ids, vec![a, c]);
    assert_eq!(followers[0].member_name, "Ann");

    let following = state.connections.list_following(a).await.unwrap();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].member_id, b);
}

#[tokio::test]
async fn test_follow_unknown_member_is_not_found() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;

    let err = state.connections.follow(a, 999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = state.connections.list_followers(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_connections_of_member_cover_both_directions() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let c = create_member(&state, "Cat").await;

    state.connections.follow(a, b).await.unwrap();
    state.connections.follow(c, a).await.unwrap();
    state.connections.follow(b, c).await.unwrap();

    let edges = state.connections.list_connections_of(a).await.unwrap();
    let pairs: Vec<(i32, i32)> = edges
        .iter()
        .map(|e| (e.follower_id, e.following_id))
        .collect();
    assert_eq!(pairs, vec![(a, b), (c, a)]);
}

#[tokio::test]
async fn test_member_dto_lists_connection_ids() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;

    let edge = state.connections.follow(a, b).await.unwrap();

    let ann = state.members.find_member(a).await.unwrap();
    assert_eq!(ann.following_connection_ids, vec![edge.connection_id]);
    assert!(ann.follower_connection_ids.is_empty());

    let ben = state.members.find_member(b).await.unwrap();
    assert_eq!(ben.follower_connection_ids, vec![edge.connection_id]);
}

#[tokio::test]
async fn test_update_connection_rules() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let c = create_member(&state, "Cat").await;

    let ab = state.connections.follow(a, b).await.unwrap();
    state.connections.follow(a, c).await.unwrap();

    // Mismatched ids
    let err = state
        .connections
        .update(ab.connection_id, Some(ab.connection_id + 1), a, c)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    // Would duplicate a -> c
    let err = state
        .connections
        .update(ab.connection_id, None, a, c)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    // Would become a self-loop
    let err = state
        .connections
        .update(ab.connection_id, None, b, b)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let updated = state
        .connections
        .update(ab.connection_id, Some(ab.connection_id), c, b)
        .await
        .unwrap();
    assert_eq!(updated.follower_id, c);
    assert_eq!(updated.following_name, "Ben");

    let err = state.connections.update(999, None, a, b).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_connection_by_id() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;

    let edge = state.connections.follow(a, b).await.unwrap();
    state.connections.delete(edge.connection_id).await.unwrap();

    let err = state.connections.delete(edge.connection_id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    let err = state.connections.find(edge.connection_id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
