use pawpals::db;
use pawpals::domain::{DomainError, MemberInput, PetInput};
use pawpals::infrastructure::AppState;

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

fn member_input(name: &str) -> MemberInput {
    MemberInput {
        member_name: name.to_string(),
        email: Some(format!("{}@pawpals.test", name.to_lowercase())),
        bio: Some("Pet lover".to_string()),
        location: Some("Toronto".to_string()),
    }
}

#[tokio::test]
async fn test_member_crud() {
    let state = setup_test_state().await;

    let created = state.members.add_member(member_input("Ann")).await.unwrap();
    assert_eq!(created.member_name, "Ann");
    assert_eq!(created.version, 1);

    let mut input = member_input("Annie");
    input.location = None;
    let updated = state
        .members
        .update_member(created.member_id, Some(created.member_id), input, Some(1))
        .await
        .unwrap();
    assert_eq!(updated.member_name, "Annie");
    assert_eq!(updated.location, None);
    assert_eq!(updated.version, 2);

    let all = state.members.list_members().await.unwrap();
    assert_eq!(all.len(), 1);

    state.members.delete_member(created.member_id).await.unwrap();
    let err = state.members.find_member(created.member_id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_add_member_validates_fields() {
    let state = setup_test_state().await;

    let err = state
        .members
        .add_member(member_input("  "))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let mut input = member_input("Ann");
    input.email = Some("not-an-email".to_string());
    let err = state.members.add_member(input).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn test_update_member_errors() {
    let state = setup_test_state().await;
    let ann = state.members.add_member(member_input("Ann")).await.unwrap();

    let err = state
        .members
        .update_member(ann.member_id, Some(ann.member_id + 1), member_input("Ann"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = state
        .members
        .update_member(999, None, member_input("Ghost"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    state
        .members
        .update_member(ann.member_id, None, member_input("Ann"), None)
        .await
        .unwrap();
    let err = state
        .members
        .update_member(ann.member_id, None, member_input("Stale"), Some(1))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ConcurrencyConflict(_)));
}

#[tokio::test]
async fn test_delete_member_with_connections_is_restricted() {
    let state = setup_test_state().await;
    let ann = state.members.add_member(member_input("Ann")).await.unwrap();
    let ben = state.members.add_member(member_input("Ben")).await.unwrap();

    state
        .connections
        .follow(ben.member_id, ann.member_id)
        .await
        .unwrap();

    let err = state.members.delete_member(ann.member_id).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
    assert!(state.members.find_member(ann.member_id).await.is_ok());

    state
        .connections
        .unfollow(ben.member_id, ann.member_id)
        .await
        .unwrap();
    state.members.delete_member(ann.member_id).await.unwrap();

    let err = state.members.delete_member(ann.member_id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_member_drops_ownership_but_keeps_pet() {
    let state = setup_test_state().await;
    let ann = state.members.add_member(member_input("Ann")).await.unwrap();
    let ben = state.members.add_member(member_input("Ben")).await.unwrap();

    let pet = state
        .pets
        .add_pet(PetInput {
            name: "Rex".to_string(),
            owner_ids: vec![ann.member_id, ben.member_id],
            ..Default::default()
        })
        .await
        .unwrap();

    state.members.delete_member(ann.member_id).await.unwrap();

    let pet = state.pets.find_pet(pet.pet_id).await.unwrap();
    assert_eq!(pet.owner_ids, vec![ben.member_id]);
}

#[tokio::test]
async fn test_home_view() {
    let state = setup_test_state().await;
    let ann = state.members.add_member(member_input("Ann")).await.unwrap();
    let ben = state.members.add_member(member_input("Ben")).await.unwrap();
    let cat = state.members.add_member(member_input("Cat")).await.unwrap();

    state
        .connections
        .follow(ann.member_id, ben.member_id)
        .await
        .unwrap();
    state
        .connections
        .follow(cat.member_id, ann.member_id)
        .await
        .unwrap();
    state
        .pets
        .add_pet(PetInput {
            name: "Rex".to_string(),
            owner_ids: vec![ann.member_id],
            ..Default::default()
        })
        .await
        .unwrap();

    let view = state.home.home_view(ann.member_id).await.unwrap();
    assert_eq!(view.member.member_name, "Ann");
    assert_eq!(view.pets.len(), 1);
    assert_eq!(view.friends.len(), 1);
    assert_eq!(view.friends[0].member_id, ben.member_id);
    assert_eq!(view.connections.len(), 2);

    // Ben is already followed; Cat follows Ann but Ann does not follow Cat
    let recommended: Vec<i32> = view
        .recommended_friends
        .iter()
        .map(|m| m.member_id)
        .collect();
    assert_eq!(recommended, vec![cat.member_id]);

    let err = state.home.home_view(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
