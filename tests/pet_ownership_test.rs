use chrono::NaiveDate;
use pawpals::db;
use pawpals::domain::{DomainError, MemberInput, PetInput};
use pawpals::infrastructure::AppState;
use pawpals::models::pet_owner;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

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

fn pet_input(name: &str, owner_ids: Vec<i32>) -> PetInput {
    PetInput {
        name: name.to_string(),
        pet_type: Some("Dog".to_string()),
        breed: Some("Beagle".to_string()),
        dob: NaiveDate::from_ymd_opt(2020, 1, 15),
        owner_ids,
    }
}

async fn ownership_rows(state: &AppState, pet_id: i32) -> u64 {
    pet_owner::Entity::find()
        .filter(pet_owner::Column::PetId.eq(pet_id))
        .count(state.db())
        .await
        .expect("Failed to count ownership rows")
}

#[tokio::test]
async fn test_add_pet_with_owners() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;

    let pet = state
        .pets
        .add_pet(pet_input("Biscuit", vec![a, b, a]))
        .await
        .unwrap();
    assert_eq!(pet.owner_ids, vec![a, b]);
    assert_eq!(pet.version, 1);

    let found = state.pets.find_pet(pet.pet_id).await.unwrap();
    assert_eq!(found.name, "Biscuit");
    assert_eq!(found.dob, NaiveDate::from_ymd_opt(2020, 1, 15));
    assert_eq!(found.owner_ids, vec![a, b]);
}

#[tokio::test]
async fn test_add_pet_with_missing_owner_writes_nothing() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;

    let err = state
        .pets
        .add_pet(pet_input("Ghost", vec![a, 42]))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(state.pets.list_pets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_owner_twice_conflicts() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let pet = state.pets.add_pet(pet_input("Rex", vec![a])).await.unwrap();

    let updated = state.pets.add_owner(pet.pet_id, b).await.unwrap();
    assert_eq!(updated.owner_ids, vec![a, b]);

    let err = state.pets.add_owner(pet.pet_id, b).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
    assert_eq!(ownership_rows(&state, pet.pet_id).await, 2);
}

#[tokio::test]
async fn test_add_owner_requires_both_entities() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let pet = state.pets.add_pet(pet_input("Rex", vec![])).await.unwrap();

    let err = state.pets.add_owner(999, a).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = state.pets.add_owner(pet.pet_id, 999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_remove_owner() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let pet = state
        .pets
        .add_pet(pet_input("Rex", vec![a, b]))
        .await
        .unwrap();

    state.pets.remove_owner(pet.pet_id, a).await.unwrap();
    assert_eq!(
        state.pets.find_pet(pet.pet_id).await.unwrap().owner_ids,
        vec![b]
    );

    let err = state.pets.remove_owner(pet.pet_id, a).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_pet_removes_ownership_rows() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let pet = state
        .pets
        .add_pet(pet_input("Rex", vec![a, b]))
        .await
        .unwrap();
    let other = state.pets.add_pet(pet_input("Max", vec![a])).await.unwrap();

    state.pets.delete_pet(pet.pet_id).await.unwrap();

    assert_eq!(ownership_rows(&state, pet.pet_id).await, 0);
    assert_eq!(ownership_rows(&state, other.pet_id).await, 1);
    let err = state.pets.find_pet(pet.pet_id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = state.pets.delete_pet(pet.pet_id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_update_pet_reconciles_owners() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let c = create_member(&state, "Cat").await;
    let pet = state
        .pets
        .add_pet(pet_input("Rex", vec![a, b]))
        .await
        .unwrap();

    let mut input = pet_input("Rex II", vec![b, c]);
    input.breed = None;
    let updated = state
        .pets
        .update_pet(pet.pet_id, Some(pet.pet_id), input, Some(1))
        .await
        .unwrap();

    assert_eq!(updated.name, "Rex II");
    assert_eq!(updated.breed, None);
    assert_eq!(updated.version, 2);
    assert_eq!(updated.owner_ids, vec![b, c]);
    assert_eq!(ownership_rows(&state, pet.pet_id).await, 2);
}

#[tokio::test]
async fn test_update_pet_with_stale_version_conflicts() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let pet = state.pets.add_pet(pet_input("Rex", vec![a])).await.unwrap();

    state
        .pets
        .update_pet(pet.pet_id, None, pet_input("Rex", vec![a]), None)
        .await
        .unwrap();

    let err = state
        .pets
        .update_pet(pet.pet_id, None, pet_input("Stale", vec![a]), Some(1))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ConcurrencyConflict(_)));
    assert_eq!(state.pets.find_pet(pet.pet_id).await.unwrap().name, "Rex");
}

#[tokio::test]
async fn test_update_pet_rejects_mismatched_id_and_missing_pet() {
    let state = setup_test_state().await;
    let pet = state.pets.add_pet(pet_input("Rex", vec![])).await.unwrap();

    let err = state
        .pets
        .update_pet(pet.pet_id, Some(pet.pet_id + 1), pet_input("Rex", vec![]), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = state
        .pets
        .update_pet(999, None, pet_input("Rex", vec![]), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn test_list_pets_for_member() {
    let state = setup_test_state().await;
    let a = create_member(&state, "Ann").await;
    let b = create_member(&state, "Ben").await;
    let shared = state
        .pets
        .add_pet(pet_input("Shared", vec![a, b]))
        .await
        .unwrap();
    state.pets.add_pet(pet_input("Bens", vec![b])).await.unwrap();

    let pets = state.pets.list_pets_for_member(a).await.unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].pet_id, shared.pet_id);
    assert_eq!(pets[0].owner_ids, vec![a, b]);

    let err = state.pets.list_pets_for_member(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
