use chrono::NaiveDate;

use crate::domain::{DomainError, MemberInput, PetInput};
use crate::infrastructure::AppState;

/// Populate an empty database with a few members, pets and follow edges.
///
/// Does nothing when any member already exists.
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    if !state.members.list_members().await?.is_empty() {
        tracing::info!("Database already has members, skipping demo seed");
        return Ok(());
    }

    // 1. Create Members
    let people = [
        ("Alice", "alice@pawpals.test", "Dog person", "Toronto"),
        ("Bob", "bob@pawpals.test", "Two cats, one opinion", "Hamilton"),
        ("Carol", "carol@pawpals.test", "Rabbit whisperer", "Ottawa"),
    ];

    let mut ids = Vec::new();
    for (name, email, bio, location) in people {
        let member = state
            .members
            .add_member(MemberInput {
                member_name: name.to_owned(),
                email: Some(email.to_owned()),
                bio: Some(bio.to_owned()),
                location: Some(location.to_owned()),
            })
            .await?;
        ids.push(member.member_id);
    }
    let (alice, bob, carol) = (ids[0], ids[1], ids[2]);

    // 2. Create Pets (Biscuit is co-owned)
    let pets = [
        ("Biscuit", "Dog", "Beagle", (2019, 4, 12), vec![alice, bob]),
        ("Miso", "Cat", "Tabby", (2021, 9, 1), vec![bob]),
        ("Clover", "Rabbit", "Holland Lop", (2022, 2, 20), vec![carol]),
    ];

    for (name, pet_type, breed, (y, m, d), owner_ids) in pets {
        state
            .pets
            .add_pet(PetInput {
                name: name.to_owned(),
                pet_type: Some(pet_type.to_owned()),
                breed: Some(breed.to_owned()),
                dob: NaiveDate::from_ymd_opt(y, m, d),
                owner_ids,
            })
            .await?;
    }

    // 3. Create Follow edges
    for (follower, following) in [(alice, bob), (bob, alice), (carol, alice)] {
        state.connections.follow(follower, following).await?;
    }

    Ok(())
}
