//! Field-level validation shared by the member and pet services.

use chrono::{NaiveDate, Utc};

use super::{DomainError, MemberInput, PetInput};

/// Trim a string; blank strings become `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

pub fn validate_member(input: MemberInput) -> Result<MemberInput, DomainError> {
    let member_name = input.member_name.trim().to_string();
    if member_name.is_empty() {
        return Err(DomainError::InvalidInput(
            "member_name must not be blank".to_string(),
        ));
    }

    let email = normalize_optional(input.email);
    if let Some(email) = &email
        && !is_valid_email(email)
    {
        return Err(DomainError::InvalidInput(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    Ok(MemberInput {
        member_name,
        email,
        bio: normalize_optional(input.bio),
        location: normalize_optional(input.location),
    })
}

pub fn validate_pet(input: PetInput) -> Result<PetInput, DomainError> {
    validate_pet_on(input, Utc::now().date_naive())
}

fn validate_pet_on(input: PetInput, today: NaiveDate) -> Result<PetInput, DomainError> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::InvalidInput("name must not be blank".to_string()));
    }

    if let Some(dob) = input.dob
        && dob > today
    {
        return Err(DomainError::InvalidInput(format!(
            "date of birth {} is in the future",
            dob
        )));
    }

    // Keep first occurrence order, drop repeats
    let mut owner_ids = Vec::with_capacity(input.owner_ids.len());
    for id in input.owner_ids {
        if !owner_ids.contains(&id) {
            owner_ids.push(id);
        }
    }

    Ok(PetInput {
        name,
        pet_type: normalize_optional(input.pet_type),
        breed: normalize_optional(input.breed),
        dob: input.dob,
        owner_ids,
    })
}
