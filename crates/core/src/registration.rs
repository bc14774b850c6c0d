//! Form inputs submitted by students and admins, with their validation rules.
//!
//! Field names on the wire follow the HTML forms (`nome`, `curso`, ...).
//! Browsers send empty strings for blank inputs, so optional fields treat
//! `""` as absent and every text field is trimmed on the way in.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::naming::validate_group_count;
use crate::types::DbId;

/// A student's self-registration into a track.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegistrationInput {
    #[serde(rename = "nome", deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(email, length(max = 255))]
    pub email: String,

    #[serde(rename = "telefone", default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[serde(rename = "curso", default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 100))]
    pub course: Option<String>,

    #[serde(rename = "turno", default, deserialize_with = "empty_as_none")]
    #[validate(length(max = 50))]
    pub shift: Option<String>,

    #[serde(rename = "periodo", default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 1, max = 20))]
    pub period: Option<i32>,

    #[serde(rename = "eixo_id")]
    pub track_id: DbId,
}

/// Admin request to create a track together with its groups.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTrackInput {
    #[serde(rename = "nome_eixo", deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(rename = "descricao", default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,

    #[serde(rename = "qtd_grupos")]
    pub group_count: u32,
}

/// Validate a registration form.
pub fn validate_registration(input: &RegistrationInput) -> Result<(), CoreError> {
    input.validate().map_err(validation_error)
}

/// Validate a track creation form, including the group count bounds.
pub fn validate_new_track(input: &NewTrackInput) -> Result<(), CoreError> {
    input.validate().map_err(validation_error)?;
    validate_group_count(input.group_count)
}

/// Collapse validator output into a single message listing the bad fields.
fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|k| k.to_string())
        .collect();
    fields.sort();
    CoreError::Validation(format!("Invalid fields: {}", fields.join(", ")))
}

fn trimmed<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    Ok(raw.trim().to_string())
}

fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
