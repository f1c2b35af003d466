//! Create-form draft and its validation.

use thiserror::Error;

use crate::hunter::parse_skills;

/// Gender preselected by the create form.
pub const DEFAULT_GENDER: &str = "Masculino";

/// License tier assigned to new hunters unless the form says otherwise.
pub const DEFAULT_LICENSE: &str = "Cazador Rookie";

/// Raw create-form input. Numeric fields arrive as text, exactly as typed.
#[derive(Debug, Clone)]
pub struct HunterDraft {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub gender: String,
    pub license_type: String,
    /// Comma-separated skill list.
    pub skills: String,
}

impl Default for HunterDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            gender: DEFAULT_GENDER.to_string(),
            license_type: DEFAULT_LICENSE.to_string(),
            skills: String::new(),
        }
    }
}

/// Input field an operation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Height,
    Weight,
    Skills,
    Identity,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Skills => "skills",
            Field::Identity => "identity",
        };
        f.write_str(name)
    }
}

/// First validation failure for a piece of local input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: Field,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// A draft that passed validation: numbers coerced, name trimmed, skills
/// parsed into a non-empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidHunter {
    pub name: String,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub gender: String,
    pub skills: Vec<String>,
    pub license_type: String,
}

impl HunterDraft {
    /// Validate in form order, stopping at the first violation.
    ///
    /// Range bounds are inclusive: age 1–200, height 50–300 cm, weight
    /// 20–500 kg.
    pub fn validate(&self) -> Result<ValidHunter, FieldError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FieldError::new(Field::Name, "name is required"));
        }

        let age = parse_age(&self.age)?;
        let height = parse_measure(&self.height, Field::Height, 50.0, 300.0, "cm")?;
        let weight = parse_measure(&self.weight, Field::Weight, 20.0, 500.0, "kg")?;

        let skills = parse_skills(&self.skills);
        if skills.is_empty() {
            return Err(FieldError::new(Field::Skills, "at least one skill is required"));
        }

        Ok(ValidHunter {
            name: name.to_string(),
            age,
            height,
            weight,
            gender: self.gender.clone(),
            skills,
            license_type: self.license_type.clone(),
        })
    }
}

fn parse_age(raw: &str) -> Result<u32, FieldError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|age| (1..=200).contains(age))
        .ok_or_else(|| FieldError::new(Field::Age, "must be a whole number between 1 and 200"))
}

fn parse_measure(
    raw: &str,
    field: Field,
    min: f64,
    max: f64,
    unit: &str,
) -> Result<f64, FieldError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or_else(|| {
            FieldError::new(field, format!("must be a number between {} and {} {}", min, max, unit))
        })
}
