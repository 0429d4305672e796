// src/models/team.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
}

impl Team {
    /// Build an unsaved-looking team, handy for in-memory stores.
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            slug: slugify(name),
            contact_person: None,
            contact_number: None,
        }
    }
}

/// Request to create or replace a team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamRequest {
    pub name: String,
    pub slug: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
}

impl TeamRequest {
    /// Validate team request
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        if name.chars().count() > 100 {
            return Err("Team name cannot exceed 100 characters".to_string());
        }

        if self.resolved_slug().is_empty() {
            return Err("Team name must contain at least one letter or number".to_string());
        }

        if let Some(person) = &self.contact_person {
            if person.chars().count() > 100 {
                return Err("Contact person cannot exceed 100 characters".to_string());
            }
        }

        if let Some(number) = &self.contact_number {
            if number.chars().count() > 15 {
                return Err("Contact number cannot exceed 15 characters".to_string());
            }
        }

        Ok(())
    }

    /// The explicit slug if one was given, otherwise one derived from the name.
    pub fn resolved_slug(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.trim().is_empty() => slugify(slug),
            _ => slugify(&self.name),
        }
    }
}

/// Lowercase ASCII alphanumerics; every other run of characters becomes one `-`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
