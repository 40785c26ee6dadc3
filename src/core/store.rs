use std::fmt;

use crate::domain::model::Mobile;

/// Result of an insert attempt. Duplicate ids are a reported condition, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added { id: u32 },
    DuplicateId { id: u32 },
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOutcome::Added { id } => write!(f, "Mobile with ID {} added successfully.", id),
            AddOutcome::DuplicateId { id } => {
                write!(f, "A mobile with ID {} already exists.", id)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { id: u32 },
    NotFound { id: u32 },
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted { id } => write!(f, "Mobile with ID {} deleted.", id),
            DeleteOutcome::NotFound { id } => write!(f, "Mobile with ID {} not found.", id),
        }
    }
}

/// In-memory collection of mobile records, insertion-order preserved.
/// At most one record per id at any time.
#[derive(Debug, Default)]
pub struct MobileStore {
    mobiles: Vec<Mobile>,
}

impl MobileStore {
    pub fn new() -> Self {
        Self {
            mobiles: Vec::new(),
        }
    }

    pub fn add(&mut self, mobile: Mobile) -> AddOutcome {
        if self.mobiles.iter().any(|m| m.id == mobile.id) {
            return AddOutcome::DuplicateId { id: mobile.id };
        }
        let id = mobile.id;
        self.mobiles.push(mobile);
        AddOutcome::Added { id }
    }

    pub fn all(&self) -> &[Mobile] {
        &self.mobiles
    }

    /// Case-insensitive exact match on brand, matches in insertion order.
    pub fn search_by_brand(&self, brand: &str) -> Vec<&Mobile> {
        let needle = brand.to_lowercase();
        self.mobiles
            .iter()
            .filter(|m| m.brand.to_lowercase() == needle)
            .collect()
    }

    pub fn delete(&mut self, id: u32) -> DeleteOutcome {
        match self.mobiles.iter().position(|m| m.id == id) {
            Some(index) => {
                self.mobiles.remove(index);
                DeleteOutcome::Deleted { id }
            }
            None => DeleteOutcome::NotFound { id },
        }
    }

    pub fn len(&self) -> usize {
        self.mobiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mobiles.is_empty()
    }
}
