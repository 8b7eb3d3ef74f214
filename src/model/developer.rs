// src/model/developer.rs

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::calendar::ZERO_DATE;

/// A team member who can be assigned to tasks of the types they know.
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    pub name: String,
    /// Looked up in the [`RoleTable`]; unknown roles contribute no progress.
    pub role: String,
    pub task_types: Vec<String>,
    /// The developer cannot join a task on any date before this one.
    pub next_free_time: NaiveDate,
}

impl Developer {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        task_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            task_types: task_types.into_iter().map(Into::into).collect(),
            next_free_time: ZERO_DATE,
        }
    }

    /// Exact string match against the developer's task types.
    pub fn can_work_on(&self, task_type: &str) -> bool {
        self.task_types.iter().any(|t| t == task_type)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub name: String,
    /// Fraction of a nominal workday contributed, in (0, 1].
    pub availability_percent: f64,
}

impl Role {
    pub fn new(name: impl Into<String>, availability_percent: f64) -> Self {
        Self {
            name: name.into(),
            availability_percent,
        }
    }
}

/// Immutable role lookup keyed by role name. Later rows replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    roles: HashMap<String, Role>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: Role) {
        self.roles.insert(role.name.clone(), role);
    }

    pub fn get(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    pub fn availability_of(&self, name: &str) -> Option<f64> {
        self.roles.get(name).map(|r| r.availability_percent)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }
}

impl FromIterator<Role> for RoleTable {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut table = RoleTable::new();
        for role in iter {
            table.insert(role);
        }
        table
    }
}
