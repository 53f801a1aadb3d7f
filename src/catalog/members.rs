//! In-memory member collection, keyed by member id

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::member::Member,
};

#[derive(Debug, Clone, Default)]
pub struct MembersRepository {
    members: IndexMap<String, Member>,
}

impl MembersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> AppResult<&mut Member> {
        self.members
            .get_mut(id)
            .ok_or_else(|| AppError::MemberNotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub(crate) fn insert(&mut self, member: Member) -> AppResult<()> {
        if self.contains(&member.id) {
            return Err(AppError::Conflict(format!(
                "Member with id {} already exists",
                member.id
            )));
        }
        self.members.insert(member.id.clone(), member);
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &str) -> AppResult<Member> {
        self.members
            .shift_remove(id)
            .ok_or_else(|| AppError::MemberNotFound(id.to_string()))
    }
}
