//! Member management service

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberType, NewMember},
};

use super::SharedCatalog;

#[derive(Clone)]
pub struct MembersService {
    catalog: SharedCatalog,
}

fn parse_member_type(s: &str) -> AppResult<MemberType> {
    s.parse().map_err(AppError::Validation)
}

impl MembersService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Register a new member. The type must be one of the four known values.
    pub async fn register_member(&self, member: NewMember) -> AppResult<Member> {
        member.validate()?;
        let member_type = parse_member_type(&member.member_type)?;
        let member = Member::new(member.name, member.id, member_type);
        self.catalog.lock().await.register_member(member.clone())?;
        tracing::info!("Registered member {} ({})", member.id, member.member_type);
        Ok(member)
    }

    pub async fn remove_member(&self, id: &str) -> AppResult<Member> {
        let removed = self.catalog.lock().await.remove_member(id)?;
        tracing::info!("Removed member {}", id);
        Ok(removed)
    }

    pub async fn update_member_type(&self, id: &str, member_type: &str) -> AppResult<Member> {
        let member_type = parse_member_type(member_type)?;
        let mut catalog = self.catalog.lock().await;
        catalog.update_member_type(id, member_type)?;
        catalog
            .find_member_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::MemberNotFound(id.to_string()))
    }

    pub async fn get_member(&self, id: &str) -> Option<Member> {
        self.catalog.lock().await.find_member_by_id(id).cloned()
    }

    pub async fn list_members(&self) -> Vec<Member> {
        self.catalog.lock().await.members().cloned().collect()
    }

    /// Whether `id` belongs to an administrator
    pub async fn is_admin(&self, id: &str) -> bool {
        self.catalog
            .lock()
            .await
            .find_member_by_id(id)
            .map(Member::is_admin)
            .unwrap_or(false)
    }

    pub async fn member_fine(&self, id: &str) -> Decimal {
        self.catalog.lock().await.member_fine(id)
    }

    /// Pay towards a fine; returns the remaining balance
    pub async fn pay_fine(&self, id: &str, amount: Decimal) -> AppResult<Decimal> {
        self.catalog.lock().await.pay_fine(id, amount)
    }
}
