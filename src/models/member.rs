//! Member model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Member category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    Student,
    Teacher,
    Citizen,
    Admin,
}

impl MemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberType::Student => "student",
            MemberType::Teacher => "teacher",
            MemberType::Citizen => "citizen",
            MemberType::Admin => "admin",
        }
    }
}

impl std::fmt::Display for MemberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MemberType {
    type Err = String;

    /// Accepts the slug or the legacy label, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" | "estudiante" => Ok(MemberType::Student),
            "teacher" | "profesor" => Ok(MemberType::Teacher),
            "citizen" | "ciudadano" => Ok(MemberType::Citizen),
            "admin" | "administrador" => Ok(MemberType::Admin),
            _ => Err(format!("Invalid member type: {}", s)),
        }
    }
}

/// Registered library member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub id: String,
    pub member_type: MemberType,
    pub accrued_fine: Decimal,
}

impl Member {
    pub fn new(name: impl Into<String>, id: impl Into<String>, member_type: MemberType) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            member_type,
            accrued_fine: Decimal::ZERO,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.member_type == MemberType::Admin
    }

    pub fn has_fine(&self) -> bool {
        self.accrued_fine > Decimal::ZERO
    }

    pub(crate) fn add_fine(&mut self, amount: Decimal) {
        self.accrued_fine += amount;
    }

    /// Settle part or all of the balance; overpayment is discarded.
    pub(crate) fn pay_fine(&mut self, amount: Decimal) {
        self.accrued_fine = (self.accrued_fine - amount).max(Decimal::ZERO);
    }
}

/// Register member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Identification is required"))]
    pub id: String,
    pub member_type: String,
}
