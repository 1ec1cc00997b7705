use diesel::prelude::*;

use crate::domain::admin::AdminUser as DomainAdminUser;

/// Diesel representation of an administrator row.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
pub struct AdminUser {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

impl From<AdminUser> for DomainAdminUser {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password_hash: user.password_hash,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewAdminUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}
