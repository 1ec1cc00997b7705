use diesel::prelude::*;

use crate::domain::admin::AdminUser;
use crate::models::admin::{AdminUser as DbAdminUser, NewAdminUser};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AdminReader, AdminWriter, DieselRepository};

impl AdminReader for DieselRepository {
    fn get_admin_by_username(&self, username: &str) -> RepositoryResult<Option<AdminUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::username.eq(username))
            .first::<DbAdminUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl AdminWriter for DieselRepository {
    fn create_admin(&self, username: &str, password_hash: &str) -> RepositoryResult<usize> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let affected = diesel::insert_into(users::table)
            .values(NewAdminUser {
                username,
                password_hash,
            })
            .execute(&mut conn)?;

        Ok(affected)
    }
}
