use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use super::models::NewUser;
use super::schema::users;
use crate::config::AdminSeed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted,
    AlreadyPresent,
}

pub fn admin_record(seed: &AdminSeed) -> NewUser<'_> {
    NewUser {
        nickname: seed.nickname.as_str(),
        say: Some(seed.say.as_str()),
        avatar: Some(seed.avatar.as_str()),
        mobile: Some(seed.mobile.as_str()),
        email: Some(seed.email.as_str()),
        phone_binding: 1,
        email_binding: 1,
        sex: 1,
        is_admin: 1,
    }
}

/// Inserts the admin user unless an admin with the same email exists.
pub async fn seed_admin(
    conn: &mut AsyncPgConnection,
    seed: &AdminSeed,
) -> Result<SeedOutcome, diesel::result::Error> {
    let existing: i64 = users::table
        .filter(users::email.eq(seed.email.as_str()))
        .filter(users::is_admin.eq(1))
        .count()
        .get_result(conn)
        .await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyPresent);
    }

    diesel::insert_into(users::table)
        .values(&admin_record(seed))
        .execute(conn)
        .await?;
    Ok(SeedOutcome::Inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_record_sets_every_flag() {
        let seed = AdminSeed::default();
        let record = admin_record(&seed);
        assert_eq!(record.is_admin, 1);
        assert_eq!(record.phone_binding, 1);
        assert_eq!(record.email_binding, 1);
        assert_eq!(record.email, Some("admin@example.com"));
    }
}
