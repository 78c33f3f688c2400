use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let NewUser { email, name } = u;
    if !validate::is_valid_email(&email) {
        return Err(Error::Email);
    }
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        email,
        name,
        role: Role::User,
    };
    repo.create_user(&user)?;
    Ok(user)
}
