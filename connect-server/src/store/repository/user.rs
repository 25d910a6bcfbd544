//! User Repository

use chrono::Utc;
use shared::models::{User, UserCreate};

use crate::store::MemStore;

#[derive(Clone)]
pub struct UserRepository {
    store: MemStore,
}

impl UserRepository {
    pub fn new(store: MemStore) -> Self {
        Self { store }
    }

    /// Find user by id
    pub fn find_by_id(&self, id: i64) -> Option<User> {
        self.store.inner.users.get(&id).map(|u| u.clone())
    }

    /// Find user by email (case-insensitive, emails are unique)
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.store
            .inner
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| u.clone())
    }

    /// Create a new user
    ///
    /// Email uniqueness is the caller's concern: the register handler checks
    /// before creating.
    pub fn create(&self, data: UserCreate) -> User {
        let inner = &self.store.inner;
        let user = User {
            id: inner.ids.user.next(),
            username: data.username,
            email: data.email,
            password: data.password,
            first_name: data.first_name,
            last_name: data.last_name,
            role: data.role,
            phone: data.phone,
            address: data.address,
            created_at: Utc::now(),
        };
        inner.users.insert(user.id, user.clone());
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;

    fn customer(email: &str) -> UserCreate {
        UserCreate {
            username: "awa".into(),
            email: email.into(),
            password: "password123".into(),
            first_name: "Awa".into(),
            last_name: "Diop".into(),
            role: UserRole::Customer,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let repo = UserRepository::new(MemStore::new());
        let a = repo.create(customer("a@njaboot.sn"));
        let b = repo.create(customer("b@njaboot.sn"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn email_lookup_is_case_insensitive() {
        let repo = UserRepository::new(MemStore::new());
        repo.create(customer("Awa@Njaboot.sn"));
        assert!(repo.find_by_email("awa@njaboot.sn").is_some());
        assert!(repo.find_by_email("fatou@njaboot.sn").is_none());
    }
}
