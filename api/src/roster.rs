//! # Roster patch operations
//!
//! The admin table holds the user roster as plain in-memory rows. After each
//! successful mutation response the matching row is patched in place; every
//! other row is left untouched. Keeping these as free functions lets the
//! row-level semantics be tested without a browser.

use crate::models::User;

/// Merge the role from a role-change response into the row with the same id.
/// A response for an id no longer in the roster is a no-op.
pub fn merge_role(roster: &mut [User], updated: &User) {
    if let Some(row) = roster.iter_mut().find(|user| user.id == updated.id) {
        row.role = updated.role;
    }
}

/// Adopt the server-returned block flag for the row with the same email.
///
/// The server's value is authoritative; the client never computes the
/// toggled flag itself.
pub fn merge_block(roster: &mut [User], updated: &User) {
    if let Some(row) = roster.iter_mut().find(|user| user.email == updated.email) {
        row.is_blocked = updated.is_blocked;
    }
}

/// Drop the row with the given id, if present.
pub fn remove(roster: &mut Vec<User>, id: i64) {
    roster.retain(|user| user.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn sample_roster() -> Vec<User> {
        vec![
            User {
                id: 1,
                first_name: "Anna".to_string(),
                last_name: "Schmidt".to_string(),
                email: "anna@example.com".to_string(),
                role: UserRole::User,
                is_blocked: false,
            },
            User {
                id: 2,
                first_name: "Boris".to_string(),
                last_name: "Ivanov".to_string(),
                email: "boris@example.com".to_string(),
                role: UserRole::User,
                is_blocked: true,
            },
            User {
                id: 3,
                first_name: "Clara".to_string(),
                last_name: "Rossi".to_string(),
                email: "clara@example.com".to_string(),
                role: UserRole::Admin,
                is_blocked: false,
            },
        ]
    }

    #[test]
    fn merge_role_changes_only_the_matching_row() {
        let mut roster = sample_roster();
        let mut updated = roster[1].clone();
        updated.role = UserRole::Admin;

        merge_role(&mut roster, &updated);

        assert_eq!(roster[1].role, UserRole::Admin);
        assert_eq!(roster[0], sample_roster()[0]);
        assert_eq!(roster[2], sample_roster()[2]);
    }

    #[test]
    fn merge_role_for_unknown_id_is_a_no_op() {
        let mut roster = sample_roster();
        let mut updated = roster[0].clone();
        updated.id = 99;
        updated.role = UserRole::Admin;

        merge_role(&mut roster, &updated);

        assert_eq!(roster, sample_roster());
    }

    #[test]
    fn merge_block_adopts_the_server_flag() {
        let mut roster = sample_roster();
        let was_blocked = roster[0].is_blocked;
        let mut updated = roster[0].clone();
        updated.is_blocked = !was_blocked;

        merge_block(&mut roster, &updated);

        assert_eq!(roster[0].is_blocked, !was_blocked);
        assert_eq!(roster[1], sample_roster()[1]);
        assert_eq!(roster[2], sample_roster()[2]);
    }

    #[test]
    fn remove_drops_exactly_the_matching_row() {
        let mut roster = sample_roster();

        remove(&mut roster, 2);

        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|user| user.id != 2));

        // Removing an id that is already gone changes nothing.
        remove(&mut roster, 2);
        assert_eq!(roster.len(), 2);
    }
}
