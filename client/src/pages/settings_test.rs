use super::*;
use crate::net::types::Role;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Budi Santoso".to_owned(),
        email: "budi@farm.co".to_owned(),
        role: Role::Farmer,
        company_id: Some("c1".to_owned()),
        profile_image: Some("/uploads/profiles/u1.png".to_owned()),
    }
}

#[test]
fn form_starts_from_current_user() {
    let form = SettingsForm::from_user(&user());
    assert_eq!(form.name, "Budi Santoso");
    assert_eq!(form.email, "budi@farm.co");
}

#[test]
fn apply_keeps_identity_and_role() {
    let form = SettingsForm { name: " Budi S ".to_owned(), email: "b@farm.co".to_owned() };
    let updated = form.apply(&user()).unwrap();
    assert_eq!(updated.name, "Budi S");
    assert_eq!(updated.email, "b@farm.co");
    assert_eq!(updated.id, "u1");
    assert_eq!(updated.role, Role::Farmer);
    assert_eq!(updated.company_id.as_deref(), Some("c1"));
    assert_eq!(updated.profile_image, user().profile_image);
}

#[test]
fn apply_rejects_invalid_fields() {
    let base = SettingsForm::from_user(&user());
    assert_eq!(SettingsForm { name: "B".to_owned(), ..base.clone() }.apply(&user()), Err("Name must be at least 2 characters"));
    assert_eq!(SettingsForm { email: "budi@farm".to_owned(), ..base }.apply(&user()), Err("Invalid email address"));
}
