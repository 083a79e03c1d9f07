use super::*;

#[test]
fn role_select_maps_admin() {
    assert_eq!(role_from_value("admin"), Role::Admin);
}

#[test]
fn role_select_defaults_to_writer() {
    assert_eq!(role_from_value("writer"), Role::Writer);
    assert_eq!(role_from_value(""), Role::Writer);
    assert_eq!(role_from_value("other"), Role::Writer);
}
