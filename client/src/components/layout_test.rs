use super::*;
use crate::net::types::User;

#[test]
fn account_link_follows_session() {
    assert_eq!(account_link(&AuthState::default()).href, "/login");
    assert_eq!(account_link(&AuthState::bootstrapping()).name, "Log In");

    let signed_in = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            email: "a@b.co".to_owned(),
            name: None,
            full_name: None,
            s3_bucket_prefix: None,
            pinecone_namespace: None,
            is_active: None,
            created_at: None,
        }),
        token: Some("t".to_owned()),
        loading: false,
    };
    assert_eq!(account_link(&signed_in), NavLink { name: "Dashboard", href: "/dashboard" });
}

#[test]
fn every_link_is_site_relative() {
    let footer = FOOTER_GROUPS.iter().flat_map(|(_, links)| links.iter());
    for l in NAV_LINKS.iter().chain(footer) {
        assert!(l.href.starts_with('/'), "{} -> {}", l.name, l.href);
    }
}

#[test]
fn footer_has_legal_group() {
    let legal = FOOTER_GROUPS.iter().find(|(title, _)| *title == "Legal").map(|(_, l)| *l).unwrap();
    assert!(legal.iter().any(|l| l.href == "/privacy"));
    assert!(legal.iter().any(|l| l.href == "/terms"));
}
