// Règles d'accès par motif de route, vérifiées par l'extracteur SessionUser

use crate::services::auth_service::{ROLE_ADMIN, authority_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Accessible sans session
    Public,
    /// Toute session valide
    Authenticated,
    /// Session avec l'autorité ROLE_ADMIN
    Admin,
}

const PUBLIC_PATHS: &[&str] = &["/", "/app/login"];
const PUBLIC_PREFIXES: &[&str] = &["/css"];
const ADMIN_PREFIXES: &[&str] = &["/user"];

/// Niveau d'accès requis pour un chemin
pub fn required_access(path: &str) -> Access {
    if PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| under(path, p)) {
        Access::Public
    } else if ADMIN_PREFIXES.iter().any(|p| under(path, p)) {
        Access::Admin
    } else {
        Access::Authenticated
    }
}

/// `authority` vaut None quand il n'y a pas de session
pub fn is_granted(access: Access, authority: Option<&str>) -> bool {
    match access {
        Access::Public => true,
        Access::Authenticated => authority.is_some(),
        Access::Admin => authority == Some(authority_for(ROLE_ADMIN).as_str()),
    }
}

// "/user" et "/user/..." mais pas "/username"
fn under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert_eq!(required_access("/"), Access::Public);
        assert_eq!(required_access("/app/login"), Access::Public);
        assert_eq!(required_access("/css/style.css"), Access::Public);
    }

    #[test]
    fn test_admin_routes() {
        assert_eq!(required_access("/user/list"), Access::Admin);
        assert_eq!(required_access("/user/update/3"), Access::Admin);
        assert_eq!(required_access("/user/update/{id}"), Access::Admin);
        assert_eq!(required_access("/user"), Access::Admin);
        assert_eq!(required_access("/username"), Access::Authenticated);
    }

    #[test]
    fn test_everything_else_needs_a_session() {
        assert_eq!(required_access("/bidList/list"), Access::Authenticated);
        assert_eq!(required_access("/app/error"), Access::Authenticated);
        assert_eq!(required_access("/admin/home"), Access::Authenticated);
        assert_eq!(required_access("/app-logout"), Access::Authenticated);
    }

    #[test]
    fn test_is_granted() {
        assert!(is_granted(Access::Public, None));
        assert!(!is_granted(Access::Authenticated, None));
        assert!(is_granted(Access::Authenticated, Some("ROLE_USER")));
        assert!(!is_granted(Access::Admin, Some("ROLE_USER")));
        assert!(is_granted(Access::Admin, Some("ROLE_ADMIN")));
        assert!(!is_granted(Access::Admin, None));
    }
}
