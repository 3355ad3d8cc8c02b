use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// "admin" | "user"
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Admin permite todo; el resto consulta su lista de permisos.
    pub fn can(&self, permission: &str) -> bool {
        self.is_admin() || self.permissions.iter().any(|p| p == permission)
    }

    pub fn can_view_brands(&self) -> bool {
        self.can("brands.view")
    }

    pub fn can_create_users(&self) -> bool {
        self.can("users.create")
    }

    pub fn can_export(&self) -> bool {
        self.can("creators.export")
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct AuthData {
    pub user: User,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AuthData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct VerifyData {
    pub user: User,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<VerifyData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str, permissions: &[&str]) -> User {
        User {
            id: 1,
            name: "Operadora".to_string(),
            email: "op@agencia.cl".to_string(),
            role: role.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn admin_permite_todo() {
        let admin = user("admin", &[]);
        assert!(admin.is_admin());
        assert!(admin.can_view_brands());
        assert!(admin.can_create_users());
        assert!(admin.can("cualquier.cosa"));
    }

    #[test]
    fn usuario_consulta_sus_permisos() {
        let operadora = user("user", &["brands.view", "creators.export"]);
        assert!(!operadora.is_admin());
        assert!(operadora.can_view_brands());
        assert!(operadora.can_export());
        assert!(!operadora.can_create_users());
    }
}
