// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
    Rider,
}

// Representa um usuário na coleção persistida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub full_name: String,
    pub username: String,
    pub email: String,

    // Senha em texto puro (escopo de demonstração, sem segurança real).
    // Entregadores do seed não têm senha e nunca fazem login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    pub role: UserRole,
    pub address: String,
    pub contact_number: String,
}

impl User {
    // Cópia sem a senha, para devolver ao chamador após o login.
    pub fn sanitized(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }
}

// Dados para registro de um novo usuário
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserPayload {
    #[validate(length(min = 1, message = "O nome completo é obrigatório."))]
    pub full_name: String,

    #[validate(length(min = 3, message = "O nome de usuário deve ter no mínimo 3 caracteres."))]
    pub username: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,

    pub address: String,
    pub contact_number: String,
}

impl RegisterUserPayload {
    pub fn into_user(self, role: UserRole) -> User {
        User {
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            password: Some(self.password),
            role,
            address: self.address,
            contact_number: self.contact_number,
        }
    }
}

// Solicitação de cadastro aguardando aprovação do admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUserRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub contact_number: String,
    pub requested_time: DateTime<Utc>,
}

impl PendingUserRequest {
    pub fn into_user(self) -> User {
        User {
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            password: Some(self.password),
            role: UserRole::Customer,
            address: self.address,
            contact_number: self.contact_number,
        }
    }
}
