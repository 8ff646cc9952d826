// src/services/auth.rs

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::user::{PendingUserRequest, RegisterUserPayload, User, UserRole},
    storage::{StorageArea, keys},
};

// Contas e sessão. Escopo de demonstração: senhas em texto puro comparadas
// diretamente, sem hash nem token. A sessão corrente vive na área de sessão,
// então fechar o navegador desloga.
#[derive(Clone)]
pub struct AuthService {
    users_repo: UserRepository,
    session: Arc<dyn StorageArea>,
}

impl AuthService {
    pub fn new(users_repo: UserRepository, session: Arc<dyn StorageArea>) -> Self {
        Self {
            users_repo,
            session,
        }
    }

    // --- REGISTRO ---

    pub async fn register_user(&self, payload: RegisterUserPayload) -> Result<User, AppError> {
        // 1. Validação de forma (campos obrigatórios, e-mail, tamanho de senha)
        payload.validate()?;

        // 2. Unicidade de username e e-mail contra a coleção atual
        let mut users = self.users_repo.load_users().await;
        if users.iter().any(|u| u.username == payload.username) {
            return Err(AppError::UsernameAlreadyExists);
        }
        if users.iter().any(|u| u.email == payload.email) {
            return Err(AppError::EmailAlreadyRegistered);
        }

        // 3. Persiste e devolve a cópia sem senha
        let user = payload.into_user(UserRole::Customer);
        users.push(user.clone());
        self.users_repo.save_users(&users).await?;

        tracing::info!("Novo usuário registrado: {}", user.username);
        Ok(user.sanitized())
    }

    // Fluxo com aprovação: o cadastro entra na fila de solicitações e só vira
    // conta quando o admin aprova.
    pub async fn submit_registration_request(
        &self,
        payload: RegisterUserPayload,
    ) -> Result<(), AppError> {
        payload.validate()?;

        let users = self.users_repo.load_users().await;
        if users.iter().any(|u| u.username == payload.username) {
            return Err(AppError::UsernameAlreadyExists);
        }
        if users.iter().any(|u| u.email == payload.email) {
            return Err(AppError::EmailAlreadyRegistered);
        }

        let mut requests = self.users_repo.load_requests().await;
        if requests.iter().any(|r| r.username == payload.username) {
            return Err(AppError::UsernameAlreadyExists);
        }
        if requests.iter().any(|r| r.email == payload.email) {
            return Err(AppError::EmailAlreadyRegistered);
        }

        requests.push(PendingUserRequest {
            full_name: payload.full_name,
            username: payload.username,
            email: payload.email,
            password: payload.password,
            address: payload.address,
            contact_number: payload.contact_number,
            requested_time: Utc::now(),
        });
        self.users_repo.save_requests(&requests).await?;
        Ok(())
    }

    pub async fn pending_requests(&self) -> Vec<PendingUserRequest> {
        self.users_repo.load_requests().await
    }

    // Aprova uma solicitação pendente, criando a conta de cliente.
    // Devolve false quando não há solicitação com esse username.
    pub async fn approve_request(&self, username: &str) -> Result<bool, AppError> {
        let mut requests = self.users_repo.load_requests().await;
        let idx = match requests.iter().position(|r| r.username == username) {
            Some(idx) => idx,
            None => return Ok(false),
        };
        let request = requests.remove(idx);

        // O nome pode ter sido tomado enquanto a solicitação esperava.
        let mut users = self.users_repo.load_users().await;
        if users.iter().any(|u| u.username == request.username) {
            self.users_repo.save_requests(&requests).await?;
            return Err(AppError::UsernameAlreadyExists);
        }

        users.push(request.into_user());
        self.users_repo.save_users(&users).await?;
        self.users_repo.save_requests(&requests).await?;

        tracing::info!("Solicitação de cadastro aprovada: {}", username);
        Ok(true)
    }

    pub async fn reject_request(&self, username: &str) -> Result<bool, AppError> {
        let mut requests = self.users_repo.load_requests().await;
        let before = requests.len();
        requests.retain(|r| r.username != username);
        if requests.len() == before {
            return Ok(false);
        }
        self.users_repo.save_requests(&requests).await?;
        Ok(true)
    }

    // --- SESSÃO ---

    pub async fn login_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .users_repo
            .load_users()
            .await
            .into_iter()
            .find(|u| u.username == username && u.password.as_deref() == Some(password))
            .ok_or(AppError::InvalidCredentials)?;

        let session_user = user.sanitized();
        let json = serde_json::to_string(&session_user).map_err(anyhow::Error::new)?;
        self.session.set_item(keys::KEY_CURRENT_USER, &json)?;

        tracing::info!("✅ Login efetuado: {}", session_user.username);
        Ok(session_user)
    }

    pub async fn current_user(&self) -> Option<User> {
        let raw = self.session.get_item(keys::KEY_CURRENT_USER).ok()??;
        serde_json::from_str(&raw).ok()
    }

    pub async fn logout_user(&self) {
        if let Err(err) = self.session.remove_item(keys::KEY_CURRENT_USER) {
            tracing::warn!("Falha ao encerrar a sessão: {}", err);
        }
    }

    // --- ADMINISTRAÇÃO ---

    pub async fn users(&self) -> Vec<User> {
        self.users_repo.load_users().await
    }

    pub async fn riders(&self) -> Vec<User> {
        self.users_repo
            .load_users()
            .await
            .into_iter()
            .filter(|u| u.role == UserRole::Rider)
            .collect()
    }

    // Devolve false quando não existe usuário com esse username.
    pub async fn delete_user(&self, username: &str) -> Result<bool, AppError> {
        let mut users = self.users_repo.load_users().await;
        let before = users.len();
        users.retain(|u| u.username != username);
        if users.len() == before {
            return Ok(false);
        }
        self.users_repo.save_users(&users).await?;
        Ok(true)
    }
}
