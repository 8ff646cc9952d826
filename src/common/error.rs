use thiserror::Error;

use crate::models::order::OrderStatus;
use crate::storage::StorageError;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A camada de UI (colaborador externo) traduz cada variante em mensagem ao usuário.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Nome de usuário já existe")]
    UsernameAlreadyExists,

    #[error("E-mail já cadastrado")]
    EmailAlreadyRegistered,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    // Transição proibida pela tabela de estados do pedido.
    #[error("Transição de status inválida: {from} -> {to}")]
    IllegalTransition { from: OrderStatus, to: OrderStatus },

    #[error("O pedido pertence a outro cliente")]
    NotOrderCustomer,

    #[error("Avaliações só são permitidas para pedidos entregues")]
    OrderNotDelivered,

    #[error("Pedido não encontrado")]
    OrderNotFound,

    #[error("O produto '{0}' não faz parte do pedido")]
    ProductNotInOrder(String),

    #[error("O entregador '{0}' não está atribuído a este pedido")]
    RiderNotAssigned(String),

    // Falha de escrita no substrato de armazenamento. Leituras nunca
    // chegam aqui: leitura corrompida vira coleção vazia + reseed.
    #[error("Erro de armazenamento")]
    StorageError(#[from] StorageError),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    InternalError(#[from] anyhow::Error),
}
