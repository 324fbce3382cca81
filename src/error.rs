use thiserror::Error;

/// Failures of the read and mark-found calls. None of them are retried; each is surfaced to the
/// user and leaves the controller ready for the user to try again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    // Read path
    #[error("Erro ao carregar os dados: Status: {status} - Verifique os logs do servidor para detalhes do erro.")]
    FetchFailure { status: u16 },

    #[error("Falha na comunicação com a API: {message}")]
    NetworkFailure { message: String },

    #[error("Resposta inválida da API: {message}")]
    MalformedResponse { message: String },

    // Write path
    #[error("Erro ao marcar como encontrada: {status}. Verifique os logs do servidor.")]
    WriteFailure { status: u16 },

    #[error("Falha na comunicação com o servidor: {message}")]
    WriteNetworkFailure { message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;
