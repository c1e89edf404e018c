use thiserror::Error;

/// Failure at the network boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent or completed
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Http { status: u16 },
    #[error("Not found: {0}")]
    NotFound(String),
    /// Body is not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Текст для пользователя
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Сервер недоступен. Проверьте соединение и попробуйте ещё раз".to_string(),
            ApiError::Http { status } if *status >= 500 => {
                format!("Ошибка сервера (HTTP {}). Попробуйте позже", status)
            }
            ApiError::Http { status } => format!("Запрос отклонён сервером (HTTP {})", status),
            ApiError::NotFound(_) => "Лот не найден".to_string(),
            ApiError::Parse(_) => "Сервер вернул некорректный ответ".to_string(),
            ApiError::Encode(_) => "Не удалось сформировать запрос".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_distinguish_server_and_client_errors() {
        assert!(ApiError::Http { status: 502 }.user_message().contains("502"));
        assert!(ApiError::Http { status: 422 }.user_message().contains("отклонён"));
        assert_eq!(ApiError::NotFound("7".into()).user_message(), "Лот не найден");
    }
}
