use serde::{Deserialize, Serialize};

/// User-facing notification texts.
///
/// Defaults are the pt-BR strings the UI has always shown; deployments
/// may override any of them in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown after a successful create/update/delete.
    pub success: String,
    /// Generic failure.
    pub error: String,
    /// Shown while a request is in flight.
    pub loading: String,
    /// HTTP 401: the session is gone.
    pub unauthorized: String,
    /// HTTP 404.
    pub not_found: String,
    /// HTTP 400 / 422: the backend rejected the payload.
    pub validation_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            success: "Operação realizada com sucesso!".into(),
            error: "Erro ao processar requisição".into(),
            loading: "Carregando...".into(),
            unauthorized: "Acesso não autorizado. Faça login novamente.".into(),
            not_found: "Recurso não encontrado".into(),
            validation_error: "Erro de validação. Verifique os dados.".into(),
        }
    }
}

impl Messages {
    /// Message for an HTTP status code, `None` for non-error statuses.
    pub fn for_status(&self, status: u16) -> Option<&str> {
        match status {
            401 => Some(self.unauthorized.as_str()),
            404 => Some(self.not_found.as_str()),
            400 | 422 => Some(self.validation_error.as_str()),
            400..=599 => Some(self.error.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let m = Messages::default();
        assert_eq!(m.for_status(200), None);
        assert_eq!(m.for_status(204), None);
        assert_eq!(m.for_status(302), None);
        assert_eq!(m.for_status(401), Some(m.unauthorized.as_str()));
        assert_eq!(m.for_status(404), Some("Recurso não encontrado"));
        assert_eq!(m.for_status(422), Some(m.validation_error.as_str()));
        assert_eq!(m.for_status(400), Some(m.validation_error.as_str()));
        assert_eq!(m.for_status(409), Some(m.error.as_str()));
        assert_eq!(m.for_status(500), Some(m.error.as_str()));
        assert_eq!(m.for_status(600), None);
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let m: Messages = serde_json::from_str(r#"{ "not_found": "Not found" }"#).unwrap();
        assert_eq!(m.not_found, "Not found");
        assert_eq!(m.error, Messages::default().error);
    }
}
