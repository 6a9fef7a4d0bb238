use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A toast shown next to the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, title: &str, message: String) -> Self {
        Self {
            level,
            title: title.to_string(),
            message,
        }
    }

    pub fn available(open_slots: Option<u32>) -> Self {
        let message = match open_slots {
            Some(1) => "Temos 1 vaga aberta para o período selecionado.".to_string(),
            Some(n) => format!("Temos {n} vagas abertas para o período selecionado."),
            None => "Temos vagas para o período selecionado.".to_string(),
        };
        Self::new(NotificationLevel::Success, "Datas disponíveis!", message)
    }

    pub fn unavailable() -> Self {
        Self::new(
            NotificationLevel::Warning,
            "Datas indisponíveis",
            "Estamos lotados nesse período. Escolha outras datas ou fale conosco pelo \
             WhatsApp para entrar na lista de espera."
                .to_string(),
        )
    }

    /// The check could not be completed; the visitor may still proceed.
    pub fn unverified() -> Self {
        Self::new(
            NotificationLevel::Info,
            "Pode seguir com a reserva",
            "Não conseguimos confirmar a disponibilidade agora, mas você pode enviar sua \
             solicitação normalmente. Nossa equipe confirma as datas pelo WhatsApp."
                .to_string(),
        )
    }

    pub fn submission_locked() -> Self {
        Self::new(
            NotificationLevel::Error,
            "Reserva bloqueada",
            "Selecione um período disponível antes de enviar a solicitação.".to_string(),
        )
    }

    pub fn redirecting() -> Self {
        Self::new(
            NotificationLevel::Info,
            "Redirecionando para o WhatsApp",
            "Por favor, anexe a foto da Carteira de Vacina na conversa para finalizarmos."
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_mentions_slot_count() {
        let n = Notification::available(Some(3));
        assert_eq!(n.level, NotificationLevel::Success);
        assert!(n.message.contains('3'));
    }

    #[test]
    fn test_available_without_count() {
        let n = Notification::available(None);
        assert!(!n.message.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_value(Notification::unavailable()).unwrap();
        assert_eq!(json["level"], "warning");
    }
}
