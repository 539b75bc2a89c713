use serde::{Deserialize, Serialize};

/// Entrada del historial de prompts de un usuario
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PromptRecord {
    pub id: i64,
    pub user_id: i64,
    pub prompt_text: String,
    pub intended_use: String,
    pub decision: Option<String>,
    pub reason_summary: Option<String>,
    pub created_at: String,
}

impl PromptRecord {
    /// Decisión en texto, "PENDING" si aún no se evaluó
    pub fn decision_label(&self) -> &str {
        self.decision.as_deref().unwrap_or("PENDING")
    }
}

/// Estadísticas por usuario del panel de administración
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserStats {
    pub id: i64,
    pub email: String,
    pub total_prompts: u64,
    pub accepted_count: u64,
    pub declined_count: u64,
}

impl UserStats {
    pub fn acceptance_rate(&self) -> Option<f64> {
        if self.total_prompts == 0 {
            return None;
        }
        Some(self.accepted_count as f64 / self.total_prompts as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_history_entry() {
        let body = r#"{
            "id": 3, "user_id": 9, "prompt_text": "summarise", "intended_use": "research",
            "decision": null, "reason_summary": null, "created_at": "2026-01-02T10:00:00"
        }"#;
        let record: PromptRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.decision_label(), "PENDING");
    }

    #[test]
    fn acceptance_rate_handles_empty_users() {
        let stats = UserStats { id: 1, email: "a@b.c".into(), total_prompts: 0, accepted_count: 0, declined_count: 0 };
        assert_eq!(stats.acceptance_rate(), None);

        let stats = UserStats { total_prompts: 4, accepted_count: 3, declined_count: 1, ..stats };
        assert_eq!(stats.acceptance_rate(), Some(0.75));
    }
}
