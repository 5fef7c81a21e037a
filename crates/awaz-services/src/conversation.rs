//! Conversational AI calls

use awaz_core::models::phone::dial_string;
use awaz_core::models::voice::demo_variables;
use awaz_core::models::{ConversationDetails, ConversationRequest, ConversationStarted, PhoneError};
use awaz_core::traits::ConversationalAgent;
use awaz_core::{AppError, AppResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Input of a conversational call
#[derive(Debug, Clone, Default)]
pub struct StartConversationCommand {
    pub phone_number: Option<String>,
    /// Agent override; the configured agent otherwise
    pub agent_id: Option<String>,
    pub customer_name: Option<String>,
    pub business_name: Option<String>,
    /// Extra dynamic variables, these win over the demo defaults
    pub variables: BTreeMap<String, String>,
}

pub struct ConversationService {
    agent: Arc<dyn ConversationalAgent>,
}

impl ConversationService {
    pub fn new(agent: Arc<dyn ConversationalAgent>) -> Self {
        Self { agent }
    }

    /// Have the agent call a number.
    ///
    /// The number is normalized leniently: formatting is stripped and `+91`
    /// is assumed without a leading `+`. No format validation beyond that.
    #[instrument(skip(self, command))]
    pub async fn start(&self, command: StartConversationCommand) -> AppResult<ConversationStarted> {
        let raw = command.phone_number.as_deref().unwrap_or_default();
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            warn!("Conversational call requested without a number");
            return Err(PhoneError::Empty.into());
        }
        let to = dial_string(raw);

        let mut variables = demo_variables(
            command.customer_name.as_deref(),
            command.business_name.as_deref(),
        );
        variables.extend(command.variables);

        let request = ConversationRequest {
            to,
            agent_id: command.agent_id.filter(|id| !id.trim().is_empty()),
            variables,
        };

        let started = self.agent.start_call(&request).await?;
        info!(
            "Conversational call {} started for {}",
            started.conversation_id, request.to
        );
        Ok(started)
    }

    /// Status and transcript of a conversation
    #[instrument(skip(self))]
    pub async fn details(&self, conversation_id: &str) -> AppResult<ConversationDetails> {
        let conversation_id = conversation_id.trim();
        if conversation_id.is_empty() {
            return Err(AppError::Validation(
                "Conversation ID is required".to_string(),
            ));
        }

        self.agent.get_conversation(conversation_id).await
    }
}
