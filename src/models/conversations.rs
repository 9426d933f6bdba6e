use crate::entities::conversations::{
    Conversation as ConversationEntity, Participant as ParticipantEntity,
};
use crate::models::messages::{Message, MessageForm, MessageView};
use crate::models::people::{Person, PersonWithUrl};
use crate::models::transactions::{Transaction, TransactionView};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Participant {
    pub person: Person,
    pub is_read: bool,
    pub is_starter: bool,
}

impl From<ParticipantEntity> for Participant {
    fn from(value: ParticipantEntity) -> Self {
        Self {
            person: Person::from(&value),
            is_read: value.is_read,
            is_starter: value.is_starter,
        }
    }
}

/// A conversation with everything needed to render it.
///
/// Messages are kept in stored order: oldest first.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub conversation_id: i64,
    pub community_id: i64,
    pub participants: Vec<Participant>,
    pub messages: Vec<Message>,
    pub transaction: Option<Transaction>,
    pub last_message_at: Option<DateTime<Utc>>,
}

impl Conversation {
    pub fn from_parts(
        conversation: ConversationEntity,
        participants: Vec<Participant>,
        messages: Vec<Message>,
        transaction: Option<Transaction>,
    ) -> Self {
        Self {
            conversation_id: conversation.id,
            community_id: conversation.community_id,
            participants,
            messages,
            transaction,
            last_message_at: conversation.last_message_at,
        }
    }

    pub fn participant(&self, person_id: i64) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.person.id == person_id)
    }

    /// The participant on the other side from `person_id`.
    pub fn other_by_id(&self, person_id: i64) -> Option<&Person> {
        self.participants
            .iter()
            .map(|participant| &participant.person)
            .find(|person| person.id != person_id)
    }
}

#[derive(Debug, Serialize)]
pub struct ConversationData {
    pub id: i64,
    pub other_party: PersonWithUrl,
    pub transaction: Option<TransactionView>,
    pub last_message_at: Option<DateTime<Utc>>,
    /// Read state of the viewer before this visit marked it read.
    pub was_read: bool,
}

#[derive(Debug, Serialize)]
pub struct ShowConversationResponse {
    pub messages: Vec<MessageView>,
    pub conversation_data: ConversationData,
    pub message_form: MessageForm,
    pub message_form_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: i64, username: &str) -> Participant {
        Participant {
            person: Person {
                id,
                username: username.to_owned(),
                given_name: None,
                family_name: None,
            },
            is_read: false,
            is_starter: id == 1,
        }
    }

    fn conversation(participants: Vec<Participant>) -> Conversation {
        Conversation {
            conversation_id: 10,
            community_id: 1,
            participants,
            messages: vec![],
            transaction: None,
            last_message_at: None,
        }
    }

    #[test]
    fn other_by_id_skips_the_viewer() {
        let conversation = conversation(vec![participant(1, "alice"), participant(2, "bob")]);
        assert_eq!(conversation.other_by_id(1).map(|p| p.id), Some(2));
        assert_eq!(conversation.other_by_id(2).map(|p| p.id), Some(1));
    }

    #[test]
    fn other_by_id_without_counterpart() {
        let conversation = conversation(vec![participant(1, "alice")]);
        assert!(conversation.other_by_id(1).is_none());
        assert!(conversation.participant(1).is_some());
    }
}
