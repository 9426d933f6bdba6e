use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::common::paths;
use crate::models::conversations::{
    Conversation, ConversationData, Participant, ShowConversationResponse,
};
use crate::models::messages::{Message, MessageForm, MessageView};
use crate::models::sessions::Session;
use crate::models::transactions::Transaction;
use crate::repositories::{conversations, messages, transactions};
use async_trait::async_trait;
use tracing::{error, info};

/// The conversation operations the inbox pages are built on.
#[async_trait]
pub trait ConversationService: Sync + Send {
    /// The conversation, when `person_id` participates in it within `community_id`.
    async fn conversation_for_person(
        &self,
        conversation_id: i64,
        person_id: i64,
        community_id: i64,
    ) -> ServiceResult<Option<Conversation>>;

    async fn mark_as_read(&self, conversation_id: i64, person_id: i64) -> ServiceResult<()>;

    async fn send_message(
        &self,
        conversation_id: i64,
        sender_id: i64,
        content: &str,
    ) -> ServiceResult<()>;
}

#[async_trait]
impl<C: Context> ConversationService for C {
    async fn conversation_for_person(
        &self,
        conversation_id: i64,
        person_id: i64,
        community_id: i64,
    ) -> ServiceResult<Option<Conversation>> {
        let conversation = match conversations::fetch_one_for_person(
            self,
            conversation_id,
            person_id,
            community_id,
        )
        .await
        {
            Ok(Some(conversation)) => conversation,
            Ok(None) => return Ok(None),
            Err(e) => return unexpected(e),
        };

        let participants = conversations::fetch_participants(self, conversation.id).await?;
        let messages = messages::fetch_for_conversation(self, conversation.id).await?;
        let transaction = transactions::fetch_by_conversation(self, conversation.id).await?;
        Ok(Some(Conversation::from_parts(
            conversation,
            participants.into_iter().map(Participant::from).collect(),
            messages.into_iter().map(Message::from).collect(),
            transaction.map(Transaction::from),
        )))
    }

    async fn mark_as_read(&self, conversation_id: i64, person_id: i64) -> ServiceResult<()> {
        match conversations::mark_as_read(self, conversation_id, person_id).await {
            Ok(()) => Ok(()),
            Err(e) => unexpected(e),
        }
    }

    async fn send_message(
        &self,
        conversation_id: i64,
        sender_id: i64,
        content: &str,
    ) -> ServiceResult<()> {
        match messages::create(self, conversation_id, sender_id, content).await {
            Ok(message_id) => {
                info!(conversation_id, sender_id, message_id, "Message sent");
                Ok(())
            }
            Err(e) => unexpected(e),
        }
    }
}

/// Message views in the order given, each sender decorated with its profile url.
pub fn conversation_messages(
    messages: &[Message],
    participants: &[Participant],
    viewer_id: i64,
) -> Vec<MessageView> {
    messages
        .iter()
        .map(|message| {
            let sender = participants
                .iter()
                .find(|participant| participant.person.id == message.sender_id)
                .map(|participant| participant.person.clone().with_url());
            MessageView {
                id: message.message_id,
                content: message.content.clone(),
                created_at: message.created_at,
                sender,
                mine: message.sender_id == viewer_id,
            }
        })
        .collect()
}

pub async fn show<S: ConversationService>(
    svc: &S,
    user: &Session,
    conversation_id: i64,
) -> ServiceResult<ShowConversationResponse> {
    let conversation = svc
        .conversation_for_person(conversation_id, user.person_id, user.community_id)
        .await?
        .ok_or(AppError::ConversationsNotFound)?;

    let message_form = MessageForm::new(user.person_id, conversation_id);

    let other_party = match conversation.other_by_id(user.person_id) {
        Some(other) => other.clone().with_url(),
        None => {
            error!(
                conversation_id,
                person_id = user.person_id,
                "Conversation has no other participant"
            );
            return Err(AppError::ConversationsParticipantNotFound);
        }
    };

    let messages = conversation_messages(
        &conversation.messages,
        &conversation.participants,
        user.person_id,
    );

    svc.mark_as_read(conversation.conversation_id, user.person_id)
        .await?;

    let was_read = conversation
        .participant(user.person_id)
        .is_some_and(|participant| participant.is_read);
    let conversation_data = ConversationData {
        id: conversation.conversation_id,
        other_party,
        transaction: conversation.transaction.as_ref().map(Transaction::to_view),
        last_message_at: conversation.last_message_at,
        was_read,
    };

    Ok(ShowConversationResponse {
        messages: messages.into_iter().rev().collect(),
        conversation_data,
        message_form,
        message_form_action: paths::person_message_messages_path(
            &user.username,
            conversation.conversation_id,
        ),
    })
}

/// Posts a reply to a conversation on behalf of `user`.
///
/// `person_param` is the person segment of the form action and has to name the user.
pub async fn reply<S: ConversationService>(
    svc: &S,
    user: &Session,
    person_param: &str,
    conversation_id: i64,
    content: String,
) -> ServiceResult<()> {
    if person_param != user.username {
        return Err(AppError::Unauthorized);
    }

    let conversation = svc
        .conversation_for_person(conversation_id, user.person_id, user.community_id)
        .await?;
    if conversation.is_none() {
        return Err(AppError::ConversationsNotFound);
    }

    let form = MessageForm::new(user.person_id, conversation_id).with_content(content);
    let content = form.validate()?;
    svc.send_message(conversation_id, user.person_id, content)
        .await
}
