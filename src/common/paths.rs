pub const fn root_path() -> &'static str {
    "/"
}

pub const fn login_path() -> &'static str {
    "/login"
}

pub fn person_path(username: &str) -> String {
    format!("/{username}")
}

pub fn conversation_path(conversation_id: i64) -> String {
    format!("/conversations/{conversation_id}")
}

pub fn person_message_messages_path(username: &str, message_id: i64) -> String {
    format!("/{username}/messages/{message_id}/messages")
}
