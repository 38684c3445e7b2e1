/// Blocking notification shown in a modal until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeState {
    pub title: String,
    pub message: String,
}

impl NoticeState {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Something went wrong".into(),
            message: message.into(),
        }
    }
}
