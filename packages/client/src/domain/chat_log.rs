//! Append-only chat history with sender grouping.

use super::{
    entity::{ChatContent, ChatEntry, ChatKind},
    value_object::{SenderAddress, Timestamp},
};

/// Remembers the (sender, kind) pair of the last appended entry.
///
/// A new entry shows its sender label only when its pair differs from the
/// remembered one, so consecutive lines from the same sender collapse into one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingContext {
    last: Option<(SenderAddress, ChatKind)>,
}

impl GroupingContext {
    /// Record a new entry and report whether it starts a new group.
    pub fn observe(&mut self, sender: &SenderAddress, kind: ChatKind) -> bool {
        let starts_group = self
            .last
            .as_ref()
            .is_none_or(|(last_sender, last_kind)| last_sender != sender || *last_kind != kind);
        self.last = Some((sender.clone(), kind));
        starts_group
    }

    /// Forget the last pair; the next entry always starts a group.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Ordered chat history.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    grouping: GroupingContext,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current time.
    pub fn append(&mut self, content: ChatContent, sender: SenderAddress, kind: ChatKind) {
        self.push(content, sender, None, kind, Timestamp::now());
    }

    /// Append an entry that carries the sender's display name.
    pub fn append_named(
        &mut self,
        content: ChatContent,
        sender: SenderAddress,
        sender_name: String,
        kind: ChatKind,
    ) {
        self.push(content, sender, Some(sender_name), kind, Timestamp::now());
    }

    fn push(
        &mut self,
        content: ChatContent,
        sender: SenderAddress,
        sender_name: Option<String>,
        kind: ChatKind,
        timestamp: Timestamp,
    ) {
        let show_sender_label = self.grouping.observe(&sender, kind);
        self.entries.push(ChatEntry {
            content,
            timestamp,
            sender,
            sender_name,
            show_sender_label,
            kind,
        });
    }

    /// Reset grouping when the connection is recreated. Entries are kept.
    pub fn reset_grouping(&mut self) {
        self.grouping.reset();
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(address: &str) -> SenderAddress {
        SenderAddress::Remote(address.to_string())
    }

    fn text(value: &str) -> ChatContent {
        ChatContent::Text(value.to_string())
    }

    fn labels(log: &ChatLog) -> Vec<bool> {
        log.entries().iter().map(|e| e.show_sender_label).collect()
    }

    #[test]
    fn test_first_entry_shows_label() {
        // テスト項目: 最初のエントリは必ず送信者ラベルを表示する
        // given (前提条件):
        let mut log = ChatLog::new();

        // when (操作):
        log.append(text("hi"), remote("A"), ChatKind::Plaintext);

        // then (期待する結果):
        assert_eq!(labels(&log), vec![true]);
    }

    #[test]
    fn test_same_sender_and_kind_are_grouped() {
        // テスト項目: 同じ送信者・種類が続くとラベルは省略される
        // given (前提条件):
        let mut log = ChatLog::new();

        // when (操作):
        log.append(text("hi"), remote("A"), ChatKind::Plaintext);
        log.append(text("yo"), remote("A"), ChatKind::Plaintext);

        // then (期待する結果):
        assert_eq!(labels(&log), vec![true, false]);
    }

    #[test]
    fn test_label_follows_sender_and_kind_changes() {
        // テスト項目: 送信者または種類が変わるたびにラベルが表示される
        // given (前提条件):
        let mut log = ChatLog::new();
        let sequence = [
            (remote("A"), ChatKind::Plaintext),
            (remote("A"), ChatKind::Meta),
            (remote("A"), ChatKind::Meta),
            (remote("B"), ChatKind::Meta),
            (SenderAddress::Local, ChatKind::Local),
            (SenderAddress::Local, ChatKind::Local),
            (SenderAddress::Local, ChatKind::Meta),
            (remote("A"), ChatKind::Plaintext),
        ];

        // when (操作):
        for (sender, kind) in sequence.iter().cloned() {
            log.append(text("x"), sender, kind);
        }

        // then (期待する結果): 直前と (sender, kind) が異なる場合のみ true
        let expected: Vec<bool> = sequence
            .iter()
            .enumerate()
            .map(|(i, pair)| i == 0 || sequence[i - 1] != *pair)
            .collect();
        assert_eq!(labels(&log), expected);
        assert_eq!(
            expected,
            vec![true, true, false, true, true, false, true, true]
        );
    }

    #[test]
    fn test_reset_grouping_forces_label() {
        // テスト項目: グルーピングのリセット後は同じ送信者でもラベルが表示される
        // given (前提条件):
        let mut log = ChatLog::new();
        log.append(text("hi"), remote("A"), ChatKind::Plaintext);

        // when (操作):
        log.reset_grouping();
        log.append(text("hi again"), remote("A"), ChatKind::Plaintext);

        // then (期待する結果): エントリ自体は保持される
        assert_eq!(log.len(), 2);
        assert_eq!(labels(&log), vec![true, true]);
    }

    #[test]
    fn test_append_named_keeps_sender_name() {
        // テスト項目: 名前付きで追加したエントリは表示名を保持する
        // given (前提条件):
        let mut log = ChatLog::new();

        // when (操作):
        log.append_named(
            text("hi"),
            remote("A"),
            "Alice".to_string(),
            ChatKind::Plaintext,
        );

        // then (期待する結果):
        let entry = log.last().unwrap();
        assert_eq!(entry.sender_name.as_deref(), Some("Alice"));
        assert_eq!(entry.sender_label(), "Alice");
    }

    #[test]
    fn test_grouping_context_in_isolation() {
        // テスト項目: GroupingContext 単体で判定とリセットができる
        // given (前提条件):
        let mut grouping = GroupingContext::default();

        // when / then (操作と期待する結果):
        assert!(grouping.observe(&remote("A"), ChatKind::Meta));
        assert!(!grouping.observe(&remote("A"), ChatKind::Meta));
        grouping.reset();
        assert!(grouping.observe(&remote("A"), ChatKind::Meta));
    }
}
