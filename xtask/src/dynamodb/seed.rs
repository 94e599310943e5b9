//! Seed command implementation.

use super::error::Result;
use notes_core::note::Note;
use notes_core::storage::NoteWriter;

const TITLES: [&str; 8] = [
    "groceries",
    "standup",
    "ideas",
    "reading-list",
    "travel",
    "retro",
    "gift-ideas",
    "todo",
];

const MESSAGES: [&str; 8] = [
    "milk, eggs, coffee",
    "blocked on the deploy pipeline",
    "write a CLI for the notes table",
    "finish the DynamoDB paper",
    "book the train before Friday",
    "keep the short demos",
    "a good notebook",
    "rotate the access keys",
];

/// Generate `count` sample notes spread round-robin across `owners`.
///
/// Titles repeat once the list runs out, with a numeric suffix so no two
/// notes of the same owner share a key.
pub fn generate_seed_notes(owners: &[String], count: u32) -> Vec<Note> {
    if owners.is_empty() {
        return Vec::new();
    }

    (0..count as usize)
        .map(|i| {
            let owner = &owners[i % owners.len()];
            let slot = i / owners.len();
            let title = match slot / TITLES.len() {
                0 => TITLES[slot % TITLES.len()].to_string(),
                round => format!("{}-{}", TITLES[slot % TITLES.len()], round + 1),
            };
            Note::new(owner.as_str(), title, MESSAGES[i % MESSAGES.len()])
        })
        .collect()
}

/// Write notes one at a time, stopping at the first failure.
///
/// Returns the number of notes written.
pub async fn seed_notes(writer: &dyn NoteWriter, notes: &[Note]) -> Result<usize> {
    for note in notes {
        writer.put_note(note).await?;
    }
    Ok(notes.len())
}

/// Short label for the preview list.
pub fn format_note(note: &Note) -> String {
    format!("{}/{}", note.owner, note.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes::storage::InMemoryRepository;
    use notes_core::storage::NoteReader;
    use std::collections::HashSet;

    fn owners() -> Vec<String> {
        vec!["alice".to_string(), "bob".to_string()]
    }

    #[test]
    fn test_generates_requested_count() {
        let notes = generate_seed_notes(&owners(), 15);

        assert_eq!(notes.len(), 15);
        assert_eq!(notes.iter().filter(|n| n.owner == "alice").count(), 8);
        assert_eq!(notes.iter().filter(|n| n.owner == "bob").count(), 7);
    }

    #[test]
    fn test_keys_are_unique() {
        let notes = generate_seed_notes(&owners(), 40);

        let keys: HashSet<_> = notes.iter().map(|n| (&n.owner, &n.title)).collect();
        assert_eq!(keys.len(), 40);
        assert!(notes.iter().any(|n| n.title == "groceries-2"));
    }

    #[test]
    fn test_no_owners_generates_nothing() {
        assert!(generate_seed_notes(&[], 10).is_empty());
    }

    #[test]
    fn test_format_note() {
        assert_eq!(format_note(&Note::new("alice", "todo", "x")), "alice/todo");
    }

    #[tokio::test]
    async fn test_seed_notes_writes_all() {
        let repo = InMemoryRepository::new();
        let notes = generate_seed_notes(&owners(), 10);

        let written = seed_notes(&repo, &notes).await.unwrap();

        assert_eq!(written, 10);
        assert_eq!(repo.scan_notes().await.unwrap().len(), 10);
    }
}
