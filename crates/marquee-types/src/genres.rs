//! Comma-delimited genre string encoding.
//!
//! Genre tags are persisted as a single delimited string, not a normalized
//! collection. The split/join pair below is the only code allowed to touch
//! that encoding; everything above the storage boundary works with
//! `Vec<String>` tag lists.
//!
//! Invariant: splitting is total. An empty stored string splits into a
//! single empty tag (`[""]`), never an empty list -- callers must tolerate
//! the empty tag. `join(split(s)) == s` holds for every stored value.

/// The fixed delimiter between genre tags in the stored encoding.
pub const GENRE_DELIMITER: char = ',';

/// Split a stored genre string into its ordered tag list.
///
/// Never returns an empty vector: `split_genres("")` is `vec![""]`.
pub fn split_genres(stored: &str) -> Vec<String> {
    stored.split(GENRE_DELIMITER).map(str::to_owned).collect()
}

/// Join a tag list back into the stored encoding.
pub fn join_genres<S: AsRef<str>>(tags: &[S]) -> String {
    let parts: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
    parts.join(&GENRE_DELIMITER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_produces_ordered_tags() {
        assert_eq!(split_genres("Rock,Jazz"), vec!["Rock", "Jazz"]);
    }

    #[test]
    fn empty_string_splits_into_single_empty_tag() {
        assert_eq!(split_genres(""), vec![String::new()]);
    }

    #[test]
    fn join_of_split_round_trips() {
        for stored in ["Rock,Jazz", "", "Classical", "Folk,,Blues"] {
            assert_eq!(join_genres(&split_genres(stored)), stored);
        }
    }

    #[test]
    fn join_accepts_str_slices() {
        assert_eq!(join_genres(&["Rock", "Jazz"]), "Rock,Jazz");
    }
}
