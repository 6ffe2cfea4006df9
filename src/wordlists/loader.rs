//! Word list loading utilities
//!
//! Word lists are plain text, one word per line. Entries that are not 5-letter
//! words are skipped with a warning rather than failing the load.

use crate::dictionary::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordgrid_difficulty::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    log::info!("Loading dictionary: {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(dictionary_from_str(&content))
}

/// Build a dictionary from word-list text
///
/// # Examples
/// ```
/// use wordgrid_difficulty::wordlists::loader::dictionary_from_str;
///
/// let dictionary = dictionary_from_str("apple\ngrape\nfig\n");
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn dictionary_from_str(content: &str) -> Dictionary {
    Dictionary::build(content.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_from_str_skips_invalid() {
        let dictionary = dictionary_from_str("apple\ntoolong\nabc\n\ngrape\r\n");

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "apple");
        assert_eq!(dictionary.words()[1].text(), "grape");
    }

    #[test]
    fn dictionary_from_str_empty() {
        assert!(dictionary_from_str("").is_empty());
    }

    #[test]
    fn load_round_trips_through_file() {
        let path = std::env::temp_dir().join(format!("wordgrid-loader-{}.txt", std::process::id()));
        fs::write(&path, "lemon\nmelon\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains_str("melon"));
    }

    #[test]
    fn load_missing_file_fails() {
        let result = load_from_file("/nonexistent/path/to/words.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
