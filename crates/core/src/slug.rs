//! Slug derivation from display names.
//!
//! Slugs are recomputed from the current name on every save, so renaming an
//! entry changes its public URL. Cyrillic input is romanized before
//! slugification; collisions are left to the database's unique constraints.

/// Transliterate Russian Cyrillic characters to Latin.
///
/// Uses the conventional romanization table (`ж → zh`, `х → kh`, `щ → shch`).
/// Hard and soft signs are dropped; characters outside the table pass
/// through unchanged. Case is preserved only in the sense that any Cyrillic
/// input maps to lowercase Latin -- [`slugify`] lowercases the rest.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match romanize(ch) {
            Some(latin) => out.push_str(latin),
            None => out.push(ch),
        }
    }
    out
}

/// Map a single Cyrillic character to its Latin romanization.
///
/// Returns `None` for characters that are not Russian Cyrillic.
fn romanize(ch: char) -> Option<&'static str> {
    let latin = match ch.to_lowercase().next().unwrap_or(ch) {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// Derive a lowercase, hyphen-separated, URL-safe token from a display name.
///
/// Cyrillic is transliterated first; runs of any other non-alphanumeric
/// characters collapse into a single hyphen, and leading/trailing hyphens
/// are stripped.
pub fn slugify(text: &str) -> String {
    let romanized = transliterate(text);
    let mut slug = String::with_capacity(romanized.len());
    let mut pending_hyphen = false;

    for ch in romanized.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Hello  World"), "hello-world");
        assert_eq!(slugify("Test 123"), "test-123");
        assert_eq!(slugify("Special!@#Characters"), "special-characters");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("--already-hyphenated--"), "already-hyphenated");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_cyrillic() {
        assert_eq!(slugify("Привет Мир"), "privet-mir");
        assert_eq!(slugify("Сергей Бодров"), "sergey-bodrov");
        assert_eq!(slugify("Фёдор Бондарчук"), "fedor-bondarchuk");
    }

    #[test]
    fn test_slugify_cyrillic_digraphs() {
        // Multi-letter romanizations and dropped signs.
        assert_eq!(slugify("Жанна"), "zhanna");
        assert_eq!(slugify("Щука"), "shchuka");
        assert_eq!(slugify("Хабаровск"), "khabarovsk");
        assert_eq!(slugify("Объект"), "obekt");
        assert_eq!(slugify("Юлия Яковлева"), "yuliya-yakovleva");
    }

    #[test]
    fn test_slugify_mixed_scripts() {
        assert_eq!(slugify("Актёр Actor 1"), "akter-actor-1");
    }

    #[test]
    fn test_transliterate_preserves_non_cyrillic() {
        assert_eq!(transliterate("abc-123"), "abc-123");
    }
}
