// crates/search/src/infrastructure/postgres/utils/like_pattern.rs

/// Motif `ILIKE` "contient", avec les jokers de l'utilisateur échappés
/// (`\` est le caractère d'échappement par défaut de Postgres).
pub fn contains_pattern(raw: &str) -> String {
    let mut pattern = String::with_capacity(raw.len() + 2);
    pattern.push('%');
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_wrapped() {
        assert_eq!(contains_pattern("ada"), "%ada%");
    }

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"c:\tmp"), r"%c:\\tmp%");
    }
}
