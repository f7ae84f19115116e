/// Split a raw multi-valued field into its discrete facet values
///
/// Newlines, semicolons and pipes separate values; commas are applied as a
/// second pass to whatever is left. Tokens are trimmed, blanks are dropped
/// and repeats keep their first position.
pub fn split_values(raw: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();

    for token in raw
        .split(['\n', '\r', ';', '|'])
        .flat_map(|token| token.split(','))
    {
        let token = token.trim();
        if token.is_empty() || values.iter().any(|seen| seen == token) {
            continue;
        }
        values.push(token.to_string());
    }

    values
}
