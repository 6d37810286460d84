

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn quiz_fixture_contains_wrapped_array() {
        let completion = quiz_completion();
        assert!(completion.contains('['));
        assert!(!completion.trim().starts_with('['));
    }

    #[test]
    fn assessment_fixture_contains_wrapped_object() {
        let completion = assessment_completion();
        assert!(completion.contains('{'));
        assert!(!completion.trim().starts_with('{'));
    }
}
