/// Unordered list: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(block: &str) -> bool {
        block.split('\n').all(|line| line.starts_with(Self::MARKER))
    }

    /// Item texts with markers removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .map(|line| line.strip_prefix(Self::MARKER).unwrap_or(line))
            .collect()
    }
}

/// Ordered list: line `i` starts with `{i + 1}. `, counting from 1 without gaps.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the zero-based line `index`.
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    pub fn matches(block: &str) -> bool {
        block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    /// Item texts with markers removed.
    pub fn items(block: &str) -> Vec<&str> {
        block
            .split('\n')
            .enumerate()
            .map(|(i, line)| line.strip_prefix(Self::marker(i).as_str()).unwrap_or(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- unordered list", true)]
    #[case("- this is\n- a list", true)]
    #[case("-ul without space after -", false)]
    #[case("- one\n* two", false)]
    fn unordered_detection(#[case] block: &str, #[case] expected: bool) {
        assert_eq!(UnorderedList::matches(block), expected);
    }

    #[test]
    fn unordered_items() {
        assert_eq!(UnorderedList::items("- one\n- two"), vec!["one", "two"]);
    }

    #[test]
    fn unordered_strips_only_one_marker() {
        assert_eq!(UnorderedList::items("- - dash"), vec!["- dash"]);
    }

    #[rstest]
    #[case("1. one\n2. two\n3. three", true)]
    #[case("1. a", true)]
    #[case("1. one\n2.two\n3. three", false)]
    #[case("1. one\n3. two\n4. three", false)]
    #[case("1. one\n2 two\n3. three", false)]
    #[case("2. starts late", false)]
    #[case("0. zero based", false)]
    fn ordered_detection(#[case] block: &str, #[case] expected: bool) {
        assert_eq!(OrderedList::matches(block), expected);
    }

    #[test]
    fn ordered_items() {
        assert_eq!(OrderedList::items("1. a\n2. b\n3. c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn ordered_marker_beyond_nine() {
        let block: String = (0..11)
            .map(|i| format!("{}item", OrderedList::marker(i)))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(OrderedList::matches(&block));
        assert_eq!(OrderedList::items(&block)[10], "item");
    }

    #[test]
    fn ordered_strips_only_its_own_number() {
        assert_eq!(OrderedList::items("1. 1. twice"), vec!["1. twice"]);
    }
}
