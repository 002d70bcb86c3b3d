//! HTML/script neutralization for free-text fields.

/// Neutralizes markup in `input`. Text without HTML syntax is returned as is,
/// so `Tom & Jerry` and `a < b` keep their spelling. Text with markup is run
/// through `ammonia`, which drops scripts and disallowed tags and
/// entity-escapes the rest.
pub fn sanitize(input: &str) -> String {
    if ammonia::is_html(input) {
        ammonia::clean(input)
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Buy milk", "Buy milk")]
    #[case("Tom & Jerry", "Tom & Jerry")]
    #[case("a < b > c", "a < b > c")]
    #[case("say \"hi\" it's fine", "say \"hi\" it's fine")]
    #[case("&lt;already escaped&gt;", "&lt;already escaped&gt;")]
    #[case("Ship <b>v2</b>", "Ship <b>v2</b>")]
    #[case("a <script>alert(1)</script>b", "a b")]
    fn sanitize_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    #[test]
    fn sanitize_removes_script_content_entirely() {
        assert_eq!(sanitize("<script>steal()</script>"), "");
    }
}
