use crate::constants::DERIVED_GROUP;

/// `"True"` for fields in the `Derived` group, `"False"` for everything else.
///
/// The comparison is case sensitive and on the whole value, so `derived` or
/// `Derived field` are not derived.
pub fn derived_flag(field_group: &str) -> &'static str {
    if field_group == DERIVED_GROUP {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Derived", "True")]
    #[case("derived", "False")]
    #[case("Derived field", "False")]
    #[case(" Derived", "False")]
    #[case("", "False")]
    #[case("Demographics", "False")]
    #[case("True", "False")]
    fn test_derived_flag(#[case] field_group: &str, #[case] expected: &str) {
        assert_eq!(derived_flag(field_group), expected);
    }
}
