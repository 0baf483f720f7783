/// Prefix carried by `$ref` values pointing into the component schemas.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Reduce a `$ref` value to the raw component-schema key.
pub fn strip_ref_prefix(key: &str) -> &str {
    key.strip_prefix(SCHEMA_REF_PREFIX).unwrap_or(key)
}

/// Flatten a raw schema key into a single legal interface name.
///
/// Dotted namespaces collapse (`Volo.Abp.Identity.RoleDto` →
/// `VoloAbpIdentityRoleDto`), nested-type `+` separators become `_`, and a
/// backtick generic-arity marker splits the key: the first bracketed type
/// argument is appended to the base with `_`, so a generic container of one
/// argument collapses to a concrete, non-generic output name.
pub fn dto_interface_name(raw_key: &str) -> String {
    let flat: String = strip_ref_prefix(raw_key)
        .chars()
        .filter(|c| *c != '.')
        .collect();

    match split_generic(&flat) {
        Some((base, argument)) => format!("{}_{}", base.replace('+', "_"), argument),
        None => flat.replace('+', "_"),
    }
}

/// Split a key at a generic-arity marker (a backtick followed by a digit),
/// returning the base name and the first type argument stripped of its
/// bracket decoration.
fn split_generic(key: &str) -> Option<(&str, String)> {
    let marker = key.char_indices().find(|&(i, c)| {
        c == '`'
            && key[i + 1..]
                .chars()
                .next()
                .is_some_and(|next| next.is_ascii_digit())
    })?;

    let base = &key[..marker.0];
    let rest = key[marker.0 + 1..].trim_start_matches(|c: char| c.is_ascii_digit());
    let argument = rest
        .trim_start_matches('[')
        .split(',')
        .next()
        .unwrap_or("")
        .trim_end_matches(']')
        .trim()
        .to_string();

    Some((base, argument))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ref_prefix() {
        assert_eq!(strip_ref_prefix("#/components/schemas/RoleDto"), "RoleDto");
        assert_eq!(strip_ref_prefix("RoleDto"), "RoleDto");
    }

    #[test]
    fn test_dotted_namespace_flattens() {
        insta::assert_snapshot!(
            dto_interface_name("#/components/schemas/Volo.Abp.Identity.RoleDto"),
            @"VoloAbpIdentityRoleDto"
        );
    }

    #[test]
    fn test_nested_type_separator() {
        assert_eq!(dto_interface_name("Outer+Inner"), "Outer_Inner");
    }

    #[test]
    fn test_generic_key_flattens() {
        insta::assert_snapshot!(
            dto_interface_name(
                "Volo.Abp.Application.Dtos.PagedResultDto`1[[Volo.Abp.Identity.RoleDto, Volo.Abp.Identity]]"
            ),
            @"VoloAbpApplicationDtosPagedResultDto_VoloAbpIdentityRoleDto"
        );
    }

    #[test]
    fn test_generic_single_argument_brackets() {
        assert_eq!(
            dto_interface_name("ListResultDto`1[[UserDto]]"),
            "ListResultDto_UserDto"
        );
    }

    #[test]
    fn test_plain_key_unchanged() {
        assert_eq!(dto_interface_name("RoleDto"), "RoleDto");
    }
}
